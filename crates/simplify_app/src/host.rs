use std::sync::Mutex;

use simplify_core::ButtonView;
use simplify_logging::simplify_info;

/// Everything the flow needs from the hosting document.
///
/// A browser host backs this with the live DOM; tests use a recording fake;
/// the demo binary uses [`FileHostPage`]. `replace_document` and `reload` are
/// terminal for the page the trait describes, so implementations should treat
/// any later call as addressing a fresh document.
pub trait HostPage: Send + Sync {
    fn page_url(&self) -> String;
    fn outer_html(&self) -> String;
    /// True when an element with the given id already exists in the document.
    fn contains_element(&self, element_id: &str) -> bool;
    fn append_markup(&self, markup: &str);
    /// Renders the floating button, creating it on the first call.
    fn set_button(&self, view: &ButtonView);
    /// Replaces the whole document with the given markup.
    fn replace_document(&self, html: &str);
    /// Full navigation reload of the original page.
    fn reload(&self);
}

/// Host over a saved page: markup side effects are tracked in memory and the
/// replaced document is written to stdout. Used by the demo binary.
pub struct FileHostPage {
    page_url: String,
    outer_html: String,
    appended: Mutex<Vec<String>>,
}

impl FileHostPage {
    pub fn new(page_url: impl Into<String>, outer_html: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            outer_html: outer_html.into(),
            appended: Mutex::new(Vec::new()),
        }
    }
}

impl HostPage for FileHostPage {
    fn page_url(&self) -> String {
        self.page_url.clone()
    }

    fn outer_html(&self) -> String {
        self.outer_html.clone()
    }

    fn contains_element(&self, element_id: &str) -> bool {
        let needle = format!("id=\"{element_id}\"");
        self.appended
            .lock()
            .map(|markup| markup.iter().any(|entry| entry.contains(&needle)))
            .unwrap_or(false)
    }

    fn append_markup(&self, markup: &str) {
        if let Ok(mut appended) = self.appended.lock() {
            appended.push(markup.to_string());
        }
    }

    fn set_button(&self, view: &ButtonView) {
        simplify_info!(
            "button: label={:?} enabled={} tone={:?}",
            view.label,
            view.enabled,
            view.tone
        );
    }

    fn replace_document(&self, html: &str) {
        println!("{html}");
    }

    fn reload(&self) {
        simplify_info!("reload requested for {}", self.page_url);
    }
}
