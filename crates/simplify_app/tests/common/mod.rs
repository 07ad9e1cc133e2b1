#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use simplify_app::HostPage;
use simplify_core::ButtonView;

/// Fake document recording every host-side effect.
pub struct RecordingHost {
    page_url: String,
    outer_html: String,
    appended: Mutex<Vec<String>>,
    button_views: Mutex<Vec<ButtonView>>,
    replaced: Mutex<Vec<String>>,
    reloads: AtomicUsize,
}

impl RecordingHost {
    pub fn new(page_url: impl Into<String>, outer_html: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            outer_html: outer_html.into(),
            appended: Mutex::new(Vec::new()),
            button_views: Mutex::new(Vec::new()),
            replaced: Mutex::new(Vec::new()),
            reloads: AtomicUsize::new(0),
        }
    }

    pub fn appended_markup(&self) -> Vec<String> {
        self.appended.lock().unwrap().clone()
    }

    pub fn last_button(&self) -> Option<ButtonView> {
        self.button_views.lock().unwrap().last().copied()
    }

    pub fn button_renders(&self) -> usize {
        self.button_views.lock().unwrap().len()
    }

    pub fn replaced_documents(&self) -> Vec<String> {
        self.replaced.lock().unwrap().clone()
    }

    pub fn reload_count(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

impl HostPage for RecordingHost {
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
            .unwrap()
            .iter()
            .any(|markup| markup.contains(&needle))
    }

    fn append_markup(&self, markup: &str) {
        self.appended.lock().unwrap().push(markup.to_string());
    }

    fn set_button(&self, view: &ButtonView) {
        self.button_views.lock().unwrap().push(*view);
    }

    fn replace_document(&self, html: &str) {
        self.replaced.lock().unwrap().push(html.to_string());
    }

    fn reload(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }
}
