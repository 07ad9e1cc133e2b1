use crate::view_model::{button_view, PageViewModel};

/// Lifecycle of the simplified-page snapshot for one document.
///
/// `Loading` is only reachable from `NotFetched`, and `Simplified` only from
/// `Ready`. A full page reload discards the whole `TabState`, which is how
/// every state eventually resets to `NotFetched`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageState {
    #[default]
    NotFetched,
    Loading,
    Ready,
    Simplified,
    FetchFailed,
}

/// All mutable state for one document lifetime.
///
/// Constructed once per page and threaded through `update`; nothing here is
/// global. The state is destroyed together with the document on reload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabState {
    initialized: bool,
    page_url: Option<String>,
    original: Option<String>,
    cleaned: Option<String>,
    page: PageState,
    dirty: bool,
}

impl TabState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn page_url(&self) -> Option<&str> {
        self.page_url.as_deref()
    }

    pub fn has_cleaned_snapshot(&self) -> bool {
        self.cleaned.is_some()
    }

    pub fn view(&self) -> PageViewModel {
        PageViewModel {
            page: self.page,
            button: button_view(self.page),
        }
    }

    /// Returns whether a re-render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// First-time bootstrap: captures the URL and the original snapshot.
    /// Returns false if the document was already initialized.
    pub(crate) fn begin_page(&mut self, url: String, outer_html: String) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        self.page_url = Some(url);
        self.original = Some(outer_html);
        self.dirty = true;
        true
    }

    /// True when a prefetch may start: initialized, never fetched, nothing cached.
    pub(crate) fn can_prefetch(&self) -> bool {
        self.initialized && self.page == PageState::NotFetched && self.cleaned.is_none()
    }

    /// Moves to `Loading` and hands out the original snapshot for the request.
    pub(crate) fn begin_prefetch(&mut self) -> Option<String> {
        let original = self.original.clone()?;
        self.page = PageState::Loading;
        self.dirty = true;
        Some(original)
    }

    pub(crate) fn accept_cleaned(&mut self, html: String) {
        self.cleaned = Some(html);
        self.page = PageState::Ready;
        self.dirty = true;
    }

    pub(crate) fn record_fetch_failure(&mut self) {
        self.page = PageState::FetchFailed;
        self.dirty = true;
    }

    /// Moves to `Simplified` and hands out the cached snapshot for replacement.
    pub(crate) fn apply_simplified(&mut self) -> Option<String> {
        let cleaned = self.cleaned.clone()?;
        self.page = PageState::Simplified;
        self.dirty = true;
        Some(cleaned)
    }
}
