use crate::{Effect, Msg, PageState, TabState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: TabState, msg: Msg) -> (TabState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageLoaded { url, outer_html } => {
            if !state.begin_page(url, outer_html) {
                // Duplicate content-script injection; the first bootstrap won.
                return (state, Vec::new());
            }
            let page_url = state
                .page_url()
                .map(ToOwned::to_owned)
                .unwrap_or_default();
            vec![Effect::EnsurePanel { page_url }, Effect::SchedulePrefetch]
        }
        Msg::PrefetchDue => {
            // Fetch-once policy: a cached snapshot, an in-flight request or a
            // recorded failure all suppress the prefetch.
            if !state.can_prefetch() {
                return (state, Vec::new());
            }
            match state.begin_prefetch() {
                Some(html) => vec![Effect::FetchClean { html }],
                None => Vec::new(),
            }
        }
        Msg::CleanReady { html } => {
            if state.page() == PageState::Loading {
                state.accept_cleaned(html);
            }
            Vec::new()
        }
        Msg::CleanFailed { reason: _ } => {
            if state.page() == PageState::Loading {
                state.record_fetch_failure();
            }
            Vec::new()
        }
        Msg::ButtonClicked => match state.page() {
            PageState::Ready => match state.apply_simplified() {
                Some(html) => vec![Effect::ReplaceDocument { html }],
                None => Vec::new(),
            },
            PageState::Simplified => vec![Effect::ReloadPage],
            // Button is rendered disabled in these states; a stray click is a no-op.
            PageState::NotFetched | PageState::Loading | PageState::FetchFailed => Vec::new(),
        },
    };

    (state, effects)
}
