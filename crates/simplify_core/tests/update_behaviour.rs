use std::sync::Once;

use simplify_core::{update, Effect, Msg, PageState, TabState};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(simplify_logging::initialize_for_tests);
}

fn loaded_page() -> (TabState, Vec<Effect>) {
    update(
        TabState::new(),
        Msg::PageLoaded {
            url: "https://example.com/article".to_string(),
            outer_html: "<html><body>original</body></html>".to_string(),
        },
    )
}

fn ready_page() -> TabState {
    let (state, _) = loaded_page();
    let (state, _) = update(state, Msg::PrefetchDue);
    let (state, _) = update(
        state,
        Msg::CleanReady {
            html: "<html><body>clean</body></html>".to_string(),
        },
    );
    state
}

#[test]
fn page_loaded_bootstraps_panel_and_prefetch() {
    init_logging();
    let (mut state, effects) = loaded_page();

    assert_eq!(state.page(), PageState::NotFetched);
    assert_eq!(state.page_url(), Some("https://example.com/article"));
    assert!(state.consume_dirty());
    assert_eq!(
        effects,
        vec![
            Effect::EnsurePanel {
                page_url: "https://example.com/article".to_string(),
            },
            Effect::SchedulePrefetch,
        ]
    );
}

#[test]
fn second_page_loaded_is_a_noop() {
    init_logging();
    let (mut state, _) = loaded_page();
    assert!(state.consume_dirty());
    let before = state.clone();

    let (mut state, effects) = update(
        state,
        Msg::PageLoaded {
            url: "https://example.com/other".to_string(),
            outer_html: "<html><body>other</body></html>".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.page_url(), before.page_url());
}

#[test]
fn prefetch_due_moves_to_loading_with_original_snapshot() {
    init_logging();
    let (state, _) = loaded_page();
    let (state, effects) = update(state, Msg::PrefetchDue);

    assert_eq!(state.page(), PageState::Loading);
    assert_eq!(
        effects,
        vec![Effect::FetchClean {
            html: "<html><body>original</body></html>".to_string(),
        }]
    );
}

#[test]
fn prefetch_due_before_page_loaded_is_a_noop() {
    init_logging();
    let (state, effects) = update(TabState::new(), Msg::PrefetchDue);

    assert_eq!(state.page(), PageState::NotFetched);
    assert!(effects.is_empty());
}

#[test]
fn prefetch_suppressed_while_loading_and_after_cache() {
    init_logging();
    let (state, _) = loaded_page();
    let (state, _) = update(state, Msg::PrefetchDue);

    // A second timer shot while the request is in flight does nothing.
    let (state, effects) = update(state, Msg::PrefetchDue);
    assert_eq!(state.page(), PageState::Loading);
    assert!(effects.is_empty());

    let (state, _) = update(
        state,
        Msg::CleanReady {
            html: "<html><body>clean</body></html>".to_string(),
        },
    );
    assert!(state.has_cleaned_snapshot());

    // Cached snapshot: no refetch for the rest of the page lifetime.
    let (state, effects) = update(state, Msg::PrefetchDue);
    assert_eq!(state.page(), PageState::Ready);
    assert!(effects.is_empty());
}

#[test]
fn clean_ready_moves_loading_to_ready() {
    init_logging();
    let state = ready_page();
    assert_eq!(state.page(), PageState::Ready);
    assert!(state.has_cleaned_snapshot());
}

#[test]
fn clean_failed_moves_loading_to_fetch_failed() {
    init_logging();
    let (state, _) = loaded_page();
    let (state, _) = update(state, Msg::PrefetchDue);
    let (state, effects) = update(
        state,
        Msg::CleanFailed {
            reason: "http status 500".to_string(),
        },
    );

    assert_eq!(state.page(), PageState::FetchFailed);
    assert!(effects.is_empty());
    assert!(!state.has_cleaned_snapshot());
}

#[test]
fn late_clean_result_after_failure_is_ignored() {
    init_logging();
    let (state, _) = loaded_page();
    let (state, _) = update(state, Msg::PrefetchDue);
    let (state, _) = update(
        state,
        Msg::CleanFailed {
            reason: "timeout".to_string(),
        },
    );

    let (state, effects) = update(
        state,
        Msg::CleanReady {
            html: "<html><body>late</body></html>".to_string(),
        },
    );

    assert_eq!(state.page(), PageState::FetchFailed);
    assert!(effects.is_empty());
    assert!(!state.has_cleaned_snapshot());
}

#[test]
fn click_while_ready_replaces_document_with_cached_snapshot() {
    init_logging();
    let state = ready_page();
    let (state, effects) = update(state, Msg::ButtonClicked);

    assert_eq!(state.page(), PageState::Simplified);
    assert_eq!(
        effects,
        vec![Effect::ReplaceDocument {
            html: "<html><body>clean</body></html>".to_string(),
        }]
    );
}

#[test]
fn click_while_simplified_requests_reload() {
    init_logging();
    let state = ready_page();
    let (state, _) = update(state, Msg::ButtonClicked);
    let (state, effects) = update(state, Msg::ButtonClicked);

    assert_eq!(state.page(), PageState::Simplified);
    assert_eq!(effects, vec![Effect::ReloadPage]);
}
