#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Inject the voice-agent panel for this page (skipped if already present).
    EnsurePanel { page_url: String },
    /// Arm the one-shot prefetch timer; fires back as `Msg::PrefetchDue`.
    SchedulePrefetch,
    /// POST the original document to the cleaning endpoint.
    FetchClean { html: String },
    /// Replace the live document with the cleaned markup (undo control is the
    /// executor's concern).
    ReplaceDocument { html: String },
    /// Trigger a full navigation reload, discarding all in-memory state.
    ReloadPage,
}
