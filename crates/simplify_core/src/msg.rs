#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Bootstrap: the host document became interactive. Idempotent; only the
    /// first occurrence per document lifetime has any effect.
    PageLoaded { url: String, outer_html: String },
    /// The deferred prefetch timer fired.
    PrefetchDue,
    /// Engine delivered the cleaned document text.
    CleanReady { html: String },
    /// Engine reported a fetch failure (network, HTTP status and timeout all
    /// arrive flattened; `reason` is diagnostic only).
    CleanFailed { reason: String },
    /// User clicked the floating Simplify/Undo button.
    ButtonClicked,
}
