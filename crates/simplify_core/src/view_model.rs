use crate::PageState;

/// Semantic button color; concrete styling is the host's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    Muted,
    Affirmative,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub enabled: bool,
    pub tone: ButtonTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageViewModel {
    pub page: PageState,
    pub button: ButtonView,
}

/// Rendering contract for the floating button, one row per state.
pub fn button_view(page: PageState) -> ButtonView {
    match page {
        PageState::NotFetched => ButtonView {
            label: "Simplify",
            enabled: false,
            tone: ButtonTone::Muted,
        },
        PageState::Loading => ButtonView {
            label: "Loading...",
            enabled: false,
            tone: ButtonTone::Muted,
        },
        PageState::Ready => ButtonView {
            label: "Simplify",
            enabled: true,
            tone: ButtonTone::Affirmative,
        },
        PageState::Simplified => ButtonView {
            label: "Undo",
            enabled: true,
            tone: ButtonTone::Warning,
        },
        PageState::FetchFailed => ButtonView {
            label: "Failed",
            enabled: false,
            tone: ButtonTone::Muted,
        },
    }
}
