//! Simplify engine: cleaning-service client, markup builders and effect execution.
mod client;
mod engine;
mod panel;
mod replace;
mod types;

pub use client::{ClientSettings, ReqwestSnapshotClient, SnapshotClient};
pub use engine::EngineHandle;
pub use panel::{panel_markup, PANEL_ELEMENT_ID};
pub use replace::{with_undo_control, UNDO_BUTTON_ID, UNDO_SCRIPT_ID};
pub use types::{CleanError, EngineEvent, FailureKind};
