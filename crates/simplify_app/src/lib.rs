//! Simplify host layer: wires the pure core to the engine behind a
//! [`HostPage`] seam standing in for the browser document.
pub mod config;
mod effects;
pub mod host;
pub mod logging;
mod session;

pub use config::SimplifyConfig;
pub use host::{FileHostPage, HostPage};
pub use session::Session;
