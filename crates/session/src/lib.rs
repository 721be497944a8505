//! Installer session state shared by the custom actions.
//!
//! The installer host owns a flat string-to-string property bag. Actions
//! receive it explicitly as a [`PropertyBag`] and go through the typed
//! accessors in [`InstallProperties`] for the keys they know about.

mod bag;
mod properties;

pub use bag::{MemorySession, PropertyBag};
pub use properties::{ActionResult, InstallProperties, Validity, keys};

/// Errors from loading or saving a session file.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
