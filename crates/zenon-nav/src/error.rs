//! Error types for navigation ports.

use thiserror::Error;

/// Clipboard write failures. Never surfaced to the reader; sharing falls
/// back to the legacy copy path instead.
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard unavailable")]
    Unavailable,

    #[error("clipboard write denied: {0}")]
    Denied(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;
