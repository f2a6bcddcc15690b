//! Error types for zenon-analytics.

use thiserror::Error;

/// Reasons a sink could not take an event. Never surfaced past [`Analytics`](crate::Analytics).
#[derive(Debug, Error)]
pub enum SinkError {
    /// No analytics backend is loaded.
    #[error("analytics backend unavailable")]
    Unavailable,

    /// The backend refused the event.
    #[error("event rejected: {0}")]
    Rejected(String),

    /// Properties could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
