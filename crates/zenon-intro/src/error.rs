//! Error types for zenon-intro.

use thiserror::Error;

/// Result type for zenon-intro operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the seen-flag store. The intro itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage is not available in this environment.
    #[error("storage unavailable")]
    Unavailable,

    /// Stored record could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
