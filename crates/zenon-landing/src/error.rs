//! Error types for the landing host.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid {var}: {reason}")]
    Config { var: &'static str, reason: String },

    #[error("content error: {0}")]
    Content(#[from] zenon_content::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unrecognized command: {0}")]
    Command(String),
}

pub type Result<T> = std::result::Result<T, Error>;
