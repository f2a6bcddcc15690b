//! Error types for zenon-content.

use thiserror::Error;

/// Result type for zenon-content operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a deck.
#[derive(Debug, Error)]
pub enum Error {
    /// A deck must contain at least one card.
    #[error("deck is empty")]
    EmptyDeck,

    /// Two cards share the same identifier.
    #[error("duplicate card id: {0}")]
    DuplicateId(String),

    /// A card identifier cannot be used as a single path segment.
    #[error("invalid card id {id:?}: {reason}")]
    InvalidId { id: String, reason: &'static str },

    /// Deck JSON could not be parsed.
    #[error("deck serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
