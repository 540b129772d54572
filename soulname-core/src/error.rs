//! Error types for the Soul Name core library.

use thiserror::Error;

/// Top-level error type for all Soul Name operations.
///
/// An unknown vibe category is deliberately absent: the selector resolves it
/// through fallback instead of rejecting the request.
#[derive(Error, Debug)]
pub enum SoulnameError {
    /// A selection pool had no entries after every fallback was exhausted.
    #[error("Empty selection pool: {what}")]
    EmptyPool {
        /// Which pool was empty (e.g. "surnames", "male given names").
        what: String,
    },

    /// The name dataset document could not be parsed.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Serialization or deserialization failure (history documents).
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SoulnameError {
    /// Shorthand for an [`SoulnameError::EmptyPool`] describing `what`.
    pub(crate) fn empty_pool(what: impl Into<String>) -> Self {
        Self::EmptyPool { what: what.into() }
    }
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, SoulnameError>;
