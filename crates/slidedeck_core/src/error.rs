//! Application error types for persistence and editor operations.
use thiserror::Error;

/// Top-level editor error type.
///
/// Nothing here is fatal: every variant leaves the in-memory model in its
/// last-known-good state. Validation no-ops (stray field edits, unknown slide
/// ids) are dropped silently and never reach this type.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Storage quota exceeded; free up space and save again")]
    QuotaExceeded,

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Cannot start presenting: the deck has no slides")]
    EmptyDeck,

    #[error("Formatting command \"{0}\" is not supported")]
    UnsupportedCommand(String),
}
