//! Error types for the greeting deck.
//!
//! Navigation and reveal operations are total, so the only fallible path is
//! loading a content table.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a [`DeckContent`](crate::DeckContent).
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Content parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid content: {0}")]
    Invalid(String),
}

/// Result alias for content operations.
pub type ContentResult<T> = Result<T, ContentError>;
