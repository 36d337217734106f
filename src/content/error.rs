//! Errors raised while building the content store.

use std::path::PathBuf;

use thiserror::Error;

/// Failures loading or validating a snapshot.
///
/// Lookups against a loaded store never fail; they return `None`.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read snapshot at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate book id '{id}'")]
    DuplicateBook { id: String },

    #[error("Duplicate story id '{story_id}' in book '{book_id}'")]
    DuplicateStory { book_id: String, story_id: String },
}
