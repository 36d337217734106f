//! The immutable content store.
//!
//! Built once from a JSON snapshot (bundled or on disk) and read-only for
//! the rest of the process. Every view in [`crate::views`] borrows from it.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tokio::fs;
use tracing::{debug, info, warn};

use super::error::ContentError;
use super::model::{Book, Story};

/// Snapshot compiled into the binary
const BUNDLED_SNAPSHOT: &str = include_str!("../../content/content.json");

/// On-disk snapshot layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub books: Vec<Book>,
}

/// Read-only book tree plus the digest of the snapshot it came from
#[derive(Debug, Clone)]
pub struct ContentStore {
    books: Vec<Book>,
    digest: String,
}

impl ContentStore {
    /// Load the snapshot bundled with the binary
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_SNAPSHOT)
    }

    /// Load a snapshot file from disk
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .await
            .map_err(|source| ContentError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let store = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            books = store.books.len(),
            "Loaded content snapshot"
        );
        Ok(store)
    }

    /// Parse and validate a snapshot document
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let snapshot: Snapshot = serde_json::from_str(raw)?;
        Self::build(snapshot.books, digest_of(raw.as_bytes()))
    }

    /// Build a store from already-constructed books
    pub fn from_books(books: Vec<Book>) -> Result<Self, ContentError> {
        let raw = serde_json::to_vec(&Snapshot {
            books: books.clone(),
        })?;
        Self::build(books, digest_of(&raw))
    }

    fn build(books: Vec<Book>, digest: String) -> Result<Self, ContentError> {
        validate(&books)?;

        for book in &books {
            if !book.category_kind().is_known() {
                warn!(
                    book = %book.id,
                    category = %book.category,
                    "Unknown category, using default badge"
                );
            }
        }

        debug!(books = books.len(), digest = %digest, "Content store ready");
        Ok(Self { books, digest })
    }

    /// All books, in snapshot order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Look up a book by id
    pub fn book(&self, book_id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == book_id)
    }

    /// Look up a story by its composite `(book_id, story_id)` key
    pub fn story(&self, book_id: &str, story_id: &str) -> Option<(&Book, &Story)> {
        let book = self.book(book_id)?;
        let story = book.story(story_id)?;
        Some((book, story))
    }

    /// Total stories across all books
    pub fn story_count(&self) -> usize {
        self.books.iter().map(|b| b.stories.len()).sum()
    }

    /// Total resources across all books, book-level included
    pub fn resource_count(&self) -> usize {
        self.books.iter().map(Book::resource_count).sum()
    }

    /// Books whose category label is outside the known set
    pub fn unknown_categories(&self) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| !b.category_kind().is_known())
            .collect()
    }

    /// Hex SHA-256 of the snapshot this store was built from
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Get the number of books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the store has no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

fn digest_of(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Book ids must be unique; story ids must be unique within their book
fn validate(books: &[Book]) -> Result<(), ContentError> {
    let mut book_ids = HashSet::new();

    for book in books {
        if !book_ids.insert(book.id.as_str()) {
            return Err(ContentError::DuplicateBook {
                id: book.id.clone(),
            });
        }

        let mut story_ids = HashSet::new();
        for story in &book.stories {
            if !story_ids.insert(story.id.as_str()) {
                return Err(ContentError::DuplicateStory {
                    book_id: book.id.clone(),
                    story_id: story.id.clone(),
                });
            }
        }
    }

    Ok(())
}
