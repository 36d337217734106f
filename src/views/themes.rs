//! Theme index: cross-cutting topical browsing over stories.

use std::collections::BTreeMap;

use crate::content::{Availability, ContentStore, Story};

/// One story filed under a theme, with enough of its book to link back
#[derive(Debug, Clone, Copy)]
pub struct ThemeEntry<'a> {
    pub book_id: &'a str,
    pub book_name: &'a str,
    pub story: &'a Story,
}

/// Theme name to the stories tagged with it.
///
/// Only stories with at least one resource are indexed. Keys iterate in
/// lexicographic order.
#[derive(Debug, Clone, Default)]
pub struct ThemeIndex<'a> {
    entries: BTreeMap<&'a str, Vec<ThemeEntry<'a>>>,
}

impl<'a> ThemeIndex<'a> {
    /// Walk every book's stories and file each available story under its themes
    pub fn build(store: &'a ContentStore) -> Self {
        let mut entries: BTreeMap<&'a str, Vec<ThemeEntry<'a>>> = BTreeMap::new();

        for book in store.books() {
            for story in book.stories.iter().filter(|s| s.is_available()) {
                for theme in &story.themes {
                    entries.entry(theme.as_str()).or_default().push(ThemeEntry {
                        book_id: &book.id,
                        book_name: &book.name,
                        story,
                    });
                }
            }
        }

        Self { entries }
    }

    /// All theme names, sorted
    pub fn themes(&self) -> Vec<&'a str> {
        self.entries.keys().copied().collect()
    }

    /// Sorted theme names containing `query` (case-insensitive)
    pub fn themes_matching(&self, query: &str) -> Vec<&'a str> {
        let query_lower = query.to_lowercase();
        self.entries
            .keys()
            .copied()
            .filter(|theme| theme.to_lowercase().contains(&query_lower))
            .collect()
    }

    /// Entries for one theme, in book then story order
    pub fn entries(&self, theme: &str) -> &[ThemeEntry<'a>] {
        self.entries.get(theme).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check whether a story is indexed under any theme
    pub fn contains_story(&self, book_id: &str, story_id: &str) -> bool {
        self.entries
            .values()
            .flatten()
            .any(|e| e.book_id == book_id && e.story.id == story_id)
    }

    /// Get the number of themes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no theme is indexed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
