//! The home page: navigation state applied to the store.

use super::detail::BookSummary;
use super::filter::sorted_books;
use super::themes::{ThemeEntry, ThemeIndex};
use crate::content::ContentStore;
use crate::navigation::{NavState, ViewMode};

/// One theme heading and the stories under it
#[derive(Debug, Clone)]
pub struct ThemeSection<'a> {
    pub theme: &'a str,
    pub entries: Vec<ThemeEntry<'a>>,
}

impl ThemeSection<'_> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What the home page lists for a given navigation state
#[derive(Debug, Clone)]
pub enum HomeView<'a> {
    Books(Vec<BookSummary<'a>>),
    Topics(Vec<ThemeSection<'a>>),
}

impl HomeView<'_> {
    /// Number of cards or sections shown
    pub fn len(&self) -> usize {
        match self {
            HomeView::Books(books) => books.len(),
            HomeView::Topics(sections) => sections.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Derive the home page. Recomputed on every call; there is no cache.
pub fn home_view<'a>(store: &'a ContentStore, nav: &NavState) -> HomeView<'a> {
    match nav.view {
        ViewMode::Books => HomeView::Books(
            sorted_books(store, &nav.query, nav.sort)
                .into_iter()
                .map(BookSummary::of)
                .collect(),
        ),
        ViewMode::Topics => {
            let index = ThemeIndex::build(store);
            let sections = index
                .themes_matching(&nav.query)
                .into_iter()
                .map(|theme| ThemeSection {
                    theme,
                    entries: index.entries(theme).to_vec(),
                })
                .collect();
            HomeView::Topics(sections)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Book, Resource, Story};

    fn store() -> ContentStore {
        ContentStore::from_books(vec![Book::new("gen", 1, "Genesis", "Pentateuch").with_story(
            Story::new("s1", "Creation")
                .with_theme("creation")
                .with_resource(Resource::new("article", "A", "https://bibleproject.com/x")),
        )])
        .unwrap()
    }

    #[test]
    fn test_books_view() {
        let store = store();
        let view = home_view(&store, &NavState::new("", ViewMode::Books));

        match view {
            HomeView::Books(books) => {
                assert_eq!(books.len(), 1);
                assert_eq!(books[0].book.id, "gen");
            }
            other => panic!("Expected books view, got {:?}", other),
        }
    }

    #[test]
    fn test_topics_view() {
        let store = store();
        let view = home_view(&store, &NavState::new("", ViewMode::Topics));

        match view {
            HomeView::Topics(sections) => {
                assert_eq!(sections.len(), 1);
                assert_eq!(sections[0].theme, "creation");
                assert_eq!(sections[0].entries[0].book_id, "gen");
                assert_eq!(sections[0].entries[0].story.id, "s1");
            }
            other => panic!("Expected topics view, got {:?}", other),
        }
    }

    #[test]
    fn test_topics_view_no_match() {
        let store = store();
        let view = home_view(&store, &NavState::topic("exile"));
        assert!(view.is_empty());
    }
}
