//! Book card and detail-page projections.

use serde::Serialize;

use super::availability::{partition_available, Partition};
use crate::content::{Availability, BadgeStyle, Book, Category, ContentStore, Resource, Story};
use crate::navigation::NavState;

/// What a book card shows in the list view
#[derive(Debug, Clone, Copy)]
pub struct BookSummary<'a> {
    pub book: &'a Book,
    pub category: Category,
    pub story_count: usize,
    pub resource_count: usize,
    pub available: bool,
}

impl<'a> BookSummary<'a> {
    pub fn of(book: &'a Book) -> Self {
        Self {
            book,
            category: book.category_kind(),
            story_count: book.stories.len(),
            resource_count: book.resource_count(),
            available: book.is_available(),
        }
    }

    pub fn badge(&self) -> BadgeStyle {
        self.category.badge()
    }
}

/// A book page: book-level resources and stories split by availability
#[derive(Debug, Clone)]
pub struct BookDetail<'a> {
    pub book: &'a Book,
    pub category: Category,
    pub resources: &'a [Resource],
    pub stories: Partition<&'a Story>,
}

/// Resolve a book page. `None` when the id is unknown.
pub fn book_detail<'a>(store: &'a ContentStore, book_id: &str) -> Option<BookDetail<'a>> {
    let book = store.book(book_id)?;

    Some(BookDetail {
        book,
        category: book.category_kind(),
        resources: &book.resources,
        stories: partition_available(book.stories.iter()),
    })
}

/// A theme chip on a story page and where it leads
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeLink {
    pub theme: String,
    pub location: String,
}

/// A story page
#[derive(Debug, Clone)]
pub struct StoryDetail<'a> {
    pub book: &'a Book,
    pub story: &'a Story,
    pub category: Category,
    pub themes: Vec<ThemeLink>,
}

impl StoryDetail<'_> {
    pub fn is_available(&self) -> bool {
        self.story.is_available()
    }
}

/// Resolve a story page by `(book_id, story_id)`. `None` when either is unknown.
pub fn story_detail<'a>(
    store: &'a ContentStore,
    book_id: &str,
    story_id: &str,
) -> Option<StoryDetail<'a>> {
    let (book, story) = store.story(book_id, story_id)?;

    let themes = story
        .themes
        .iter()
        .map(|theme| ThemeLink {
            theme: theme.clone(),
            location: NavState::topic(theme).to_location(),
        })
        .collect();

    Some(StoryDetail {
        book,
        story,
        category: book.category_kind(),
        themes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ContentStore {
        let res = |url: &str| Resource::new("article", "A", url);
        ContentStore::from_books(vec![Book::new("gen", 1, "Genesis", "Pentateuch")
            .with_resource(res("https://a.org/0"))
            .with_story(Story::new("s1", "Creation").with_theme("creation"))
            .with_story(
                Story::new("s2", "Garden")
                    .with_theme("image of god")
                    .with_resource(res("https://a.org/1")),
            )])
        .unwrap()
    }

    #[test]
    fn test_book_summary_counts() {
        let store = store();
        let summary = BookSummary::of(store.book("gen").unwrap());

        assert_eq!(summary.story_count, 2);
        assert_eq!(summary.resource_count, 2);
        assert!(summary.available);
        assert_eq!(summary.category, Category::Other);
        assert_eq!(summary.badge(), Category::Other.badge());
    }

    #[test]
    fn test_book_detail_partitions_stories() {
        let store = store();
        let detail = book_detail(&store, "gen").unwrap();

        assert_eq!(detail.resources.len(), 1);
        assert_eq!(detail.stories.available.len(), 1);
        assert_eq!(detail.stories.available[0].id, "s2");
        assert_eq!(detail.stories.unavailable[0].id, "s1");
    }

    #[test]
    fn test_detail_lookup_miss() {
        let store = store();
        assert!(book_detail(&store, "exod").is_none());
        assert!(story_detail(&store, "gen", "s9").is_none());
        assert!(story_detail(&store, "exod", "s1").is_none());
    }

    #[test]
    fn test_story_detail_theme_links() {
        let store = store();
        let detail = story_detail(&store, "gen", "s2").unwrap();

        assert!(detail.is_available());
        assert_eq!(detail.themes.len(), 1);
        assert_eq!(detail.themes[0].location, "/?q=image+of+god&view=topics");
    }
}
