//! Search-filtered, sorted book lists.

use std::cmp::Reverse;

use crate::content::{Book, ContentStore};
use crate::navigation::SortMode;

/// Books whose name or category contains `query` (case-insensitive),
/// ordered by ascending `number`. An empty query matches every book.
pub fn filter_books<'a>(store: &'a ContentStore, query: &str) -> Vec<&'a Book> {
    let query_lower = query.to_lowercase();

    let mut books: Vec<&Book> = store
        .books()
        .iter()
        .filter(|book| {
            book.name.to_lowercase().contains(&query_lower)
                || book.category.to_lowercase().contains(&query_lower)
        })
        .collect();

    books.sort_by_key(|book| book.number);
    books
}

/// [`filter_books`] re-ordered by the requested sort mode.
///
/// `Canonical` keeps number order. The other modes break ties by number.
pub fn sorted_books<'a>(store: &'a ContentStore, query: &str, sort: SortMode) -> Vec<&'a Book> {
    let mut books = filter_books(store, query);

    match sort {
        SortMode::Canonical => {}
        SortMode::Name => {
            books.sort_by_cached_key(|book| (book.name.to_lowercase(), book.number));
        }
        SortMode::Resources => {
            books.sort_by_key(|book| (Reverse(book.resource_count()), book.number));
        }
    }

    books
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Resource, Story};

    fn store() -> ContentStore {
        let res = |url: &str| Resource::new("article", "A", url);
        ContentStore::from_books(vec![
            Book::new("ruth", 8, "Ruth", "Five Scrolls").with_resource(res("https://a.org/1")),
            Book::new("gen", 1, "Genesis", "Torah"),
            Book::new("exod", 2, "Exodus", "Torah").with_story(
                Story::new("s1", "Bush")
                    .with_resource(res("https://a.org/2"))
                    .with_resource(res("https://a.org/3")),
            ),
            Book::new("ps", 27, "Psalms", "Writings"),
        ])
        .unwrap()
    }

    fn ids(books: &[&Book]) -> Vec<String> {
        books.iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_returns_all_by_number() {
        let store = store();
        assert_eq!(ids(&filter_books(&store, "")), ["gen", "exod", "ruth", "ps"]);
    }

    #[test]
    fn test_query_matches_name_or_category() {
        let store = store();

        assert_eq!(ids(&filter_books(&store, "EXO")), ["exod"]);
        assert_eq!(ids(&filter_books(&store, "torah")), ["gen", "exod"]);
        assert_eq!(ids(&filter_books(&store, "scroll")), ["ruth"]);
        assert!(filter_books(&store, "leviticus").is_empty());
    }

    #[test]
    fn test_sort_by_name() {
        let store = store();
        assert_eq!(
            ids(&sorted_books(&store, "", SortMode::Name)),
            ["exod", "gen", "ps", "ruth"]
        );
    }

    #[test]
    fn test_sort_by_resources_breaks_ties_by_number() {
        let store = store();
        assert_eq!(
            ids(&sorted_books(&store, "", SortMode::Resources)),
            ["exod", "ruth", "gen", "ps"]
        );
    }
}
