//! Content tree types: books own stories, stories own resources.
//!
//! These mirror the snapshot JSON one-to-one. Nothing here is mutated after
//! the store is loaded; views borrow from these types instead of copying.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// An external study aid (article, video, podcast...) with attribution metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Free-form kind label ("article", "video", ...)
    #[serde(rename = "type")]
    pub kind: String,

    /// Display title
    pub title: String,

    /// Author or presenter, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Series or collection the resource belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,

    /// External link
    pub url: String,
}

impl Resource {
    /// Create a resource with no author or collection
    pub fn new(kind: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            title: title.into(),
            author: None,
            collection: None,
            url: url.into(),
        }
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the collection
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }
}

/// A named passage inside a book; the unit resources attach to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Identifier, unique within the parent book only
    pub id: String,

    pub title: String,

    /// Passage reference, e.g. "Genesis 1-2"
    #[serde(default)]
    pub reference: String,

    #[serde(default)]
    pub summary: String,

    /// Topical tags, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub themes: Vec<String>,

    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Story {
    /// Create a story with no reference, summary, themes or resources
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            reference: String::new(),
            summary: String::new(),
            themes: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Set the passage reference
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    /// Set the summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Add a theme
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.themes.push(theme.into());
        self
    }

    /// Add a resource
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }
}

/// Top-level division of the content tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Globally unique identifier
    pub id: String,

    /// Canonical position; lists are ordered by this
    pub number: i64,

    pub name: String,

    /// Category label as written in the snapshot
    pub category: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub stories: Vec<Story>,

    /// Resources covering the whole book rather than one story
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,
}

impl Book {
    /// Create a book with no description, stories or resources
    pub fn new(
        id: impl Into<String>,
        number: i64,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            number,
            name: name.into(),
            category: category.into(),
            description: String::new(),
            stories: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a story
    pub fn with_story(mut self, story: Story) -> Self {
        self.stories.push(story);
        self
    }

    /// Add a book-level resource
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    /// The category resolved against the known set
    pub fn category_kind(&self) -> Category {
        Category::parse(&self.category)
    }

    /// Look up a story by its id within this book
    pub fn story(&self, story_id: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.id == story_id)
    }

    /// Book-level resources followed by every story's resources, in order
    pub fn all_resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources
            .iter()
            .chain(self.stories.iter().flat_map(|s| s.resources.iter()))
    }

    /// Total number of resources, book-level included
    pub fn resource_count(&self) -> usize {
        self.resources.len() + self.stories.iter().map(|s| s.resources.len()).sum::<usize>()
    }
}

/// Whether an entity has at least one resource attached.
///
/// Availability is always derived from the tree, never stored.
pub trait Availability {
    fn is_available(&self) -> bool;
}

impl Availability for Story {
    fn is_available(&self) -> bool {
        !self.resources.is_empty()
    }
}

impl Availability for Book {
    fn is_available(&self) -> bool {
        !self.resources.is_empty() || self.stories.iter().any(Availability::is_available)
    }
}

impl<T: Availability + ?Sized> Availability for &T {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(url: &str) -> Resource {
        Resource::new("article", "A", url)
    }

    #[test]
    fn test_story_availability() {
        let empty = Story::new("s1", "Creation").with_theme("creation");
        assert!(!empty.is_available());

        let linked = empty.with_resource(article("https://bibleproject.com/x"));
        assert!(linked.is_available());
    }

    #[test]
    fn test_book_availability_from_stories() {
        let book = Book::new("gen", 1, "Genesis", "Torah")
            .with_story(Story::new("s1", "Creation"))
            .with_story(Story::new("s2", "Flood").with_resource(article("https://a.org/1")));

        assert!(book.is_available());
    }

    #[test]
    fn test_book_availability_from_book_resources() {
        let book = Book::new("ruth", 8, "Ruth", "Five Scrolls")
            .with_story(Story::new("s1", "Moab"))
            .with_resource(article("https://a.org/ruth"));

        assert!(book.is_available());

        let bare = Book::new("obad", 31, "Obadiah", "Latter Prophets");
        assert!(!bare.is_available());
    }

    #[test]
    fn test_resource_count_includes_book_level() {
        let book = Book::new("gen", 1, "Genesis", "Torah")
            .with_resource(article("https://a.org/0"))
            .with_story(
                Story::new("s1", "Creation")
                    .with_resource(article("https://a.org/1"))
                    .with_resource(article("https://a.org/2")),
            );

        assert_eq!(book.resource_count(), 3);
        let urls: Vec<_> = book.all_resources().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, ["https://a.org/0", "https://a.org/1", "https://a.org/2"]);
    }

    #[test]
    fn test_resource_json_uses_type_field() {
        let json = r#"{"type":"video","title":"Overview","url":"https://bibleproject.com/v"}"#;
        let resource: Resource = serde_json::from_str(json).unwrap();

        assert_eq!(resource.kind, "video");
        assert!(resource.author.is_none());

        let back = serde_json::to_string(&resource).unwrap();
        assert!(back.contains(r#""type":"video""#));
        assert!(!back.contains("author"));
    }

    #[test]
    fn test_story_lookup_within_book() {
        let book = Book::new("gen", 1, "Genesis", "Torah").with_story(Story::new("s1", "Creation"));

        assert_eq!(book.story("s1").map(|s| s.title.as_str()), Some("Creation"));
        assert!(book.story("s9").is_none());
    }
}
