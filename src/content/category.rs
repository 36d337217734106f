//! Book categories and their badge styling.

use std::fmt;

use serde::Serialize;

/// Known book categories. Anything unrecognised lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Torah,
    FormerProphets,
    LatterProphets,
    FiveScrolls,
    Writings,
    Other,
}

/// Visual tokens for a category badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeStyle {
    /// Badge background token
    pub background: &'static str,

    /// Leading dot token
    pub dot: &'static str,
}

impl Category {
    /// Every known category, in canonical order
    pub const KNOWN: [Category; 5] = [
        Category::Torah,
        Category::FormerProphets,
        Category::LatterProphets,
        Category::FiveScrolls,
        Category::Writings,
    ];

    /// Resolve a snapshot label. Matching ignores case and surrounding whitespace.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "torah" => Category::Torah,
            "former prophets" => Category::FormerProphets,
            "latter prophets" => Category::LatterProphets,
            "five scrolls" => Category::FiveScrolls,
            "writings" => Category::Writings,
            _ => Category::Other,
        }
    }

    /// Whether the label resolved to a known category
    pub fn is_known(self) -> bool {
        self != Category::Other
    }

    /// Badge style for this category. `Other` gets the neutral treatment.
    pub fn badge(self) -> BadgeStyle {
        match self {
            Category::Torah => BadgeStyle {
                background: "category-torah",
                dot: "category-torah-dot",
            },
            Category::FormerProphets => BadgeStyle {
                background: "category-prophets",
                dot: "category-prophets-dot",
            },
            Category::LatterProphets => BadgeStyle {
                background: "category-latter-prophets",
                dot: "category-latter-prophets-dot",
            },
            Category::FiveScrolls => BadgeStyle {
                background: "category-scrolls",
                dot: "category-scrolls-dot",
            },
            Category::Writings => BadgeStyle {
                background: "category-writings",
                dot: "category-writings-dot",
            },
            Category::Other => BadgeStyle {
                background: "gray-100",
                dot: "gray-400",
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Torah => write!(f, "Torah"),
            Category::FormerProphets => write!(f, "Former Prophets"),
            Category::LatterProphets => write!(f, "Latter Prophets"),
            Category::FiveScrolls => write!(f, "Five Scrolls"),
            Category::Writings => write!(f, "Writings"),
            Category::Other => write!(f, "Other"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_labels() {
        assert_eq!(Category::parse("Torah"), Category::Torah);
        assert_eq!(Category::parse("Former Prophets"), Category::FormerProphets);
        assert_eq!(Category::parse("  five scrolls "), Category::FiveScrolls);
        assert_eq!(Category::parse("WRITINGS"), Category::Writings);
    }

    #[test]
    fn test_unknown_label_falls_back() {
        let category = Category::parse("Pentateuch");
        assert_eq!(category, Category::Other);
        assert!(!category.is_known());
        assert_eq!(category.badge().background, "gray-100");
    }

    #[test]
    fn test_display_parses_back() {
        for category in Category::KNOWN {
            assert_eq!(Category::parse(&category.to_string()), category);
        }
    }

    #[test]
    fn test_known_badges_are_distinct() {
        let backgrounds: std::collections::HashSet<_> =
            Category::KNOWN.iter().map(|c| c.badge().background).collect();
        assert_eq!(backgrounds.len(), Category::KNOWN.len());
    }
}
