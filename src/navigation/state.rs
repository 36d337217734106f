//! Search text, view mode and sort mode, round-tripped through a query string.
//!
//! Encoding (`application/x-www-form-urlencoded`):
//! - `q`: search text, omitted when empty
//! - `view`: `books` | `topics`
//! - `sort`: `name` | `resources`, omitted for the canonical order

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Which listing the home page shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Books,
    Topics,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Books => "books",
            ViewMode::Topics => "topics",
        }
    }

    /// The other view
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Books => ViewMode::Topics,
            ViewMode::Topics => ViewMode::Books,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "books" => Ok(ViewMode::Books),
            "topics" | "themes" => Ok(ViewMode::Topics),
            _ => anyhow::bail!("Unknown view: {}", s),
        }
    }
}

/// Ordering of the book list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Ascending book number
    #[default]
    Canonical,

    /// Book name, case-insensitive
    Name,

    /// Most resources first
    Resources,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Canonical => "canonical",
            SortMode::Name => "name",
            SortMode::Resources => "resources",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "canonical" | "number" => Ok(SortMode::Canonical),
            "name" => Ok(SortMode::Name),
            "resources" => Ok(SortMode::Resources),
            _ => anyhow::bail!("Unknown sort mode: {}", s),
        }
    }
}

/// A change to navigation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    SetQuery(String),
    ClearQuery,
    SetView(ViewMode),
    ToggleView,
    SetSort(SortMode),
}

/// Everything the home page needs to know about what the user asked for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    pub query: String,
    pub view: ViewMode,
    pub sort: SortMode,
}

impl NavState {
    pub fn new(query: impl Into<String>, view: ViewMode) -> Self {
        Self {
            query: query.into(),
            view,
            sort: SortMode::default(),
        }
    }

    /// Topics view searching for one theme
    pub fn topic(theme: impl Into<String>) -> Self {
        Self::new(theme, ViewMode::Topics)
    }

    /// Set the sort mode
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Apply a change. Returns whether the state actually changed.
    pub fn apply(&mut self, action: NavAction) -> bool {
        let before = self.clone();

        match action {
            NavAction::SetQuery(query) => self.query = query,
            NavAction::ClearQuery => self.query.clear(),
            NavAction::SetView(view) => self.view = view,
            NavAction::ToggleView => self.view = self.view.toggled(),
            NavAction::SetSort(sort) => self.sort = sort,
        }

        *self != before
    }

    /// Encode as a query string (no leading `?`)
    pub fn to_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());

        if !self.query.is_empty() {
            query.append_pair("q", &self.query);
        }
        query.append_pair("view", self.view.as_str());
        if self.sort != SortMode::Canonical {
            query.append_pair("sort", self.sort.as_str());
        }

        query.finish()
    }

    /// Shareable home-page location, e.g. `/?q=exodus&view=topics`
    pub fn to_location(&self) -> String {
        format!("/?{}", self.to_query())
    }

    /// Decode a query string, with or without a leading `?`.
    ///
    /// The first occurrence of each key wins; unknown keys and unknown
    /// `view`/`sort` values fall back to defaults.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut state = Self::default();
        let (mut seen_q, mut seen_view, mut seen_sort) = (false, false, false);

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                "q" if !seen_q => {
                    state.query = value.into_owned();
                    seen_q = true;
                }
                "view" if !seen_view => {
                    state.view = value.parse().unwrap_or_default();
                    seen_view = true;
                }
                "sort" if !seen_sort => {
                    state.sort = value.parse().unwrap_or_default();
                    seen_sort = true;
                }
                _ => {}
            }
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_query_and_view() {
        let state = NavState::new("exodus", ViewMode::Topics);
        let encoded = state.to_query();

        assert_eq!(encoded, "q=exodus&view=topics");
        assert_eq!(NavState::from_query(&encoded), state);
    }

    #[test]
    fn test_empty_query_omitted() {
        let state = NavState::default();
        assert_eq!(state.to_query(), "view=books");
        assert_eq!(state.to_location(), "/?view=books");
    }

    #[test]
    fn test_sort_only_when_not_canonical() {
        let state = NavState::new("", ViewMode::Books).with_sort(SortMode::Name);
        assert_eq!(state.to_query(), "view=books&sort=name");
        assert_eq!(NavState::from_query("?view=books&sort=name"), state);
    }

    #[test]
    fn test_special_characters_round_trip() {
        let state = NavState::new("image of god & more", ViewMode::Topics);
        let encoded = state.to_query();

        assert_eq!(encoded, "q=image+of+god+%26+more&view=topics");
        assert_eq!(NavState::from_query(&encoded), state);
    }

    #[test]
    fn test_lenient_decode() {
        let state = NavState::from_query("view=gallery&sort=random&extra=1&q=ruth&q=jonah");
        assert_eq!(state.view, ViewMode::Books);
        assert_eq!(state.sort, SortMode::Canonical);
        assert_eq!(state.query, "ruth");

        assert_eq!(NavState::from_query(""), NavState::default());
    }

    #[test]
    fn test_apply_actions() {
        let mut state = NavState::default();

        assert!(state.apply(NavAction::SetQuery("exodus".to_string())));
        assert!(!state.apply(NavAction::SetQuery("exodus".to_string())));
        assert!(state.apply(NavAction::ToggleView));
        assert_eq!(state.view, ViewMode::Topics);
        assert!(state.apply(NavAction::SetSort(SortMode::Resources)));
        assert!(state.apply(NavAction::ClearQuery));
        assert!(state.query.is_empty());
        assert!(!state.apply(NavAction::SetView(ViewMode::Topics)));
    }

    #[test]
    fn test_view_and_sort_from_str() {
        assert_eq!("Topics".parse::<ViewMode>().unwrap(), ViewMode::Topics);
        assert_eq!("themes".parse::<ViewMode>().unwrap(), ViewMode::Topics);
        assert!("list".parse::<ViewMode>().is_err());
        assert_eq!("number".parse::<SortMode>().unwrap(), SortMode::Canonical);
        assert!("date".parse::<SortMode>().is_err());
    }
}
