//! Page routes.
//!
//! | Location                          | Route   |
//! |-----------------------------------|---------|
//! | `/`, `/?q=..&view=..`             | `Home`  |
//! | `/book/<bookId>`                  | `Book`  |
//! | `/book/<bookId>/story/<storyId>`  | `Story` |
//! | anything else                     | `NotFound` |

use url::Url;

use super::state::NavState;

/// Base used to resolve relative locations; never shown to users
const LOCATION_BASE: &str = "http://manifold.local/";

/// A parsed location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home(NavState),
    Book { book_id: String },
    Story { book_id: String, story_id: String },
    NotFound(String),
}

impl Route {
    /// Parse a location such as `/book/genesis` or `/?q=ruth&view=topics`.
    /// Full URLs are accepted too; only path and query are read.
    pub fn parse(location: &str) -> Self {
        let parsed = Url::parse(LOCATION_BASE).and_then(|base| base.join(location.trim()));
        let url = match parsed {
            Ok(url) => url,
            Err(_) => return Route::NotFound(location.to_string()),
        };

        let segments: Option<Vec<String>> = url
            .path_segments()
            .map(|parts| {
                parts
                    .filter(|s| !s.is_empty())
                    .map(|s| urlencoding::decode(s).ok().map(|d| d.into_owned()))
                    .collect()
            })
            .unwrap_or(Some(Vec::new()));

        let Some(segments) = segments else {
            return Route::NotFound(location.to_string());
        };

        match segments.as_slice() {
            [] => Route::Home(NavState::from_query(url.query().unwrap_or(""))),
            [book, book_id] if book == "book" => Route::Book {
                book_id: book_id.clone(),
            },
            [book, book_id, story, story_id] if book == "book" && story == "story" => {
                Route::Story {
                    book_id: book_id.clone(),
                    story_id: story_id.clone(),
                }
            }
            _ => Route::NotFound(location.to_string()),
        }
    }

    /// Canonical location for this route
    pub fn to_location(&self) -> String {
        match self {
            Route::Home(state) => state.to_location(),
            Route::Book { book_id } => format!("/book/{}", urlencoding::encode(book_id)),
            Route::Story { book_id, story_id } => format!(
                "/book/{}/story/{}",
                urlencoding::encode(book_id),
                urlencoding::encode(story_id)
            ),
            Route::NotFound(location) => location.clone(),
        }
    }

    /// Where the "back" control on this page leads
    pub fn parent(&self) -> Route {
        match self {
            Route::Story { book_id, .. } => Route::Book {
                book_id: book_id.clone(),
            },
            _ => Route::Home(NavState::default()),
        }
    }
}
