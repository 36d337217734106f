//! manifold - static study-resource browser
//!
//! A read-only tree of books, stories and resources, plus the derived views a
//! browsing front end needs.
//!
//! # Architecture
//!
//! - The content store is built once from a JSON snapshot and never mutated
//! - Every view is a pure projection borrowing from the store
//! - Navigation state round-trips through a location query string
//!
//! # Modules
//!
//! - `content`: Data model, categories, snapshot loading
//! - `views`: Filtering, theme index, availability, domain attribution, pages
//! - `navigation`: Navigation state and routes
//! - `config`: Layered configuration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # List books in the Torah
//! manifold books -q torah
//!
//! # Open a shared link
//! manifold open "/?q=exile&view=topics"
//!
//! # Show a story page
//! manifold story genesis hagar
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod navigation;
pub mod views;

// Re-export main types at crate root for convenience
pub use content::{Availability, Book, Category, ContentError, ContentStore, Resource, Story};
pub use navigation::{NavAction, NavState, Route, SortMode, ViewMode};
pub use views::{
    attribute_domains, filter_books, home_view, partition_available, AttributionRules,
    DomainCount, HomeView, ThemeIndex,
};
