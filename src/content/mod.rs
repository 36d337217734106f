//! The content tree and the store that owns it.
//!
//! # Snapshot Layout
//!
//! ```text
//! { "books": [
//!     { "id", "number", "name", "category", "description",
//!       "resources"?: [Resource],
//!       "stories": [
//!         { "id", "title", "reference", "summary",
//!           "themes"?: [string],
//!           "resources": [ { "type", "title", "author"?, "collection"?, "url" } ] } ] } ] }
//! ```

pub mod category;
pub mod error;
pub mod model;
pub mod store;

pub use category::{BadgeStyle, Category};
pub use error::ContentError;
pub use model::{Availability, Book, Resource, Story};
pub use store::{ContentStore, Snapshot};
