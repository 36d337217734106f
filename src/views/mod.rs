//! Derived views over the content store.
//!
//! Every function here is pure and synchronous: it borrows the store, returns
//! references into it, and can be called again at any time with the same
//! result.
//!
//! - `filter`: search-filtered and sorted book lists
//! - `themes`: theme → story index (available stories only)
//! - `availability`: order-preserving split by availability
//! - `attribution`: per-domain resource counts
//! - `detail`: book cards, book pages and story pages
//! - `home`: the home page for a navigation state

pub mod attribution;
pub mod availability;
pub mod detail;
pub mod filter;
pub mod home;
pub mod themes;

pub use attribution::{attribute_domains, parse_domain, AttributionRules, DomainCount};
pub use availability::{partition_available, Partition};
pub use detail::{book_detail, story_detail, BookDetail, BookSummary, StoryDetail, ThemeLink};
pub use filter::{filter_books, sorted_books};
pub use home::{home_view, HomeView, ThemeSection};
pub use themes::{ThemeEntry, ThemeIndex};
