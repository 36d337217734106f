//! Navigation state and page routes.
//!
//! The home page is driven entirely by [`NavState`], which round-trips through
//! the location query string so any view can be shared as a link. Mutation goes
//! through [`NavState::apply`] only.

pub mod route;
pub mod state;

pub use route::Route;
pub use state::{NavAction, NavState, SortMode, ViewMode};
