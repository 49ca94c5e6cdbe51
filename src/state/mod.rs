//! State types for the storefront browser.
//!
//! Split into value types, the listing view state, and the terminal-side
//! application state; everything is re-exported under `crate::state::*`.

pub mod app_state;
pub mod listing;
pub mod types;

pub use app_state::{AppState, CellRect};
pub use listing::ListingState;
pub use types::{
    CatalogRequest, CatalogResult, EmptyState, FetchPurpose, Focus, Notification,
    NotificationKind, Product, SortMode,
};
