//! Core non-UI logic split into modular submodules.

pub mod filter;
pub mod listing;
pub mod pagination;
pub mod pipeline;
pub mod query;
pub mod sort;

// Re-export public APIs so callers can use crate::logic::... directly
pub use filter::{count_discounted, filter_by_name};
pub use listing::{
    apply_catalog_result, clamp_selection, cycle_sort_mode, on_input_edited, refresh,
    set_sort_mode, submit_search, toggle_discount_filter,
};
pub use pagination::{jump_to_page, next_page, previous_page};
pub use pipeline::{ListingView, PAGE_SIZE, derive_view, displayed_set, page_window, total_pages};
pub use query::send_catalog_request;
pub use sort::sort_by_price;
