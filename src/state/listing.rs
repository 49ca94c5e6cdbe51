//! View state for the product listing.
//!
//! [`ListingState`] owns the result set from the latest successful fetch and
//! every flag the query pipeline reads. It is mutated only by the handlers in
//! [`crate::logic`]; rendering derives from it through
//! [`crate::logic::derive_view`].

use crate::state::types::{EmptyState, Product, SortMode};

/// Result set plus the filter, sort and paging flags applied to it.
#[derive(Debug, Clone)]
pub struct ListingState {
    /// Full product list from the most recent successful fetch.
    pub catalog: Vec<Product>,
    /// Submitted search text; the name filter reads this, not the live input.
    pub query: String,
    /// Active price ordering.
    pub sort_mode: SortMode,
    /// 1-based page index; never zero.
    pub current_page: usize,
    /// Whether only discounted products are displayed.
    pub discount_filter_active: bool,
    /// Products with `price_drop > 0` in `catalog`, regardless of filters.
    pub discounted_count: usize,
    /// At least one fetch succeeded.
    pub loaded: bool,
    /// The latest issued request has not completed yet.
    pub loading: bool,
    /// Message from the most recent failed fetch, cleared on success.
    pub load_error: Option<String>,
    /// Identifier of the latest request whose result may be committed.
    pub latest_request_id: u64,
    /// Next request identifier to allocate.
    pub next_request_id: u64,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            catalog: Vec::new(),
            query: String::new(),
            sort_mode: SortMode::None,
            current_page: 1,
            discount_filter_active: false,
            discounted_count: 0,
            loaded: false,
            loading: false,
            load_error: None,
            latest_request_id: 0,
            next_request_id: 1,
        }
    }
}

impl ListingState {
    /// Why the grid is empty, if it is.
    #[must_use]
    pub fn empty_state(&self) -> Option<EmptyState> {
        crate::logic::derive_view(self).empty_state
    }

    /// Whether the empty/offline panel replaces the grid.
    #[must_use]
    pub fn empty_state_active(&self) -> bool {
        self.empty_state().is_some()
    }
}
