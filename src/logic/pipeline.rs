//! Derivation of the visible page from the listing state.
//!
//! The pipeline runs on every frame and never mutates state:
//! name filter, then price sort, then discount filter, then page window.

use crate::logic::filter::{filter_by_name, retain_discounted};
use crate::logic::sort::sort_by_price;
use crate::state::{EmptyState, ListingState, Product};

/// Products per page.
pub const PAGE_SIZE: usize = 10;

/// Everything the grid, toolbar and pagination control need for one frame.
#[derive(Debug, Clone)]
pub struct ListingView<'a> {
    /// Products in the current page window.
    pub page_items: Vec<&'a Product>,
    /// Length of the displayed set (after filter, sort and discount filter).
    pub displayed_len: usize,
    /// `ceil(displayed_len / PAGE_SIZE)`.
    pub total_pages: usize,
    /// Reason the grid is empty, if it is.
    pub empty_state: Option<EmptyState>,
}

/// What: Apply name filter, price sort and discount filter to the result set.
///
/// Inputs:
/// - `state`: Listing state holding the catalog, query, sort mode and discount flag
///
/// Output:
/// - The displayed set, borrowed from `state.catalog`.
#[must_use]
pub fn displayed_set(state: &ListingState) -> Vec<&Product> {
    let mut items = filter_by_name(&state.catalog, &state.query);
    sort_by_price(&mut items, state.sort_mode);
    if state.discount_filter_active {
        retain_discounted(&mut items);
    }
    items
}

/// What: Slice one page out of the displayed set.
///
/// Inputs:
/// - `displayed`: Displayed set
/// - `page`: 1-based page number
///
/// Output:
/// - Items `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)` clamped to the set.
///
/// Details:
/// - When the start index is at or past the end (a stale page after the set
///   shrank), the first `PAGE_SIZE` items are appended to the empty slice so
///   something stays visible. The page number itself is left untouched.
#[must_use]
pub fn page_window<T: Clone>(displayed: &[T], page: usize) -> Vec<T> {
    let last = page.saturating_mul(PAGE_SIZE);
    let first = last.saturating_sub(PAGE_SIZE);
    let mut window: Vec<T> = displayed
        .get(first.min(displayed.len())..last.min(displayed.len()))
        .map(<[T]>::to_vec)
        .unwrap_or_default();
    if first >= displayed.len() {
        window.extend_from_slice(&displayed[..PAGE_SIZE.min(displayed.len())]);
    }
    window
}

/// Number of pages needed for `len` displayed items.
#[must_use]
pub const fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// What: Classify why nothing is displayed.
///
/// Inputs:
/// - `state`: Listing state
/// - `displayed_len`: Length of the displayed set
///
/// Output:
/// - `None` while there is something to show or the first load is pending;
///   otherwise the most specific [`EmptyState`].
#[must_use]
pub fn empty_state(state: &ListingState, displayed_len: usize) -> Option<EmptyState> {
    if displayed_len > 0 {
        return None;
    }
    if state.catalog.is_empty() && state.load_error.is_some() {
        return Some(EmptyState::LoadFailed);
    }
    if !state.loaded {
        return None;
    }
    if state.catalog.is_empty() {
        return Some(EmptyState::Empty);
    }
    if !state.query.is_empty() && filter_by_name(&state.catalog, &state.query).is_empty() {
        return Some(EmptyState::NoMatches);
    }
    if state.discount_filter_active {
        return Some(EmptyState::NoDiscounts);
    }
    None
}

/// What: Run the whole pipeline for one frame.
///
/// Inputs:
/// - `state`: Listing state
///
/// Output:
/// - [`ListingView`] with the page window, counts and empty-state reason.
#[must_use]
pub fn derive_view(state: &ListingState) -> ListingView<'_> {
    let displayed = displayed_set(state);
    let displayed_len = displayed.len();
    ListingView {
        page_items: page_window(&displayed, state.current_page),
        displayed_len,
        total_pages: total_pages(displayed_len),
        empty_state: empty_state(state, displayed_len),
    }
}
