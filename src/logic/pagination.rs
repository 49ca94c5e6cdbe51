//! Page navigation over the displayed set.

use crate::logic::pipeline::{displayed_set, total_pages};
use crate::state::ListingState;

/// What: Advance to the next page when one exists.
///
/// Inputs:
/// - `listing`: Listing state whose displayed set bounds the page count
///
/// Output:
/// - `true` when the page changed.
pub fn next_page(listing: &mut ListingState) -> bool {
    let pages = total_pages(displayed_set(listing).len());
    if listing.current_page < pages {
        listing.current_page += 1;
        true
    } else {
        false
    }
}

/// Step back one page; no-op on page 1.
pub fn previous_page(listing: &mut ListingState) -> bool {
    if listing.current_page > 1 {
        listing.current_page -= 1;
        true
    } else {
        false
    }
}

/// What: Jump straight to page `n`.
///
/// Inputs:
/// - `listing`: Listing state
/// - `n`: 1-based target page
///
/// Output:
/// - `true` when the page changed.
///
/// Details:
/// - No upper bound is checked; a page past the end renders through the
///   page-window fallback. Page 0 is rejected.
pub fn jump_to_page(listing: &mut ListingState, n: usize) -> bool {
    if n == 0 || n == listing.current_page {
        return false;
    }
    listing.current_page = n;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::catalog;

    fn listing_with(n: usize) -> ListingState {
        ListingState {
            catalog: catalog(n, 0),
            loaded: true,
            ..ListingState::default()
        }
    }

    #[test]
    /// What: Next stops at the last page and previous at page 1
    ///
    /// - Input: 25 products (3 pages)
    /// - Output: Next succeeds twice then no-ops; previous never reaches 0
    fn navigation_is_bounded() {
        let mut listing = listing_with(25);
        assert!(next_page(&mut listing));
        assert!(next_page(&mut listing));
        assert_eq!(listing.current_page, 3);
        assert!(!next_page(&mut listing));
        assert_eq!(listing.current_page, 3);

        for _ in 0..5 {
            previous_page(&mut listing);
        }
        assert_eq!(listing.current_page, 1);
        assert!(!previous_page(&mut listing));
    }

    #[test]
    /// What: Exactly one page of items leaves next disabled
    ///
    /// - Input: 10 products; empty catalog
    /// - Output: Next is a no-op in both cases
    fn next_is_noop_with_single_or_no_page() {
        let mut ten = listing_with(10);
        assert!(!next_page(&mut ten));
        let mut none = listing_with(0);
        assert!(!next_page(&mut none));
        assert_eq!(none.current_page, 1);
    }

    #[test]
    /// What: Jump ignores page 0 and accepts pages past the end
    ///
    /// - Input: 5 products; jump to 0 then 4
    /// - Output: Page stays 1, then becomes 4
    fn jump_rejects_zero_only() {
        let mut listing = listing_with(5);
        assert!(!jump_to_page(&mut listing, 0));
        assert_eq!(listing.current_page, 1);
        assert!(jump_to_page(&mut listing, 4));
        assert_eq!(listing.current_page, 4);
    }
}
