use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::{
    clamp_selection, cycle_sort_mode, derive_view, jump_to_page, next_page, previous_page,
    refresh, toggle_discount_filter,
};
use crate::state::{AppState, CatalogRequest, Focus};

/// What: Handle a key while the product grid has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `catalog_tx`: Channel to the catalog worker
///
/// Output:
/// - `true` when the user asked to quit.
///
/// Details:
/// - `s` cycles the sort mode, `d` toggles the discount filter, `r` and
///   Enter on a tile refresh the catalog.
/// - Left/Right (or `h`/`l`) page, Home/End jump to the first/last page,
///   digits `1`-`9` jump straight to that page.
/// - Up/Down (or `k`/`j`) move the tile highlight within the page.
pub fn handle_browse_key(
    ke: KeyEvent,
    app: &mut AppState,
    catalog_tx: &mpsc::UnboundedSender<CatalogRequest>,
) -> bool {
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('/') | KeyCode::Tab => app.focus = Focus::Search,
        KeyCode::Esc => app.focus = Focus::Search,
        KeyCode::Char('s') => cycle_sort_mode(&mut app.listing),
        KeyCode::Char('d') => toggle_discount_filter(app, catalog_tx),
        KeyCode::Char('r') | KeyCode::Enter => refresh(app, catalog_tx),
        KeyCode::Right | KeyCode::Char('l') => {
            if next_page(&mut app.listing) {
                app.selected = 0;
            }
        }
        KeyCode::Left | KeyCode::Char('h') => {
            if previous_page(&mut app.listing) {
                app.selected = 0;
            }
        }
        KeyCode::Home => {
            if jump_to_page(&mut app.listing, 1) {
                app.selected = 0;
            }
        }
        KeyCode::End => {
            let last = derive_view(&app.listing).total_pages;
            if jump_to_page(&mut app.listing, last) {
                app.selected = 0;
            }
        }
        KeyCode::Char(c @ '1'..='9') => {
            let page = c.to_digit(10).map_or(1, |d| d as usize);
            if jump_to_page(&mut app.listing, page) {
                app.selected = 0;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.selected += 1,
        KeyCode::Up | KeyCode::Char('k') => app.selected = app.selected.saturating_sub(1),
        _ => {}
    }
    clamp_selection(app);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FetchPurpose, SortMode};
    use crate::test_utils::loaded_app;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    /// What: Paging keys move within bounds and reset the highlight
    ///
    /// - Input: 25 products; Right x3, End, Left, digit 1
    /// - Output: Pages 2, 3, 3, 3, 2, 1
    fn paging_keys() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = loaded_app(25, 0);
        app.focus = Focus::Browse;
        app.selected = 4;
        handle_browse_key(key(KeyCode::Right), &mut app, &tx);
        assert_eq!(app.listing.current_page, 2);
        assert_eq!(app.selected, 0);
        handle_browse_key(key(KeyCode::Right), &mut app, &tx);
        handle_browse_key(key(KeyCode::Right), &mut app, &tx);
        assert_eq!(app.listing.current_page, 3);
        handle_browse_key(key(KeyCode::End), &mut app, &tx);
        assert_eq!(app.listing.current_page, 3);
        handle_browse_key(key(KeyCode::Left), &mut app, &tx);
        assert_eq!(app.listing.current_page, 2);
        handle_browse_key(key(KeyCode::Char('1')), &mut app, &tx);
        assert_eq!(app.listing.current_page, 1);
    }

    #[test]
    /// What: Selection is clamped to the page window
    ///
    /// - Input: Page 3 of 25 (5 items); Down x10
    /// - Output: Highlight stops at index 4
    fn selection_is_clamped() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = loaded_app(25, 0);
        app.listing.current_page = 3;
        for _ in 0..10 {
            handle_browse_key(key(KeyCode::Down), &mut app, &tx);
        }
        assert_eq!(app.selected, 4);
    }

    #[test]
    /// What: Action keys map to sort, discount, refresh and quit
    ///
    /// - Input: s, d, r, q
    /// - Output: Sort ascending; filter on; `Refresh` queued; quit requested
    fn action_keys() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = loaded_app(12, 3);
        handle_browse_key(key(KeyCode::Char('s')), &mut app, &tx);
        assert_eq!(app.listing.sort_mode, SortMode::Ascending);
        handle_browse_key(key(KeyCode::Char('d')), &mut app, &tx);
        assert!(app.listing.discount_filter_active);
        handle_browse_key(key(KeyCode::Char('r')), &mut app, &tx);
        assert_eq!(rx.try_recv().expect("refresh").purpose, FetchPurpose::Refresh);
        assert!(handle_browse_key(key(KeyCode::Char('q')), &mut app, &tx));
    }
}
