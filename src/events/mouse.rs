//! Mouse handling: hit tests against rectangles recorded during the last render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use crate::logic::{
    clamp_selection, cycle_sort_mode, jump_to_page, next_page, previous_page, refresh,
    toggle_discount_filter,
};
use crate::state::{AppState, CatalogRequest, Focus};

use super::utils::point_in_rect;

/// What: Handle a single mouse event.
///
/// Inputs:
/// - `m`: Mouse event including position and kind
/// - `app`: Mutable application state (rects, focus, listing)
/// - `catalog_tx`: Channel to the catalog worker
///
/// Output:
/// - Always `false`; the mouse never quits the application.
///
/// Details:
/// - Left click activates the search input, sort selector, discount toggle,
///   refresh button, page arrows, page numbers, or selects a tile.
/// - The scroll wheel pages through the grid.
pub fn handle_mouse_event(
    m: MouseEvent,
    app: &mut AppState,
    catalog_tx: &mpsc::UnboundedSender<CatalogRequest>,
) -> bool {
    let (mx, my) = (m.column, m.row);
    match m.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(mx, my, app, catalog_tx),
        MouseEventKind::ScrollDown => {
            if next_page(&mut app.listing) {
                app.selected = 0;
            }
        }
        MouseEventKind::ScrollUp => {
            if previous_page(&mut app.listing) {
                app.selected = 0;
            }
        }
        _ => {}
    }
    false
}

fn handle_click(
    mx: u16,
    my: u16,
    app: &mut AppState,
    catalog_tx: &mpsc::UnboundedSender<CatalogRequest>,
) {
    if point_in_rect(mx, my, app.search_rect) {
        app.focus = Focus::Search;
        return;
    }
    if point_in_rect(mx, my, app.sort_button_rect) {
        cycle_sort_mode(&mut app.listing);
        return;
    }
    if point_in_rect(mx, my, app.discount_button_rect) {
        toggle_discount_filter(app, catalog_tx);
        return;
    }
    if point_in_rect(mx, my, app.refresh_button_rect) {
        refresh(app, catalog_tx);
        return;
    }
    let page_target = if point_in_rect(mx, my, app.prev_page_rect) {
        Some(app.listing.current_page.saturating_sub(1).max(1))
    } else if point_in_rect(mx, my, app.next_page_rect) {
        if next_page(&mut app.listing) {
            app.selected = 0;
        }
        None
    } else {
        app.page_number_rects
            .iter()
            .find(|(_, r)| point_in_rect(mx, my, Some(*r)))
            .map(|(n, _)| *n)
    };
    if let Some(n) = page_target {
        if jump_to_page(&mut app.listing, n) {
            app.selected = 0;
        }
        return;
    }
    if let Some(idx) = app
        .tile_rects
        .iter()
        .position(|r| point_in_rect(mx, my, Some(*r)))
    {
        app.focus = Focus::Browse;
        app.selected = idx;
        clamp_selection(app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn click(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    /// What: Clicking page numbers and arrows navigates
    ///
    /// - Input: 25 products; click page "3", then the previous arrow
    /// - Output: Page 3, then page 2
    fn click_page_controls() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = crate::test_utils::loaded_app(25, 0);
        app.page_number_rects = vec![(1, (10, 20, 3, 1)), (2, (14, 20, 3, 1)), (3, (18, 20, 3, 1))];
        app.prev_page_rect = Some((5, 20, 3, 1));
        handle_mouse_event(click(19, 20), &mut app, &tx);
        assert_eq!(app.listing.current_page, 3);
        handle_mouse_event(click(6, 20), &mut app, &tx);
        assert_eq!(app.listing.current_page, 2);
    }

    #[test]
    /// What: Clicking the discount toggle and a tile
    ///
    /// - Input: Toggle rect click; second tile click
    /// - Output: Filter active; tile 1 selected with grid focus
    fn click_toggle_and_tile() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = crate::test_utils::loaded_app(12, 4);
        app.discount_button_rect = Some((40, 2, 20, 1));
        app.tile_rects = vec![(0, 4, 30, 4), (30, 4, 30, 4)];
        handle_mouse_event(click(45, 2), &mut app, &tx);
        assert!(app.listing.discount_filter_active);
        handle_mouse_event(click(31, 5), &mut app, &tx);
        assert_eq!(app.selected, 1);
        assert_eq!(app.focus, Focus::Browse);
    }

    #[test]
    /// What: Clicking the empty panel's refresh button reloads the full catalog
    ///
    /// - Input: Unmatched query "shoe" over 25 products; click inside the refresh rect
    /// - Output: Query dropped; one `Refresh` request queued
    fn click_refresh_button() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = crate::test_utils::loaded_app(25, 0);
        app.listing.query = "shoe".into();
        app.input = "shoe".into();
        app.refresh_button_rect = Some((50, 18, 13, 1));
        handle_mouse_event(click(55, 18), &mut app, &tx);
        assert!(app.listing.query.is_empty());
        assert_eq!(
            rx.try_recv().expect("refresh request").purpose,
            crate::state::FetchPurpose::Refresh
        );
        assert_eq!(crate::logic::derive_view(&app.listing).displayed_len, 25);
    }
}
