//! Event handling layer for the storefront TUI.
//!
//! `handle_event` dispatches global shortcuts itself and delegates focus
//! specific keys and mouse handling to submodules.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::{cycle_sort_mode, refresh};
use crate::state::{AppState, CatalogRequest, Focus};

mod browse;
mod mouse;
mod search;
mod utils;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
///
/// Global shortcuts work regardless of focus: Ctrl+C quits, F5 refreshes,
/// Shift+Tab cycles the sort mode.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    catalog_tx: &mpsc::UnboundedSender<CatalogRequest>,
) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
                return true;
            }
            match ke.code {
                KeyCode::F(5) => {
                    refresh(app, catalog_tx);
                    return false;
                }
                KeyCode::BackTab => {
                    cycle_sort_mode(&mut app.listing);
                    return false;
                }
                _ => {}
            }
            match app.focus {
                Focus::Search => search::handle_search_key(*ke, app, catalog_tx),
                Focus::Browse => browse::handle_browse_key(*ke, app, catalog_tx),
            }
        }
        CEvent::Mouse(m) => mouse::handle_mouse_event(*m, app, catalog_tx),
        _ => false,
    }
}
