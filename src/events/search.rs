use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::{on_input_edited, submit_search};
use crate::state::{AppState, CatalogRequest, Focus};

use super::utils::{byte_index, char_count};

/// What: Handle a key while the search input has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `catalog_tx`: Channel to the catalog worker
///
/// Output:
/// - Always `false`; quitting from the input needs Ctrl+C.
///
/// Details:
/// - Typing only edits `input`; Enter submits the search.
/// - An edit that empties the input reloads the unfiltered catalog.
/// - Esc clears a non-empty input, otherwise moves focus to the grid.
pub fn handle_search_key(
    ke: KeyEvent,
    app: &mut AppState,
    catalog_tx: &mpsc::UnboundedSender<CatalogRequest>,
) -> bool {
    let had_text = !app.input.is_empty();
    match ke.code {
        KeyCode::Enter => {
            submit_search(app, catalog_tx);
            app.focus = Focus::Browse;
            return false;
        }
        KeyCode::Esc => {
            if had_text {
                app.input.clear();
                app.caret = 0;
            } else {
                app.focus = Focus::Browse;
                return false;
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            app.focus = Focus::Browse;
            return false;
        }
        KeyCode::Backspace => {
            if app.caret > 0 {
                let start = byte_index(&app.input, app.caret - 1);
                let end = byte_index(&app.input, app.caret);
                app.input.replace_range(start..end, "");
                app.caret -= 1;
            }
        }
        KeyCode::Delete => {
            if app.caret < char_count(&app.input) {
                let start = byte_index(&app.input, app.caret);
                let end = byte_index(&app.input, app.caret + 1);
                app.input.replace_range(start..end, "");
            }
        }
        KeyCode::Left => app.caret = app.caret.saturating_sub(1),
        KeyCode::Right => app.caret = (app.caret + 1).min(char_count(&app.input)),
        KeyCode::Home => app.caret = 0,
        KeyCode::End => app.caret = char_count(&app.input),
        KeyCode::Char('u') if ke.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.clear();
            app.caret = 0;
        }
        KeyCode::Char(ch) if !ke.modifiers.contains(KeyModifiers::CONTROL) => {
            let at = byte_index(&app.input, app.caret);
            app.input.insert(at, ch);
            app.caret += 1;
        }
        _ => return false,
    }
    on_input_edited(app, had_text, catalog_tx);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FetchPurpose;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    /// What: Typing edits the input without issuing fetches
    ///
    /// - Input: Type "sh", move left, type "x"
    /// - Output: Input "sxh"; no request queued; query unchanged
    fn typing_edits_without_fetching() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        for c in ['s', 'h'] {
            handle_search_key(key(KeyCode::Char(c)), &mut app, &tx);
        }
        handle_search_key(key(KeyCode::Left), &mut app, &tx);
        handle_search_key(key(KeyCode::Char('x')), &mut app, &tx);
        assert_eq!(app.input, "sxh");
        assert_eq!(app.caret, 2);
        assert!(app.listing.query.is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Enter submits and Backspace to empty reloads
    ///
    /// - Input: "ab" + Enter, then two Backspaces
    /// - Output: `Search` then one `ClearSearch` request
    fn enter_submits_and_clearing_reloads() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        for c in ['a', 'b'] {
            handle_search_key(key(KeyCode::Char(c)), &mut app, &tx);
        }
        handle_search_key(key(KeyCode::Enter), &mut app, &tx);
        assert_eq!(rx.try_recv().expect("search").purpose, FetchPurpose::Search);
        assert_eq!(app.focus, Focus::Browse);

        app.focus = Focus::Search;
        handle_search_key(key(KeyCode::Backspace), &mut app, &tx);
        assert!(rx.try_recv().is_err());
        handle_search_key(key(KeyCode::Backspace), &mut app, &tx);
        assert_eq!(
            rx.try_recv().expect("clear").purpose,
            FetchPurpose::ClearSearch
        );
        assert!(app.listing.query.is_empty());
    }

    #[test]
    /// What: Esc clears text first, then leaves the input
    ///
    /// - Input: "cap" then Esc twice
    /// - Output: First Esc empties input and reloads; second moves focus
    fn esc_clears_then_leaves() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState {
            input: "cap".into(),
            caret: 3,
            ..AppState::default()
        };
        handle_search_key(key(KeyCode::Esc), &mut app, &tx);
        assert!(app.input.is_empty());
        assert_eq!(app.focus, Focus::Search);
        assert!(rx.try_recv().is_ok());
        handle_search_key(key(KeyCode::Esc), &mut app, &tx);
        assert_eq!(app.focus, Focus::Browse);
    }
}
