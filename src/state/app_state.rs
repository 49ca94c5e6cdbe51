//! Central application state shared by the event, runtime and UI layers.

use std::time::{Duration, Instant};

use crate::state::listing::ListingState;
use crate::state::types::{Focus, Notification, NotificationKind};
use crate::theme::Settings;

/// Rectangle in terminal cells as `(x, y, width, height)`.
pub type CellRect = (u16, u16, u16, u16);

/// Upper bound for a toast's lifetime, whatever the settings ask for.
const MAX_NOTIFICATION_SECS: u64 = 3600;

/// Global application state.
///
/// The listing view state lives in [`ListingState`]; everything here is
/// terminal-side bookkeeping: the live search input, focus, tile selection,
/// the notification toast and mouse hit-test rectangles recorded during the
/// last render.
#[derive(Debug)]
pub struct AppState {
    /// Listing view state and result set.
    pub listing: ListingState,
    /// Live search input text (submitted into `listing.query` on Enter).
    pub input: String,
    /// Caret position in characters, clamped to `0..=input.chars().count()`.
    pub caret: usize,
    /// Which area receives key input.
    pub focus: Focus,
    /// Highlighted tile within the current page window.
    pub selected: usize,
    /// Active toast, if any.
    pub notification: Option<Notification>,
    /// Settings resolved at startup (config file plus CLI overrides).
    pub settings: Settings,

    /// Search input rectangle.
    pub search_rect: Option<CellRect>,
    /// Sort selector rectangle.
    pub sort_button_rect: Option<CellRect>,
    /// Discount toggle button rectangle.
    pub discount_button_rect: Option<CellRect>,
    /// Refresh button inside the empty/offline panel.
    pub refresh_button_rect: Option<CellRect>,
    /// "Previous page" arrow rectangle.
    pub prev_page_rect: Option<CellRect>,
    /// "Next page" arrow rectangle.
    pub next_page_rect: Option<CellRect>,
    /// Clickable page numbers and their rectangles.
    pub page_number_rects: Vec<(usize, CellRect)>,
    /// Tile rectangles for the current page, in page order.
    pub tile_rects: Vec<CellRect>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            listing: ListingState::default(),
            input: String::new(),
            caret: 0,
            focus: Focus::Search,
            selected: 0,
            notification: None,
            settings: Settings::default(),
            search_rect: None,
            sort_button_rect: None,
            discount_button_rect: None,
            refresh_button_rect: None,
            prev_page_rect: None,
            next_page_rect: None,
            page_number_rects: Vec::new(),
            tile_rects: Vec::new(),
        }
    }
}

impl AppState {
    /// What: Show a toast for the configured notification duration.
    ///
    /// Inputs:
    /// - `message`: Text to display
    /// - `kind`: Info or error styling
    ///
    /// Output:
    /// - Replaces any active notification.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        let ttl = Duration::from_secs(
            self.settings
                .notification_secs
                .clamp(1, MAX_NOTIFICATION_SECS),
        );
        let now = Instant::now();
        self.notification = Some(Notification {
            message: message.into(),
            kind,
            expires_at: now.checked_add(ttl).unwrap_or(now),
        });
    }

    /// Drop the notification once its deadline has passed.
    pub fn expire_notification(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| now >= n.expires_at)
        {
            self.notification = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Notifications expire only after their deadline
    ///
    /// - Input: Fresh toast; expire at now and at now + 1h
    /// - Output: Still present at now; gone after the deadline
    fn notification_expires_after_deadline() {
        let mut app = AppState::default();
        app.notify("Catalog refreshed", NotificationKind::Info);
        app.expire_notification(Instant::now());
        assert!(app.notification.is_some());
        app.expire_notification(Instant::now() + Duration::from_secs(3600));
        assert!(app.notification.is_none());
    }

    #[test]
    /// What: An oversized notification duration is clamped instead of overflowing
    ///
    /// - Input: `notification_secs = u64::MAX`
    /// - Output: Toast shown; it expires after the one-hour cap
    fn oversized_notification_duration_is_clamped() {
        let mut app = AppState::default();
        app.settings.notification_secs = u64::MAX;
        app.notify("x", NotificationKind::Info);
        assert!(app.notification.is_some());
        app.expire_notification(Instant::now() + Duration::from_secs(MAX_NOTIFICATION_SECS + 1));
        assert!(app.notification.is_none());
    }
}
