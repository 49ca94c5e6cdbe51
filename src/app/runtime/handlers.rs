use std::time::Instant;

use crate::logic::apply_catalog_result;
use crate::state::{AppState, CatalogResult};

/// What: Handle a completed catalog fetch.
///
/// Inputs:
/// - `app`: Application state
/// - `result`: Fetch outcome from the catalog worker
///
/// Output:
/// - `true` when the result was committed.
///
/// Details:
/// - Out-of-order results are dropped by the request-id guard in
///   [`apply_catalog_result`].
pub fn handle_catalog_result(app: &mut AppState, result: CatalogResult) -> bool {
    apply_catalog_result(app, result)
}

/// Periodic housekeeping: expire the notification toast.
pub fn handle_tick(app: &mut AppState) {
    app.expire_notification(Instant::now());
}
