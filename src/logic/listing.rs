//! Handlers that mutate the listing state in response to user actions and
//! completed catalog fetches.

use tokio::sync::mpsc;

use crate::logic::filter::count_discounted;
use crate::logic::pipeline::derive_view;
use crate::logic::query::send_catalog_request;
use crate::state::{
    AppState, CatalogRequest, CatalogResult, FetchPurpose, ListingState, NotificationKind,
    SortMode,
};

/// What: Submit the live input as the search query.
///
/// Inputs:
/// - `app`: Application state; `input` becomes `listing.query`
/// - `catalog_tx`: Channel to the catalog worker
///
/// Output:
/// - Resets to page 1 and issues a `Search` fetch.
///
/// Details:
/// - The name filter is applied client-side to whatever the fetch returns.
pub fn submit_search(app: &mut AppState, catalog_tx: &mpsc::UnboundedSender<CatalogRequest>) {
    app.listing.query.clone_from(&app.input);
    app.listing.current_page = 1;
    app.selected = 0;
    tracing::info!(query = %app.listing.query, "search submitted");
    send_catalog_request(&mut app.listing, FetchPurpose::Search, catalog_tx);
}

/// What: React to an edit of the search input.
///
/// Inputs:
/// - `app`: Application state after the edit
/// - `had_text`: Whether the input was non-empty before the edit
/// - `catalog_tx`: Channel to the catalog worker
///
/// Output:
/// - `true` when the edit cleared the search and a reload was issued.
///
/// Details:
/// - Only the transition to an empty input counts; typing does not search.
pub fn on_input_edited(
    app: &mut AppState,
    had_text: bool,
    catalog_tx: &mpsc::UnboundedSender<CatalogRequest>,
) -> bool {
    if !had_text || !app.input.is_empty() {
        return false;
    }
    app.listing.query.clear();
    tracing::debug!("search input cleared; reloading catalog");
    send_catalog_request(&mut app.listing, FetchPurpose::ClearSearch, catalog_tx);
    true
}

/// What: Flip the "discounted products" filter.
///
/// Inputs:
/// - `app`: Application state
/// - `catalog_tx`: Channel to the catalog worker
///
/// Output:
/// - Turning on narrows the displayed set immediately; turning off drops the
///   search and reloads the full catalog with a `ShowAll` fetch.
pub fn toggle_discount_filter(
    app: &mut AppState,
    catalog_tx: &mpsc::UnboundedSender<CatalogRequest>,
) {
    if app.listing.discount_filter_active {
        app.listing.discount_filter_active = false;
        reset_search(app);
        send_catalog_request(&mut app.listing, FetchPurpose::ShowAll, catalog_tx);
    } else {
        app.listing.discount_filter_active = true;
        clamp_selection(app);
    }
    tracing::debug!(
        active = app.listing.discount_filter_active,
        "discount filter toggled"
    );
}

/// Re-fetch the full catalog unconditionally; any submitted search is dropped.
pub fn refresh(app: &mut AppState, catalog_tx: &mpsc::UnboundedSender<CatalogRequest>) {
    reset_search(app);
    send_catalog_request(&mut app.listing, FetchPurpose::Refresh, catalog_tx);
}

/// Forget the submitted query and the live input so the next result shows unfiltered.
fn reset_search(app: &mut AppState) {
    if !app.listing.query.is_empty() {
        tracing::debug!(query = %app.listing.query, "search dropped for full reload");
    }
    app.listing.query.clear();
    app.input.clear();
    app.caret = 0;
}

/// Change the price ordering; the current page is kept.
pub fn set_sort_mode(listing: &mut ListingState, mode: SortMode) {
    if listing.sort_mode != mode {
        tracing::debug!(mode = mode.as_config_key(), "sort mode changed");
        listing.sort_mode = mode;
    }
}

/// Advance the sort selector to its next option.
pub fn cycle_sort_mode(listing: &mut ListingState) {
    set_sort_mode(listing, listing.sort_mode.next());
}

/// Keep the highlighted tile inside the current page window.
pub fn clamp_selection(app: &mut AppState) {
    let len = derive_view(&app.listing).page_items.len();
    app.selected = app.selected.min(len.saturating_sub(1));
}

/// What: Commit a completed catalog fetch.
///
/// Inputs:
/// - `app`: Application state
/// - `result`: Worker result carrying the request id and outcome
///
/// Output:
/// - `true` when the result was applied, `false` when it was stale.
///
/// Details:
/// - Results whose id differs from `latest_request_id` are dropped.
/// - On success the catalog is replaced and `discounted_count` recomputed
///   over the full set.
/// - On failure the previous catalog stays, `load_error` is set and an error
///   notification is raised.
pub fn apply_catalog_result(app: &mut AppState, result: CatalogResult) -> bool {
    if result.id != app.listing.latest_request_id {
        tracing::debug!(
            id = result.id,
            latest = app.listing.latest_request_id,
            "dropping stale catalog result"
        );
        return false;
    }
    app.listing.loading = false;
    match result.outcome {
        Ok(products) => {
            app.listing.discounted_count = count_discounted(&products);
            app.listing.catalog = products;
            app.listing.loaded = true;
            app.listing.load_error = None;
            tracing::info!(
                id = result.id,
                purpose = ?result.purpose,
                products = app.listing.catalog.len(),
                discounted = app.listing.discounted_count,
                "catalog loaded"
            );
            clamp_selection(app);
            match result.purpose {
                FetchPurpose::Refresh => {
                    let msg = format!("Catalog refreshed ({} products)", app.listing.catalog.len());
                    app.notify(msg, NotificationKind::Info);
                }
                FetchPurpose::Search if !app.listing.query.is_empty() => {
                    let hits = derive_view(&app.listing).displayed_len;
                    let msg = format!("{hits} result(s) for \"{}\"", app.listing.query);
                    app.notify(msg, NotificationKind::Info);
                }
                _ => {}
            }
        }
        Err(err) => {
            tracing::warn!(id = result.id, purpose = ?result.purpose, error = %err, "catalog fetch failed");
            app.listing.load_error = Some(err.to_string());
            app.notify(
                format!("Could not load products: {err}"),
                NotificationKind::Error,
            );
        }
    }
    true
}
