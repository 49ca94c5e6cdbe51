use tokio::sync::mpsc;

use crate::state::{CatalogRequest, FetchPurpose, ListingState};

/// What: Issue a catalog fetch with a fresh request id.
///
/// Inputs:
/// - `listing`: Listing state; updates `next_request_id`, `latest_request_id` and `loading`
/// - `purpose`: Why the fetch is issued
/// - `catalog_tx`: Channel to the catalog worker
///
/// Output:
/// - Sends a `CatalogRequest` and returns its id.
///
/// Details:
/// - Only the result carrying `latest_request_id` is committed, so an older
///   fetch that finishes late cannot overwrite a newer one.
pub fn send_catalog_request(
    listing: &mut ListingState,
    purpose: FetchPurpose,
    catalog_tx: &mpsc::UnboundedSender<CatalogRequest>,
) -> u64 {
    let id = listing.next_request_id;
    listing.next_request_id += 1;
    listing.latest_request_id = id;
    listing.loading = true;
    tracing::debug!(id, ?purpose, "catalog request issued");
    if catalog_tx.send(CatalogRequest { id, purpose }).is_err() {
        tracing::warn!(id, "catalog worker is gone; request dropped");
    }
    id
}
