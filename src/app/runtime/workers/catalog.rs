use tokio::sync::mpsc;

use crate::sources::CatalogSource;
use crate::state::{CatalogRequest, CatalogResult};

/// What: Spawn the background worker that serves catalog fetches.
///
/// Inputs:
/// - `source`: Where products are loaded from
/// - `req_rx`: Channel receiver for catalog requests
/// - `res_tx`: Channel sender for catalog results
///
/// Details:
/// - Each request runs in its own task; overlapping fetches are neither
///   de-duplicated nor cancelled, so results may arrive out of order. The
///   event loop drops any result that is not the latest request.
pub fn spawn_catalog_worker(
    source: CatalogSource,
    mut req_rx: mpsc::UnboundedReceiver<CatalogRequest>,
    res_tx: mpsc::UnboundedSender<CatalogResult>,
) {
    tokio::spawn(async move {
        while let Some(req) = req_rx.recv().await {
            let source = source.clone();
            let tx = res_tx.clone();
            tokio::spawn(async move {
                let started = std::time::Instant::now();
                let outcome = source.fetch().await;
                tracing::debug!(
                    id = req.id,
                    purpose = ?req.purpose,
                    ok = outcome.is_ok(),
                    elapsed_ms = started.elapsed().as_millis(),
                    source = %source.describe(),
                    "catalog fetch finished"
                );
                let _ = tx.send(CatalogResult {
                    id: req.id,
                    purpose: req.purpose,
                    outcome,
                });
            });
        }
        tracing::debug!("catalog request channel closed; worker exiting");
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FetchPurpose;

    #[tokio::test]
    /// What: Worker answers each request with the matching id and purpose
    ///
    /// - Input: File source with two products; one `Refresh` request
    /// - Output: Result with id 7, `Refresh`, and both products
    async fn worker_echoes_request_and_loads_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"success":true,"data":[{"_id":"1","name":"Cap","price":12},{"_id":"2","name":"Tee","price":20,"priceDrop":10}]}"#,
        )
        .expect("write");
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (res_tx, mut res_rx) = mpsc::unbounded_channel();
        spawn_catalog_worker(CatalogSource::File(path), req_rx, res_tx);
        req_tx
            .send(CatalogRequest {
                id: 7,
                purpose: FetchPurpose::Refresh,
            })
            .expect("send");
        let res = tokio::time::timeout(std::time::Duration::from_secs(2), res_rx.recv())
            .await
            .ok()
            .flatten()
            .expect("result");
        assert_eq!(res.id, 7);
        assert_eq!(res.purpose, FetchPurpose::Refresh);
        assert_eq!(res.outcome.expect("products").len(), 2);
    }
}
