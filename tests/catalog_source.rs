//! Catalog loading from local files, covering the envelope and error mapping.

use std::io::Write;
use std::path::PathBuf;

use storefront::sources::{CatalogError, CatalogSource};

fn write_catalog(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(body.as_bytes()).expect("write catalog");
    file
}

#[tokio::test]
/// What: File source loads every product from a success envelope
///
/// - Input: Envelope with three products, one discounted, one using `id`
/// - Output: Three products; wire names mapped; discount detected
async fn file_source_loads_products() {
    let file = write_catalog(
        r#"{"success":true,"data":[
            {"_id":"a","name":"Linen Shirt","price":45,"priceDrop":20,"category":"men"},
            {"_id":"b","name":"Cap","price":12},
            {"id":"c","name":"Scarf","price":18.5,"priceDrop":0}
        ]}"#,
    );
    let source = CatalogSource::File(file.path().to_path_buf());
    let products = source.fetch().await.expect("products");
    assert_eq!(products.len(), 3);
    assert_eq!(products[0].category, "men");
    assert!(products[0].is_discounted());
    assert_eq!(products[2].id, "c");
    assert_eq!(products.iter().filter(|p| p.is_discounted()).count(), 1);
}

#[tokio::test]
/// What: Failure envelopes, bad JSON and missing files surface typed errors
///
/// - Input: `success: false`; truncated JSON; nonexistent path
/// - Output: `Unsuccessful`, `Decode` and `Io` respectively
async fn file_source_errors_are_typed() {
    let failed = write_catalog(r#"{"success":false,"message":"maintenance"}"#);
    match CatalogSource::File(failed.path().to_path_buf()).fetch().await {
        Err(CatalogError::Unsuccessful(Some(m))) => assert_eq!(m, "maintenance"),
        other => panic!("expected Unsuccessful, got {other:?}"),
    }

    let truncated = write_catalog(r#"{"success":true,"data":[{"name":"#);
    assert!(matches!(
        CatalogSource::File(truncated.path().to_path_buf()).fetch().await,
        Err(CatalogError::Decode(_))
    ));

    let missing = CatalogSource::File(PathBuf::from("/nonexistent/storefront/catalog.json"));
    assert!(matches!(missing.fetch().await, Err(CatalogError::Io(_))));
}

#[tokio::test]
/// What: Unreachable service maps to an HTTP error
///
/// - Input: URL on a closed local port with a short timeout
/// - Output: `CatalogError::Http`
async fn unreachable_service_is_http_error() {
    let source = CatalogSource::http(
        "http://127.0.0.1:9/api/products",
        std::time::Duration::from_secs(2),
    )
    .expect("client");
    assert!(matches!(source.fetch().await, Err(CatalogError::Http(_))));
}
