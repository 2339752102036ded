//! Live endpoint integration tests

use reabertura::models::FilterState;
use reabertura::services::{HttpLocationSource, LocationStore};

const LOCATIONS_URL: &str =
    "https://test-frontend-developer.s3.amazonaws.com/data/locations.json";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_live_fetch_and_filter() {
    let source = HttpLocationSource::new(LOCATIONS_URL);
    let store = LocationStore::load(&source).await;

    assert!(!store.all().is_empty(), "expected the published list to be non-empty");

    // Everything visible is a subsequence of the full list
    let visible = store.visible(&FilterState::default());
    assert!(visible.len() <= store.all().len());
    assert!(visible.iter().all(|record| record.is_open()));
}

#[tokio::test]
async fn test_unreachable_endpoint_yields_empty_store() {
    let source = HttpLocationSource::new("http://127.0.0.1:1/locations.json");
    let store = LocationStore::load(&source).await;

    assert!(store.all().is_empty());
    assert_eq!(store.results_found(&FilterState::default()), 0);
}
