#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use signinglog_admin::admin::admin_router;
use signinglog_admin::signinglog::{
    AdminQueryService, FailingBackend, MemoryBackend, SigningLogBackend, SigningLogStore,
};

/// Number of entries in the reference fixture (IDs 1..=10)
pub const FIXTURE_SIZE: u64 = 10;

pub async fn fixture_backend() -> MemoryBackend {
    MemoryBackend::with_entries(FIXTURE_SIZE)
        .await
        .expect("Failed to seed signing logs")
}

pub fn service_for(backend: Arc<dyn SigningLogBackend>) -> AdminQueryService {
    AdminQueryService::new(SigningLogStore::new(backend))
}

pub async fn fixture_router() -> Router {
    admin_router(service_for(Arc::new(fixture_backend().await)))
}

pub fn failing_router() -> Router {
    admin_router(service_for(Arc::new(FailingBackend::default())))
}

/// Send one request through the router and decode the JSON body
pub async fn send(router: Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from("{}"))
        .expect("Failed to build request");

    let response = router.oneshot(request).await.expect("Router failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body = serde_json::from_slice(&bytes).expect("Error decoding the signing log response");

    (status, body)
}

pub fn signing_log_ids(body: &serde_json::Value) -> Vec<u64> {
    body["signingLog"]
        .as_array()
        .map(|entries| entries.iter().filter_map(|e| e["id"].as_u64()).collect())
        .unwrap_or_default()
}
