//! Health checks and the shared middleware stack.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use common::{MockBackend, body_text, get, send, storefront};
use serde_json::json;

#[tokio::test]
async fn health_is_always_ok() {
    let backend = MockBackend::start().await;
    let app = storefront(&backend);

    let response = get(&app, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn readiness_follows_backend() {
    let backend = MockBackend::start().await;
    let app = storefront(&backend);
    assert_eq!(
        get(&app, "/health/ready", None).await.status(),
        StatusCode::SERVICE_UNAVAILABLE
    );

    backend.respond_json(Method::GET, "/api/creator/list", &json!([]));
    assert_eq!(get(&app, "/health/ready", None).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let backend = MockBackend::start().await;
    let app = storefront(&backend);

    let response = get(&app, "/health", None).await;
    let headers = response.headers();

    assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
    assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "no-store, max-age=0");
    let csp = headers
        .get(header::CONTENT_SECURITY_POLICY)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(csp.contains("https://t1.daumcdn.net"));
    assert!(csp.contains("frame-src https://postcode.map.daum.net"));
}

#[tokio::test]
async fn request_id_is_echoed_or_generated() {
    let backend = MockBackend::start().await;
    let app = storefront(&backend);

    let request = Request::get("/health")
        .header("x-request-id", "upstream-123")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.headers().get("x-request-id").unwrap(), "upstream-123");

    let response = get(&app, "/health", None).await;
    let generated = response.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert_eq!(generated.len(), 36);
}
