//! Creator detail page against a stand-in backend.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

mod common;

use axum::http::{Method, StatusCode};
use common::{MockBackend, body_text, get, storefront};
use serde_json::json;

fn creators() -> serde_json::Value {
    json!([
        {"creatorId": "studio-a", "creatorName": "Studio A", "logoImg": null, "backgroundImg": null},
        {"creatorId": "studio-b", "creatorName": "Studio B", "logoImg": "https://img.example/b.png", "backgroundImg": "https://img.example/b-bg.png"}
    ])
}

#[tokio::test]
async fn creator_page_shows_profile_and_products() {
    let backend = MockBackend::start().await;
    backend
        .respond_json(Method::GET, "/api/creator/list", &creators())
        .respond_json(
            Method::GET,
            "/api/product/list",
            &json!([
                {"productNo": 1, "productName": "Mug", "productPrice": 12000, "images": null, "creatorId": "studio-a"},
                {"productNo": 2, "productName": "Poster", "productPrice": 8000,
                 "images": [{"productImageUrl": "https://img.example/poster.png"}], "creatorId": "studio-a"}
            ]),
        );
    let app = storefront(&backend);

    let response = get(&app, "/creators/studio-a", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains(r#"data-state="found""#));
    assert!(html.contains("Studio A"));
    assert!(html.contains("https://via.placeholder.com/300x150"));
    assert!(html.contains("https://via.placeholder.com/96x96"));
    assert!(html.contains("1,600"));
    assert_eq!(html.matches(r#"class="product-card""#).count(), 2);
    assert!(html.contains("12,000 원"));
    assert!(html.contains("8,000 원"));
    assert!(html.contains("https://via.placeholder.com/150"));
    assert!(html.contains("https://img.example/poster.png"));
    assert!(html.contains(r#"href="/creator/detail""#));

    let product_call = backend
        .calls()
        .into_iter()
        .find(|c| c.path == "/api/product/list")
        .unwrap();
    assert_eq!(product_call.query.as_deref(), Some("creatorId=studio-a"));
}

#[tokio::test]
async fn unknown_creator_renders_not_found_state() {
    let backend = MockBackend::start().await;
    backend
        .respond_json(Method::GET, "/api/creator/list", &creators())
        .respond_json(Method::GET, "/api/product/list", &json!([]));
    let app = storefront(&backend);

    let response = get(&app, "/creators/nobody", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains(r#"data-state="not-found""#));
    assert!(!html.contains("product-card"));
}

#[tokio::test]
async fn failed_creator_list_keeps_page_pending() {
    let backend = MockBackend::start().await;
    backend
        .respond(
            Method::GET,
            "/api/creator/list",
            StatusCode::INTERNAL_SERVER_ERROR,
            "boom",
        )
        .respond_json(Method::GET, "/api/product/list", &json!([]));
    let app = storefront(&backend);

    let response = get(&app, "/creators/studio-a", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains(r#"data-state="pending""#));
    assert!(!html.contains(r#"data-state="not-found""#));
}

#[tokio::test]
async fn reviews_fragment_filters_by_creator_and_product() {
    let backend = MockBackend::start().await;
    backend.respond_json(
        Method::GET,
        "/api/review/list",
        &json!([
            {"reviewNo": 3, "productNo": 1, "creatorId": "studio-a", "customerId": "lee@example.com",
             "reviewContent": "Lovely mug", "score": 5, "createdDate": "2024-03-01"}
        ]),
    );
    let app = storefront(&backend);

    let response = get(&app, "/creators/studio-a/reviews?productNo=1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains("Lovely mug"));
    assert!(html.contains("5 / 5"));
    assert!(!html.contains("<html"));

    let call = backend.calls().pop().unwrap();
    assert_eq!(call.path, "/api/review/list");
    assert_eq!(call.query.as_deref(), Some("creatorId=studio-a&productNo=1"));
}

#[tokio::test]
async fn failed_reviews_render_empty_fragment() {
    let backend = MockBackend::start().await;
    let app = storefront(&backend);

    let response = get(&app, "/creators/studio-a/reviews", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No reviews yet."));
}
