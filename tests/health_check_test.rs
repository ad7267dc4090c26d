mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::TestApp;

#[tokio::test]
async fn root_returns_ok() {
    let app = TestApp::start().await;
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn webhook_route_only_accepts_post() {
    let app = TestApp::start().await;
    let request = Request::builder()
        .uri("/webhooks/stripe")
        .body(Body::empty())
        .unwrap();

    let (status, _) = app.send(request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = TestApp::start().await;
    let payload = "x".repeat(checkout_bridge::MAX_BODY_BYTES + 1);

    let (status, _) = app.post_webhook(&payload, Some("t=1,v1=00")).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}
