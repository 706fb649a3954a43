//! Tests for the hello endpoint, driving the router in-process.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use server::http::router;
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).expect("request");
    let response = router().oneshot(request).await.expect("response");
    let status = response.status();
    let body = response.into_body().collect().await.expect("body").to_bytes();
    (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
}

#[tokio::test]
async fn hello_default() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "\"Hello, World!\"");
}

#[tokio::test]
async fn hello_custom_name() {
    let (status, body) = get("/?name=Rustacean").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "\"Hello, Rustacean!\"");
}
