use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use serde_json::json;
use thumb_overlay::api::handlers::extract_handler;

fn server() -> TestServer {
    let app = Router::new().route("/api/extract", post(extract_handler));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_extract_watch_url() {
    let response = server()
        .post("/api/extract")
        .json(&json!({ "url": "https://www.youtube.com/watch?v=abc123&t=10s" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["video_id"], "abc123");
}

#[tokio::test]
async fn test_extract_short_link() {
    let response = server()
        .post("/api/extract")
        .json(&json!({ "url": "https://youtu.be/abc123?si=xyz" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["video_id"], "abc123");
}

#[tokio::test]
async fn test_extract_embed_url() {
    let response = server()
        .post("/api/extract")
        .json(&json!({ "url": "youtube.com/embed/xyz789?start=3" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["video_id"], "xyz789");
}

#[tokio::test]
async fn test_extract_not_a_url() {
    let response = server()
        .post("/api/extract")
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_youtube_url");
    assert_eq!(
        json["error"]["message"],
        "Invalid YouTube URL. Please check the URL and try again."
    );
    assert_eq!(json["error"]["details"]["url"], "not a url");
}

#[tokio::test]
async fn test_extract_empty_url_is_validation_error() {
    let response = server()
        .post("/api/extract")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}
