mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use thumb_overlay::api::handlers::thumbnail_handler;

use common::StubProbe;

fn server(probe: Arc<StubProbe>) -> TestServer {
    let state = common::create_test_state(probe);
    let app = Router::new()
        .route("/api/thumbnail", post(thumbnail_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_thumbnail_max_res_present() {
    let probe = Arc::new(StubProbe::all_present());
    let response = server(probe.clone())
        .post("/api/thumbnail")
        .json(&json!({ "url": "https://www.youtube.com/watch?v=abc123&t=10s" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["video_id"], "abc123");
    assert_eq!(json["quality"], "max_res");
    assert_eq!(
        json["thumbnail_url"],
        "https://img.youtube.com/vi/abc123/maxresdefault.jpg"
    );
    assert_eq!(json["video_url"], "https://www.youtube.com/watch?v=abc123&t=10s");
    assert_eq!(probe.calls(), 1);
}

#[tokio::test]
async fn test_thumbnail_falls_back_to_hqdefault() {
    let response = server(Arc::new(StubProbe::all_missing()))
        .post("/api/thumbnail")
        .json(&json!({ "url": "https://youtu.be/abc123?si=xyz" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["quality"], "high");
    assert_eq!(
        json["thumbnail_url"],
        "https://img.youtube.com/vi/abc123/hqdefault.jpg"
    );
}

#[tokio::test]
async fn test_thumbnail_embed_snippet() {
    let response = server(Arc::new(StubProbe::all_missing()))
        .post("/api/thumbnail")
        .json(&json!({ "url": "https://youtu.be/XXXX" }))
        .await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["embed"],
        "<a href=\"https://youtu.be/XXXX\" target=\"_blank\">\n  \
         <img src=\"https://img.youtube.com/vi/XXXX/hqdefault.jpg\" \
         alt=\"YouTube thumbnail with play button overlay\" width=\"700px\">\n</a>"
    );
}

#[tokio::test]
async fn test_thumbnail_invalid_url_does_not_probe() {
    let probe = Arc::new(StubProbe::all_present());
    let response = server(probe.clone())
        .post("/api/thumbnail")
        .json(&json!({ "url": "https://vimeo.com/123" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "invalid_youtube_url"
    );
    assert_eq!(probe.calls(), 0);
}

#[tokio::test]
async fn test_thumbnail_is_idempotent() {
    let server = server(Arc::new(StubProbe::all_present()));
    let body = json!({ "url": "https://youtu.be/abc123" });

    let first = server.post("/api/thumbnail").json(&body).await.text();
    let second = server.post("/api/thumbnail").json(&body).await.text();

    assert_eq!(first, second);
}
