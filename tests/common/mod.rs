#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, extract::Path, http::StatusCode, routing::get};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use thumb_overlay::domain::entities::DEFAULT_THUMBNAIL_CDN;
use thumb_overlay::domain::probe::ImageProbe;
use thumb_overlay::state::AppState;

/// Probe with a fixed answer that counts its calls.
pub struct StubProbe {
    all_present: bool,
    calls: AtomicUsize,
}

impl StubProbe {
    pub fn all_present() -> Self {
        Self {
            all_present: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn all_missing() -> Self {
        Self {
            all_present: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageProbe for StubProbe {
    async fn exists(&self, _url: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.all_present
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

pub fn create_test_state(probe: Arc<StubProbe>) -> AppState {
    AppState::new(probe, DEFAULT_THUMBNAIL_CDN)
}

/// Serves a fake thumbnail CDN on an ephemeral port and returns its base URL.
///
/// - `/vi/{id}/maxresdefault.jpg` - 200 when `id` starts with `hd`, else 404
/// - `/vi/{id}/hqdefault.jpg` - always 200
/// - `/ok.png` - 200
/// - `/missing.png` - 404
/// - `/slow.png` - 200 after two seconds
/// - `/moved.png` - 302 to `/ok.png`
pub async fn spawn_image_server() -> String {
    async fn thumbnail(Path((id, file)): Path<(String, String)>) -> StatusCode {
        match file.as_str() {
            "maxresdefault.jpg" if id.starts_with("hd") => StatusCode::OK,
            "hqdefault.jpg" => StatusCode::OK,
            _ => StatusCode::NOT_FOUND,
        }
    }

    async fn slow() -> StatusCode {
        tokio::time::sleep(Duration::from_secs(2)).await;
        StatusCode::OK
    }

    async fn moved() -> (StatusCode, [(&'static str, &'static str); 1]) {
        (StatusCode::FOUND, [("location", "/ok.png")])
    }

    let app = Router::new()
        .route("/vi/{id}/{file}", get(thumbnail))
        .route("/ok.png", get(|| async { StatusCode::OK }))
        .route("/missing.png", get(|| async { StatusCode::NOT_FOUND }))
        .route("/slow.png", get(slow))
        .route("/moved.png", get(moved));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// Returns a base URL nothing listens on.
pub async fn unreachable_base() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
