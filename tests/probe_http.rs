mod common;

use std::sync::Arc;
use std::time::Duration;
use thumb_overlay::application::services::ThumbnailService;
use thumb_overlay::domain::entities::{ThumbnailQuality, VideoId};
use thumb_overlay::domain::probe::ImageProbe;
use thumb_overlay::infrastructure::probe::HttpImageProbe;

fn probe(timeout_ms: u64) -> HttpImageProbe {
    HttpImageProbe::new(Duration::from_millis(timeout_ms)).unwrap()
}

#[tokio::test]
async fn test_probe_success_status() {
    let base = common::spawn_image_server().await;
    assert!(probe(1_000).exists(&format!("{base}/ok.png")).await);
}

#[tokio::test]
async fn test_probe_not_found() {
    let base = common::spawn_image_server().await;
    assert!(!probe(1_000).exists(&format!("{base}/missing.png")).await);
}

#[tokio::test]
async fn test_probe_follows_redirect() {
    let base = common::spawn_image_server().await;
    assert!(probe(1_000).exists(&format!("{base}/moved.png")).await);
}

#[tokio::test]
async fn test_probe_timeout_is_negative() {
    let base = common::spawn_image_server().await;
    assert!(!probe(200).exists(&format!("{base}/slow.png")).await);
}

#[tokio::test]
async fn test_probe_unreachable_host() {
    let base = common::unreachable_base().await;
    assert!(!probe(1_000).exists(&format!("{base}/ok.png")).await);
}

#[tokio::test]
async fn test_probe_malformed_url() {
    assert!(!probe(1_000).exists("not a url").await);
}

#[tokio::test]
async fn test_probe_reports_name_and_timeout() {
    let probe = probe(750);
    assert_eq!(probe.name(), "http");
    assert_eq!(probe.timeout(), Duration::from_millis(750));
}

#[tokio::test]
async fn test_resolver_against_cdn_with_max_res() {
    let base = common::spawn_image_server().await;
    let service = ThumbnailService::new(Arc::new(probe(1_000)), base.clone());

    let thumb = service.resolve(&VideoId::new("hd-video").unwrap()).await;

    assert_eq!(thumb.quality, ThumbnailQuality::MaxRes);
    assert_eq!(thumb.url, format!("{base}/vi/hd-video/maxresdefault.jpg"));
}

#[tokio::test]
async fn test_resolver_against_cdn_without_max_res() {
    let base = common::spawn_image_server().await;
    let service = ThumbnailService::new(Arc::new(probe(1_000)), base.clone());

    let thumb = service.resolve(&VideoId::new("sd-video").unwrap()).await;

    assert_eq!(thumb.quality, ThumbnailQuality::High);
    assert_eq!(thumb.url, format!("{base}/vi/sd-video/hqdefault.jpg"));
}

#[tokio::test]
async fn test_resolver_unreachable_cdn_still_returns_url() {
    let base = common::unreachable_base().await;
    let service = ThumbnailService::new(Arc::new(probe(500)), base.clone());

    let resolved = service
        .resolve_url("https://youtu.be/abc123?si=xyz")
        .await
        .unwrap();

    assert_eq!(resolved.thumbnail.url, format!("{base}/vi/abc123/hqdefault.jpg"));
}
