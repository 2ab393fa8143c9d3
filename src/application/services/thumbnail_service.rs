//! Thumbnail resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::domain::entities::{ThumbnailQuality, ThumbnailUrl, VideoId};
use crate::domain::probe::ImageProbe;
use crate::error::AppError;
use crate::utils::video_id::extract_video_id;

/// A YouTube URL resolved to its best available thumbnail.
#[derive(Debug, Clone)]
pub struct ResolvedThumbnail {
    pub video_id: VideoId,
    pub thumbnail: ThumbnailUrl,
}

/// Picks the best thumbnail a video has.
///
/// Probes the `maxresdefault` template and falls back to `hqdefault`, which
/// is assumed to exist for every video. Resolution therefore never fails once
/// a video id is known.
pub struct ThumbnailService {
    probe: Arc<dyn ImageProbe>,
    cdn_base: String,
}

impl ThumbnailService {
    /// Creates a service building URLs under `cdn_base`
    /// (normally [`crate::domain::entities::DEFAULT_THUMBNAIL_CDN`]).
    pub fn new(probe: Arc<dyn ImageProbe>, cdn_base: impl Into<String>) -> Self {
        Self {
            probe,
            cdn_base: cdn_base.into(),
        }
    }

    /// Resolves the thumbnail URL for a known video id.
    pub async fn resolve(&self, video_id: &VideoId) -> ThumbnailUrl {
        let max_res = ThumbnailUrl::for_video(&self.cdn_base, video_id, ThumbnailQuality::MaxRes);

        let thumbnail = if self.probe.exists(max_res.as_str()).await {
            max_res
        } else {
            ThumbnailUrl::for_video(&self.cdn_base, video_id, ThumbnailQuality::High)
        };

        info!(video_id = %video_id, quality = ?thumbnail.quality, "Thumbnail resolved");

        thumbnail
    }

    /// Extracts the video id from `url` and resolves its thumbnail.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidYoutubeUrl`] if `url` matches no known
    /// YouTube URL shape.
    pub async fn resolve_url(&self, url: &str) -> Result<ResolvedThumbnail, AppError> {
        let video_id = extract_video_id(url)
            .ok_or_else(|| AppError::invalid_youtube_url(json!({ "url": url })))?;

        let thumbnail = self.resolve(&video_id).await;

        Ok(ResolvedThumbnail {
            video_id,
            thumbnail,
        })
    }
}
