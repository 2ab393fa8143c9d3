//! DTOs for thumbnail resolution.

use serde::Serialize;

use crate::domain::entities::ThumbnailQuality;

/// Resolved thumbnail and the embed snippet built from it.
///
/// `video_url` is the URL the caller supplied; the snippet links to it.
#[derive(Debug, Serialize)]
pub struct ThumbnailResponse {
    pub video_id: String,
    pub quality: ThumbnailQuality,
    pub thumbnail_url: String,
    pub video_url: String,
    pub embed: String,
}
