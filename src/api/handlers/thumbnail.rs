//! Handler for thumbnail resolution.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::extract::YoutubeUrlRequest;
use crate::api::dto::thumbnail::ThumbnailResponse;
use crate::domain::entities::embed_snippet;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves the best thumbnail for a YouTube URL.
///
/// # Endpoint
///
/// `POST /api/thumbnail`
///
/// # Resolution
///
/// 1. Extract the video id from `url`
/// 2. Probe `maxresdefault.jpg` on the thumbnail CDN
/// 3. Fall back to `hqdefault.jpg` if the probe fails
///
/// The probe is bounded by `PROBE_TIMEOUT_MS`; a timeout counts as a miss.
///
/// # Response
///
/// ```json
/// {
///   "video_id": "abc123",
///   "quality": "max_res",
///   "thumbnail_url": "https://img.youtube.com/vi/abc123/maxresdefault.jpg",
///   "video_url": "https://youtu.be/abc123",
///   "embed": "<a href=\"https://youtu.be/abc123\" target=\"_blank\">..."
/// }
/// ```
///
/// # Errors
///
/// - **400** `validation_error` - empty or oversized URL
/// - **400** `invalid_youtube_url` - no recognized YouTube URL shape
pub async fn thumbnail_handler(
    State(state): State<AppState>,
    Json(payload): Json<YoutubeUrlRequest>,
) -> Result<Json<ThumbnailResponse>, AppError> {
    payload.validate()?;

    let resolved = state.thumbnail_service.resolve_url(&payload.url).await?;
    let embed = embed_snippet(&payload.url, resolved.thumbnail.as_str());

    Ok(Json(ThumbnailResponse {
        video_id: resolved.video_id.to_string(),
        quality: resolved.thumbnail.quality,
        thumbnail_url: resolved.thumbnail.url,
        video_url: payload.url,
        embed,
    }))
}
