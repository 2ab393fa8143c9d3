//! Handler for video id extraction.

use axum::Json;
use serde_json::json;
use validator::Validate;

use crate::api::dto::extract::{ExtractResponse, YoutubeUrlRequest};
use crate::error::AppError;
use crate::utils::video_id::extract_video_id;

/// Extracts the video id from a YouTube URL.
///
/// # Endpoint
///
/// `POST /api/extract`
///
/// # Request Body
///
/// ```json
/// { "url": "https://youtu.be/abc123?si=xyz" }
/// ```
///
/// # Response
///
/// ```json
/// { "video_id": "abc123" }
/// ```
///
/// # Errors
///
/// - **400** `validation_error` - empty or oversized URL
/// - **400** `invalid_youtube_url` - no recognized YouTube URL shape
pub async fn extract_handler(
    Json(payload): Json<YoutubeUrlRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    payload.validate()?;

    let video_id = extract_video_id(&payload.url)
        .ok_or_else(|| AppError::invalid_youtube_url(json!({ "url": payload.url })))?;

    Ok(Json(ExtractResponse {
        video_id: video_id.to_string(),
    }))
}
