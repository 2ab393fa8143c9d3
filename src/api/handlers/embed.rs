//! Handler for embed snippet generation.

use axum::Json;
use validator::Validate;

use crate::api::dto::embed::{EmbedRequest, EmbedResponse};
use crate::domain::entities::{embed_snippet, embed_video_url};
use crate::error::AppError;

/// Builds the embed snippet for an image URL.
///
/// # Endpoint
///
/// `POST /api/embed`
///
/// No network access: the image is not probed. Output for identical input
/// is byte-identical.
///
/// # Request Body
///
/// ```json
/// {
///   "image_url": "https://img.youtube.com/vi/abc123/hqdefault.jpg",
///   "youtube_url": "https://youtu.be/abc123"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `image_url` is not a valid URL.
pub async fn embed_handler(
    Json(payload): Json<EmbedRequest>,
) -> Result<Json<EmbedResponse>, AppError> {
    payload.validate()?;

    let video_url = embed_video_url(payload.youtube_url.as_deref(), &payload.image_url);
    let embed = embed_snippet(&video_url, &payload.image_url);

    Ok(Json(EmbedResponse { video_url, embed }))
}
