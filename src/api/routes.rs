//! API route configuration.

use crate::api::handlers::{
    embed_handler, extract_handler, preview_json_handler, thumbnail_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All JSON API routes.
///
/// # Endpoints
///
/// - `POST /extract`    - Video id from a YouTube URL
/// - `POST /thumbnail`  - Best thumbnail and embed snippet for a YouTube URL
/// - `POST /embed`      - Embed snippet for an image URL
/// - `GET  /preview`    - Preview state for `img` / `yt` query parameters
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/extract", post(extract_handler))
        .route("/thumbnail", post(thumbnail_handler))
        .route("/embed", post(embed_handler))
        .route("/preview", get(preview_json_handler))
}
