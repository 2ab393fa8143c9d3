//! Handler for the JSON preview endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::preview::{PreviewQuery, PreviewResponse};
use crate::state::AppState;

/// Returns the preview state the page would show for `img` / `yt`.
///
/// # Endpoint
///
/// `GET /api/preview?yt=https%3A%2F%2Fyoutu.be%2FXXXX`
///
/// User-facing failures are reported in the `error` field with status 200.
/// Images are not fetched here, so "unable to load image" only appears for
/// URLs that are not HTTP(S).
pub async fn preview_json_handler(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Json<PreviewResponse> {
    let session = state
        .preview_service
        .render(query.img.as_deref(), query.yt.as_deref())
        .await;

    Json(PreviewResponse::from(&session))
}
