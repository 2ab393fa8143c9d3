//! Preview page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};

use crate::api::dto::preview::PreviewQuery;
use crate::domain::preview_session::{IMAGE_UNAVAILABLE_MESSAGE, InputKind, PreviewSession};
use crate::state::AppState;

/// Template for the preview page.
///
/// Renders `templates/preview.html` with:
/// - Image URL and YouTube URL forms
/// - Thumbnail with play-button overlay
/// - Embed snippet with a copy button
/// - Error message, also shown by the page when the image fails to load
#[derive(Template, WebTemplate)]
#[template(path = "preview.html")]
pub struct PreviewTemplate {
    pub youtube_mode: bool,
    pub image_url: String,
    pub youtube_url: String,
    pub error: String,
    pub show_preview: bool,
    pub embed_code: String,
    pub image_error_message: &'static str,
}

impl From<&PreviewSession> for PreviewTemplate {
    fn from(session: &PreviewSession) -> Self {
        let show_preview = session.show_preview();

        Self {
            youtube_mode: session.input_kind() == InputKind::Youtube,
            image_url: session.image_url().to_string(),
            youtube_url: session.youtube_url().to_string(),
            error: session.error().unwrap_or_default().to_string(),
            show_preview,
            embed_code: if show_preview {
                session.embed_code()
            } else {
                String::new()
            },
            image_error_message: IMAGE_UNAVAILABLE_MESSAGE,
        }
    }
}

/// Renders the preview page.
///
/// # Endpoint
///
/// `GET /?img=<image url>` or `GET /?yt=<youtube url>`
///
/// Both forms on the page submit back here, so a query parameter is the
/// only input. A `yt` value is resolved before the page is rendered.
pub async fn preview_handler(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> impl IntoResponse {
    let session = state
        .preview_service
        .render(query.img.as_deref(), query.yt.as_deref())
        .await;

    PreviewTemplate::from(&session)
}
