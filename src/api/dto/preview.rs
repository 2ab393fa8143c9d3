//! DTOs for the JSON preview endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::preview_session::{InputKind, PreviewSession};

/// Query parameters shared by the preview page and the JSON preview endpoint.
///
/// Values arrive percent-decoded.
#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    pub img: Option<String>,
    pub yt: Option<String>,
}

/// Snapshot of a preview session.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub input_kind: InputKind,
    pub image_url: Option<String>,
    pub youtube_url: Option<String>,
    pub error: Option<String>,
    pub embed: Option<String>,
}

impl From<&PreviewSession> for PreviewResponse {
    fn from(session: &PreviewSession) -> Self {
        let show = session.show_preview();
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());

        Self {
            input_kind: session.input_kind(),
            image_url: non_empty(session.image_url()),
            youtube_url: non_empty(session.youtube_url()),
            error: session.error().map(str::to_string),
            embed: show.then(|| session.embed_code()),
        }
    }
}
