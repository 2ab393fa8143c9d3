//! Preview orchestration behind the preview page.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::ThumbnailService;
use crate::domain::preview_session::{InputKind, PreviewSession};
use crate::utils::image_url::validate_image_url;

/// Drives a [`PreviewSession`] from the `img` / `yt` inputs.
///
/// YouTube input goes through extraction and thumbnail resolution. Direct
/// image input is never fetched by the server: it is shown as-is and a load
/// failure is reported by the page itself. Only its scheme is checked.
pub struct PreviewService {
    thumbnails: Arc<ThumbnailService>,
}

impl PreviewService {
    pub fn new(thumbnails: Arc<ThumbnailService>) -> Self {
        Self { thumbnails }
    }

    /// Builds the session state for one page render.
    ///
    /// `yt` wins over `img` when both are given. The only outbound request
    /// is the `maxresdefault` lookup made while resolving `yt`.
    pub async fn render(&self, img: Option<&str>, yt: Option<&str>) -> PreviewSession {
        let mut session = PreviewSession::new();

        if let Some(pending) = session.bootstrap(img, yt) {
            let thumbnail = self.thumbnails.resolve(&pending.video_id).await;
            session.complete(pending.token, thumbnail);
        }

        if session.input_kind() == InputKind::Image
            && !session.image_url().is_empty()
            && let Err(e) = validate_image_url(session.image_url())
        {
            debug!(url = %session.image_url(), error = %e, "Rejected image URL");
            session.image_failed();
        }

        session
    }
}
