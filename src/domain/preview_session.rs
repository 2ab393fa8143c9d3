//! Per-session preview state.
//!
//! Holds what the preview page shows: the current image, the YouTube URL the
//! user typed, the error message and the loading flag. Each YouTube
//! resolution is tagged with a [`RequestToken`]; only the latest token may
//! update the image, so a slow probe that finishes after a newer one cannot
//! overwrite the newer result.

use serde::Serialize;

use crate::domain::entities::{ThumbnailUrl, VideoId, embed_snippet, embed_video_url};
use crate::utils::video_id::extract_video_id;

pub const INVALID_YOUTUBE_URL_MESSAGE: &str =
    "Invalid YouTube URL. Please check the URL and try again.";

pub const IMAGE_UNAVAILABLE_MESSAGE: &str =
    "Unable to load image. Please check the URL and try again.";

/// What the user is currently entering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    #[default]
    Image,
    Youtube,
}

/// Monotonically increasing id of a resolution started by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// A resolution the caller must run and hand back via
/// [`PreviewSession::complete`].
#[derive(Debug, Clone)]
pub struct PendingResolution {
    pub token: RequestToken,
    pub video_id: VideoId,
}

#[derive(Debug, Clone, Default)]
pub struct PreviewSession {
    input_kind: InputKind,
    image_url: String,
    youtube_url: String,
    error: Option<&'static str>,
    loading: bool,
    issued: u64,
}

impl PreviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the `img` and `yt` query parameters, in that order.
    ///
    /// Returns the resolution to run when `yt` carried a video id.
    pub fn bootstrap(&mut self, img: Option<&str>, yt: Option<&str>) -> Option<PendingResolution> {
        if let Some(img) = img {
            self.set_image_url(img);
        }
        yt.and_then(|yt| self.begin_youtube(yt))
    }

    /// Switches to direct image input.
    ///
    /// Cancels any resolution still in flight.
    pub fn set_image_url(&mut self, url: &str) {
        self.cancel_pending();
        self.input_kind = InputKind::Image;
        self.image_url = url.to_string();
        self.error = None;
    }

    /// Switches to YouTube input and starts a resolution if `url` carries a
    /// video id.
    pub fn begin_youtube(&mut self, url: &str) -> Option<PendingResolution> {
        self.input_kind = InputKind::Youtube;
        self.youtube_url = url.to_string();

        if url.is_empty() {
            self.cancel_pending();
            self.image_url.clear();
            return None;
        }

        let Some(video_id) = extract_video_id(url) else {
            self.cancel_pending();
            self.error = Some(INVALID_YOUTUBE_URL_MESSAGE);
            self.image_url.clear();
            return None;
        };

        self.issued += 1;
        self.loading = true;
        self.error = None;

        Some(PendingResolution {
            token: RequestToken(self.issued),
            video_id,
        })
    }

    /// Applies a finished resolution.
    ///
    /// Returns `false` and leaves the session untouched when `token` is not
    /// the latest one issued.
    pub fn complete(&mut self, token: RequestToken, thumbnail: ThumbnailUrl) -> bool {
        if token.0 != self.issued {
            return false;
        }
        self.image_url = thumbnail.url;
        self.error = None;
        self.loading = false;
        true
    }

    /// Records that the current image could not be loaded.
    /// Retires the latest token so an in-flight completion is discarded.
    fn cancel_pending(&mut self) {
        self.issued += 1;
        self.loading = false;
    }

    pub fn image_failed(&mut self) {
        self.error = Some(IMAGE_UNAVAILABLE_MESSAGE);
        self.image_url.clear();
        self.loading = false;
    }

    pub fn embed_code(&self) -> String {
        let video_url = embed_video_url(Some(&self.youtube_url), &self.image_url);
        embed_snippet(&video_url, &self.image_url)
    }

    pub fn show_preview(&self) -> bool {
        !self.image_url.is_empty() && self.error.is_none()
    }

    pub fn input_kind(&self) -> InputKind {
        self.input_kind
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn youtube_url(&self) -> &str {
        &self.youtube_url
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
