//! # Thumbnail Overlay
//!
//! Preview a YouTube thumbnail or any image URL with a play-button overlay and
//! generate the embed snippet that links it to the video.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Video ids, thumbnail URLs, embed snippet, session state
//! - **Application Layer** ([`application`]) - Thumbnail resolution and preview orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP and offline image probes
//! - **API Layer** ([`api`]) - JSON handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - Server-rendered preview page
//!
//! ## Resolution
//!
//! 1. [`utils::video_id::extract_video_id`] recognizes `youtube.com/watch?v=`,
//!    `youtu.be/` and `youtube.com/embed/` URLs, in that order
//! 2. [`application::services::ThumbnailService`] probes `maxresdefault.jpg`
//! 3. A miss falls back to `hqdefault.jpg`, which every video has
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:3000"
//! cargo run
//! # open http://127.0.0.1:3000/?yt=https%3A%2F%2Fyoutu.be%2FdQw4w9WgXcQ
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{PreviewService, ThumbnailService};
    pub use crate::domain::entities::{ThumbnailQuality, ThumbnailUrl, VideoId, embed_snippet};
    pub use crate::domain::probe::ImageProbe;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::video_id::extract_video_id;
}
