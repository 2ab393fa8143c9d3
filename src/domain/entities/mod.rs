//! Core domain entities.
//!
//! Entities are short-lived values created per request; nothing here is
//! persisted.
//!
//! - [`VideoId`] - Identifier extracted from a YouTube URL
//! - [`ThumbnailUrl`] - One of the two CDN thumbnail templates for a video
//! - [`embed`] - The exported embed snippet

pub mod embed;
pub mod thumbnail;
pub mod video_id;

pub use embed::{embed_snippet, embed_video_url};
pub use thumbnail::{DEFAULT_THUMBNAIL_CDN, ThumbnailQuality, ThumbnailUrl};
pub use video_id::VideoId;
