//! URL helpers used across the application.
//!
//! - [`video_id`] - Video id extraction from YouTube URLs
//! - [`image_url`] - Validation of user-supplied image URLs

pub mod image_url;
pub mod video_id;
