//! DTOs for video id extraction.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request carrying a free-form YouTube URL.
#[derive(Debug, Deserialize, Validate)]
pub struct YoutubeUrlRequest {
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: String,
}

/// Extracted video id.
#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub video_id: String,
}
