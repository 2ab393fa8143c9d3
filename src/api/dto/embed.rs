//! DTOs for embed snippet generation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to build a snippet around an image URL.
#[derive(Debug, Deserialize, Validate)]
pub struct EmbedRequest {
    #[validate(url(message = "Invalid image URL"))]
    pub image_url: String,

    /// Link target. When absent, a watch URL is rebuilt from the image URL.
    #[validate(length(max = 2048))]
    pub youtube_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EmbedResponse {
    pub video_url: String,
    pub embed: String,
}
