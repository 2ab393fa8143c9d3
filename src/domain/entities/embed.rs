//! Embed snippet pasted by users to show a linked, overlaid thumbnail.

use crate::utils::video_id::extract_video_id;

/// Alt text carried by every generated snippet.
pub const EMBED_ALT_TEXT: &str = "YouTube thumbnail with play button overlay";

/// Width attribute carried by every generated snippet.
pub const EMBED_WIDTH: &str = "700px";

/// Renders the embed snippet.
///
/// Values are substituted verbatim; the output is the user's own markup and
/// is escaped only when displayed inside an HTML page.
///
/// ```text
/// <a href="{video_url}" target="_blank">
///   <img src="{image_url}" alt="YouTube thumbnail with play button overlay" width="700px">
/// </a>
/// ```
pub fn embed_snippet(video_url: &str, image_url: &str) -> String {
    format!(
        "<a href=\"{video_url}\" target=\"_blank\">\n  <img src=\"{image_url}\" alt=\"{EMBED_ALT_TEXT}\" width=\"{EMBED_WIDTH}\">\n</a>"
    )
}

/// Picks the link target of the snippet.
///
/// The YouTube URL the user supplied wins. Without one, a watch URL is
/// rebuilt from whatever video id the image URL carries, or left with an
/// empty id.
pub fn embed_video_url(youtube_url: Option<&str>, image_url: &str) -> String {
    match youtube_url {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => {
            let id = extract_video_id(image_url);
            format!(
                "https://youtube.com/watch?v={}",
                id.as_ref().map(|id| id.as_str()).unwrap_or_default()
            )
        }
    }
}
