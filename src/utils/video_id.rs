//! YouTube video id extraction from free-form URLs.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::entities::VideoId;

/// Recognized URL shapes, tried in order.
///
/// 1. `youtube.com/watch?v=<id>` - id runs until `&`
/// 2. `youtu.be/<id>` - id runs until `?`
/// 3. `youtube.com/embed/<id>` - id runs until `?`
///
/// Scheme and `www.` are optional. Patterns are unanchored.
static VIDEO_URL_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?:https?://)?(?:www\.)?youtube\.com/watch\?v=([^&]+)").unwrap(),
        Regex::new(r"(?:https?://)?(?:www\.)?youtu\.be/([^?]+)").unwrap(),
        Regex::new(r"(?:https?://)?(?:www\.)?youtube\.com/embed/([^?]+)").unwrap(),
    ]
});

/// Extracts the video id from a YouTube URL.
///
/// Returns the id captured by the first matching pattern, or `None` when the
/// input matches no known shape. The id is not validated further.
///
/// # Examples
///
/// ```
/// use thumb_overlay::utils::video_id::extract_video_id;
///
/// let id = extract_video_id("https://www.youtube.com/watch?v=abc123&t=10s").unwrap();
/// assert_eq!(id.as_str(), "abc123");
///
/// assert!(extract_video_id("not a url").is_none());
/// ```
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    VIDEO_URL_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(url)
            .and_then(|caps| caps.get(1))
            .and_then(|m| VideoId::new(m.as_str()))
    })
}
