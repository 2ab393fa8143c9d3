//! YouTube video identifier.

use std::fmt;

/// Opaque token YouTube uses to address a video.
///
/// No structure is validated beyond being non-empty: the identifier is
/// whatever a recognized URL shape captured, so unknown or future ID formats
/// pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Wraps a raw identifier. Returns `None` for an empty string.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch URL for this video.
    pub fn watch_url(&self) -> String {
        format!("https://youtube.com/watch?v={}", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_id_rejects_empty() {
        assert!(VideoId::new("").is_none());
    }

    #[test]
    fn test_video_id_keeps_raw_value() {
        let id = VideoId::new("dQw4w9WgXcQ").unwrap();
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
        assert_eq!(id.to_string(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_video_id_watch_url() {
        let id = VideoId::new("abc123").unwrap();
        assert_eq!(id.watch_url(), "https://youtube.com/watch?v=abc123");
    }
}
