//! Thumbnail URL entity built from the CDN path templates.

use serde::Serialize;

use super::VideoId;

/// Default base URL of the YouTube image CDN.
pub const DEFAULT_THUMBNAIL_CDN: &str = "https://img.youtube.com";

/// Which CDN template a thumbnail URL was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThumbnailQuality {
    /// `maxresdefault.jpg`, only present for some videos.
    MaxRes,
    /// `hqdefault.jpg`, present for every valid video.
    High,
}

impl ThumbnailQuality {
    /// File name of the template on the CDN.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::MaxRes => "maxresdefault.jpg",
            Self::High => "hqdefault.jpg",
        }
    }
}

/// A resolved thumbnail URL for a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailUrl {
    pub quality: ThumbnailQuality,
    pub url: String,
}

impl ThumbnailUrl {
    /// Builds `{cdn_base}/vi/{id}/{file}` for the given quality.
    pub fn for_video(cdn_base: &str, video_id: &VideoId, quality: ThumbnailQuality) -> Self {
        Self {
            quality,
            url: format!(
                "{}/vi/{}/{}",
                cdn_base.trim_end_matches('/'),
                video_id,
                quality.file_name()
            ),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> VideoId {
        VideoId::new(raw).unwrap()
    }

    #[test]
    fn test_maxres_template() {
        let thumb = ThumbnailUrl::for_video(
            DEFAULT_THUMBNAIL_CDN,
            &id("abc123"),
            ThumbnailQuality::MaxRes,
        );
        assert_eq!(
            thumb.as_str(),
            "https://img.youtube.com/vi/abc123/maxresdefault.jpg"
        );
    }

    #[test]
    fn test_high_template() {
        let thumb =
            ThumbnailUrl::for_video(DEFAULT_THUMBNAIL_CDN, &id("abc123"), ThumbnailQuality::High);
        assert_eq!(thumb.as_str(), "https://img.youtube.com/vi/abc123/hqdefault.jpg");
        assert_eq!(thumb.quality, ThumbnailQuality::High);
    }

    #[test]
    fn test_trailing_slash_in_base() {
        let thumb = ThumbnailUrl::for_video(
            "http://127.0.0.1:9000/",
            &id("xyz"),
            ThumbnailQuality::High,
        );
        assert_eq!(thumb.as_str(), "http://127.0.0.1:9000/vi/xyz/hqdefault.jpg");
    }

    #[test]
    fn test_quality_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ThumbnailQuality::MaxRes).unwrap(),
            "\"max_res\""
        );
        assert_eq!(serde_json::to_string(&ThumbnailQuality::High).unwrap(), "\"high\"");
    }
}
