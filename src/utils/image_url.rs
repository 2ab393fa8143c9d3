//! Validation of direct image URLs supplied by users.
//!
//! Direct images are rendered as-is, but only HTTP and HTTPS locations are
//! accepted so `javascript:`, `data:` or `file:` URLs never reach the page.

use url::Url;

/// Errors that can occur while checking a direct image URL.
#[derive(Debug, thiserror::Error)]
pub enum ImageUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Parses `input` and checks it points at an HTTP(S) host.
///
/// # Errors
///
/// Returns [`ImageUrlError::InvalidFormat`] for malformed URLs,
/// [`ImageUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes and
/// [`ImageUrlError::MissingHost`] when no host is present.
pub fn validate_image_url(input: &str) -> Result<Url, ImageUrlError> {
    let url = Url::parse(input.trim()).map_err(|e| ImageUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(ImageUrlError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(ImageUrlError::MissingHost);
    }

    Ok(url)
}
