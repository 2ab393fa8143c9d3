//! No-network probe for offline or restricted deployments.

use crate::domain::probe::ImageProbe;
use async_trait::async_trait;
use tracing::debug;

/// A probe that never touches the network and reports every image missing.
///
/// Thumbnail resolution then always degrades to the `hqdefault` template,
/// which YouTube serves for every valid video.
///
/// # Use Cases
///
/// - Deployments without outbound network access
/// - `thumbctl --offline`
pub struct OfflineProbe;

impl OfflineProbe {
    pub fn new() -> Self {
        debug!("Using OfflineProbe (image probing disabled)");
        Self
    }
}

impl Default for OfflineProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageProbe for OfflineProbe {
    async fn exists(&self, _url: &str) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "offline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_probe_reports_missing() {
        let probe = OfflineProbe::new();
        assert!(!probe.exists("https://img.youtube.com/vi/abc/maxresdefault.jpg").await);
        assert_eq!(probe.name(), "offline");
    }
}
