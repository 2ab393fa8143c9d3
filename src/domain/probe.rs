//! Existence probe trait for remote images.

use async_trait::async_trait;

/// Checks whether an image URL can be fetched.
///
/// A failed check is a normal negative outcome, never an error: transport
/// failures, timeouts and non-success statuses all report `false`.
///
/// # Implementations
///
/// - [`crate::infrastructure::probe::HttpImageProbe`] - Real HTTP request with timeout
/// - [`crate::infrastructure::probe::OfflineProbe`] - Never touches the network
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageProbe: Send + Sync {
    /// Returns `true` if `url` answered with a success status.
    async fn exists(&self, url: &str) -> bool;

    /// Short backend name for health reporting.
    fn name(&self) -> &'static str;
}
