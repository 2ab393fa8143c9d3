//! HTTP-backed image existence probe.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::probe::ImageProbe;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Probes images with a plain `GET` and a status check.
///
/// The response body is never read. Redirects are followed, so a CDN
/// redirecting to the actual object still counts as present.
pub struct HttpImageProbe {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpImageProbe {
    /// Builds a probe whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl ImageProbe for HttpImageProbe {
    async fn exists(&self, url: &str) -> bool {
        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                debug!(%url, %status, "Image probe answered");
                status.is_success()
            }
            Err(e) if e.is_timeout() => {
                debug!(%url, timeout_ms = self.timeout.as_millis() as u64, "Image probe timed out");
                false
            }
            Err(e) => {
                debug!(%url, error = %e, "Image probe failed");
                false
            }
        }
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
