//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export PROBE_TIMEOUT_MS="5000"
//! export THUMBNAIL_CDN="https://img.youtube.com"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address as `ip:port` (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IP from forwarding headers (default: `false`)
//! - `PROBE_ENABLED` - Probe thumbnails over HTTP (default: `true`)
//! - `PROBE_TIMEOUT_MS` - Probe timeout in milliseconds (default: 5000, max: 60000)
//! - `THUMBNAIL_CDN` - Base URL of the thumbnail CDN (default: `https://img.youtube.com`)

use anyhow::Result;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::domain::entities::DEFAULT_THUMBNAIL_CDN;

const MAX_PROBE_TIMEOUT_MS: u64 = 60_000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// When false, no outbound probe is made and thumbnails resolve to `hqdefault`.
    pub probe_enabled: bool,
    pub probe_timeout_ms: u64,
    pub thumbnail_cdn: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env_flag("BEHIND_PROXY").unwrap_or(false);
        let probe_enabled = env_flag("PROBE_ENABLED").unwrap_or(true);

        let probe_timeout_ms = env::var("PROBE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5_000);

        let thumbnail_cdn =
            env::var("THUMBNAIL_CDN").unwrap_or_else(|_| DEFAULT_THUMBNAIL_CDN.to_string());

        Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            probe_enabled,
            probe_timeout_ms,
            thumbnail_cdn,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `probe_timeout_ms` is zero or above 60000
    /// - `thumbnail_cdn` is not an HTTP(S) URL
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'ip:port', got '{}'",
                self.listen_addr
            );
        }

        if self.probe_timeout_ms == 0 || self.probe_timeout_ms > MAX_PROBE_TIMEOUT_MS {
            anyhow::bail!(
                "PROBE_TIMEOUT_MS must be between 1 and {}, got {}",
                MAX_PROBE_TIMEOUT_MS,
                self.probe_timeout_ms
            );
        }

        if !self.thumbnail_cdn.starts_with("http://") && !self.thumbnail_cdn.starts_with("https://")
        {
            anyhow::bail!(
                "THUMBNAIL_CDN must start with 'http://' or 'https://', got '{}'",
                self.thumbnail_cdn
            );
        }

        Ok(())
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);

        if self.probe_enabled {
            tracing::info!("  Image probe: http (timeout {}ms)", self.probe_timeout_ms);
        } else {
            tracing::info!("  Image probe: disabled");
        }

        tracing::info!("  Thumbnail CDN: {}", self.thumbnail_cdn);
    }
}

/// Reads a boolean flag; `true`/`1` and `false`/`0` are accepted.
fn env_flag(name: &str) -> Option<bool> {
    let value = env::var(name).ok()?;
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        Some(false)
    } else {
        None
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
