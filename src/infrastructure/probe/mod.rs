//! Image existence probes.
//!
//! Provides two [`crate::domain::probe::ImageProbe`] implementations:
//! - [`HttpImageProbe`] - Real request with status check and timeout
//! - [`OfflineProbe`] - Always reports the image missing

mod http_probe;
mod offline_probe;

pub use http_probe::HttpImageProbe;
pub use offline_probe::OfflineProbe;
