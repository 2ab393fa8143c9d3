//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder, key_extractor::KeyExtractor};

/// Requests replenished per second for each client.
const PER_SECOND: u64 = 2;

/// Requests a client may issue in a burst.
const BURST_SIZE: u32 = 30;

/// Creates a rate limiter for the JSON API.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 30 requests
///
/// Every thumbnail request can trigger an outbound probe, so the API is
/// limited per client. Requests exceeding the limit receive
/// `429 Too Many Requests`.
///
/// # Key Extraction
///
/// - [`tower_governor::key_extractor::PeerIpKeyExtractor`] - socket peer address
/// - [`tower_governor::key_extractor::SmartIpKeyExtractor`] - forwarding headers first,
///   for deployments behind a trusted reverse proxy
///
/// # Panics
///
/// Panics if the constant limits above are zero.
pub fn layer<K>(key_extractor: K) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>
where
    K: KeyExtractor,
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(PER_SECOND)
            .burst_size(BURST_SIZE)
            .key_extractor(key_extractor)
            .finish()
            .expect("rate limit constants are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
