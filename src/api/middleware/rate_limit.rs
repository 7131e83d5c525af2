//! Per-client rate limiting using the token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// One token every 20 ms, i.e. a sustained 50 requests per second.
const REPLENISH_MILLIS: u64 = 20;
const BURST_SIZE: u32 = 100;

/// Rate limiter keyed on the socket peer address.
///
/// Requests exceeding the limit receive `429 Too Many Requests`. The server
/// must be started with connect info so the peer address is available.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(REPLENISH_MILLIS)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("non-zero rate limit period and burst"),
    );

    GovernorLayer::new(governor_conf)
}

/// Rate limiter keyed on the client address reported by a reverse proxy.
///
/// Reads `X-Forwarded-For`, `X-Real-IP` and `Forwarded` before falling back
/// to the peer address. Enable only behind a trusted proxy.
pub fn proxied_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_millisecond(REPLENISH_MILLIS)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("non-zero rate limit period and burst"),
    );

    GovernorLayer::new(governor_conf)
}
