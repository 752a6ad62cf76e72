// src/presentation/http/middleware/rate_limit.rs
use crate::config::RateLimitSettings;
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::time::Duration;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Time between two replenished requests when `per_second` are allowed each second.
pub fn refill_period(settings: RateLimitSettings) -> Option<Duration> {
    Duration::from_secs(1)
        .as_nanos()
        .checked_div(u128::from(settings.per_second))
        .and_then(|nanos| u64::try_from(nanos).ok())
        .filter(|nanos| *nanos > 0)
        .map(Duration::from_nanos)
}

/// Per-client-IP limiter. `None` when the settings cannot form a valid quota.
pub fn rate_limit_layer(settings: RateLimitSettings) -> Option<RateLimitLayer> {
    let period = refill_period(settings)?;
    let mut builder = GovernorConfigBuilder::default();
    builder.period(period);
    builder.burst_size(settings.burst_size);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}
