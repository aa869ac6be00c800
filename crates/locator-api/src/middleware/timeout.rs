//! Request timeout layer.

use std::time::Duration;

use tower_http::timeout::TimeoutLayer;

/// Fails requests that run longer than `seconds` with 408.
pub fn build_timeout_layer(seconds: u64) -> TimeoutLayer {
    TimeoutLayer::new(Duration::from_secs(seconds.max(1)))
}
