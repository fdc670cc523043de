//! Rate limiting configuration.

use std::time::Duration;

/// Rate limiting configuration for a provider.
///
/// Callers iterating over many symbols wait `min_delay` between two
/// consecutive requests to the same provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Maximum requests allowed per minute.
    pub requests_per_minute: u32,

    /// Minimum delay between requests.
    pub min_delay: Duration,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            requests_per_minute: 60,
            min_delay: Duration::from_secs(1),
        }
    }
}
