//! Configuration types shared across Tavola components.

use std::time::Duration;

/// HTTP client configuration for Places API calls.
///
/// There is deliberately no retry knob: upstream failures are surfaced to the
/// caller as-is, never retried.
pub struct HttpConfig {
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}
