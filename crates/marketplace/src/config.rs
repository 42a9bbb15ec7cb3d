//! Marketplace connection configuration.

use std::time::Duration;

use offersync_events::RetryPolicy;

/// Configuration of the outbound marketplace integration.
///
/// `execute` is an explicit flag, never an environment sniff: when it is off,
/// every delivery short-circuits to success without any network I/O. Live
/// sends are an opt-in.
#[derive(Debug, Clone)]
pub struct MarketplaceConfig {
    pub base_url: String,
    pub execute: bool,
    pub request_timeout: Duration,
    pub retry: RetryPolicy,
}

impl MarketplaceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            execute: false,
            request_timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
        }
    }
}
