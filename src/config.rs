//! Client configuration
//!
//! Holds the upstream base URL, the per-request timeout and the cache TTL.
//! Defaults match the public Nager.Date service.

use std::time::Duration;

/// Base URL for the Nager.Date API
pub const NAGER_BASE_URL: &str = "https://date.nager.at/api/v3";

/// Configuration for the holiday client
#[derive(Debug, Clone)]
pub struct HolidayConfig {
    /// Base URL that endpoint paths are joined onto
    pub base_url: String,
    /// Timeout applied to every upstream request
    pub request_timeout: Duration,
    /// How long a fetched country/year list stays fresh
    pub cache_ttl: chrono::Duration,
}

impl Default for HolidayConfig {
    fn default() -> Self {
        Self {
            base_url: NAGER_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            cache_ttl: chrono::Duration::hours(24),
        }
    }
}

impl HolidayConfig {
    /// Point the client at a different API root (mirrors, mock servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: chrono::Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}
