//! Lookup pipeline configuration.
//!
//! All tuning knobs are explicit and injected at construction; nothing in
//! the pipeline reads ambient environment at call time. The server binary
//! resolves environment variables and flags once at startup and builds one
//! of these.

use std::time::Duration;

use crate::coord::DEFAULT_BUCKET_SIZE;

/// Default time-to-live for cached provider responses.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// Default bounding-box tolerance for store proximity queries, in degrees.
pub const DEFAULT_STORE_TOLERANCE: f64 = 0.05;

/// Default provider search radius, in the provider's distance units.
pub const DEFAULT_SEARCH_RADIUS: u32 = 5000;

/// Configuration for [`LookupOrchestrator`](super::LookupOrchestrator).
#[derive(Clone, Debug)]
pub struct LookupConfig {
    /// API key for the external search provider.
    pub provider_api_key: String,

    /// Grid cell size for cache bucketing, in degrees.
    pub bucket_size: f64,

    /// Time-to-live for cached provider responses.
    pub cache_ttl: Duration,

    /// Bounding-box tolerance for store proximity queries, in degrees.
    pub store_tolerance: f64,

    /// Provider search radius.
    pub search_radius: u32,
}

impl LookupConfig {
    /// Create a config with the given API key and default tuning.
    pub fn new(provider_api_key: impl Into<String>) -> Self {
        Self {
            provider_api_key: provider_api_key.into(),
            bucket_size: DEFAULT_BUCKET_SIZE,
            cache_ttl: DEFAULT_CACHE_TTL,
            store_tolerance: DEFAULT_STORE_TOLERANCE,
            search_radius: DEFAULT_SEARCH_RADIUS,
        }
    }

    /// Set the cache bucket size.
    pub fn with_bucket_size(mut self, degrees: f64) -> Self {
        self.bucket_size = degrees;
        self
    }

    /// Set the cache time-to-live.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Set the store proximity tolerance.
    pub fn with_store_tolerance(mut self, degrees: f64) -> Self {
        self.store_tolerance = degrees;
        self
    }

    /// Set the provider search radius.
    pub fn with_search_radius(mut self, radius: u32) -> Self {
        self.search_radius = radius;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LookupConfig::new("key");

        assert_eq!(config.provider_api_key, "key");
        assert_eq!(config.bucket_size, DEFAULT_BUCKET_SIZE);
        assert_eq!(config.cache_ttl, Duration::from_secs(1800));
        assert_eq!(config.store_tolerance, DEFAULT_STORE_TOLERANCE);
        assert_eq!(config.search_radius, DEFAULT_SEARCH_RADIUS);
    }

    #[test]
    fn test_builder_overrides() {
        let config = LookupConfig::new("key")
            .with_bucket_size(0.05)
            .with_cache_ttl(Duration::from_secs(60))
            .with_store_tolerance(0.01)
            .with_search_radius(1000);

        assert_eq!(config.bucket_size, 0.05);
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.store_tolerance, 0.01);
        assert_eq!(config.search_radius, 1000);
    }
}
