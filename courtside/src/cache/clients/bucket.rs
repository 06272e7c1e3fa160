//! Bucket cache client for raw provider responses.
//!
//! This client wraps a generic `Cache` with:
//! - Key translation: `BucketCoord` → `"TennisCourts-{lat}-{lng}"`
//! - Fail-open error handling: backend failures degrade to a miss
//! - Metrics injection: cache hit/miss reporting
//!
//! Failing open keeps the lookup path alive when the cache backend is
//! unreachable; the request falls through to the next tier and the
//! degradation is logged at WARN.

use std::sync::Arc;

use tracing::warn;

use crate::cache::traits::Cache;
use crate::coord::{BucketCoord, BucketKeyer};
use crate::telemetry::LookupMetrics;

/// Cache client for bucketed provider responses.
///
/// Translates `BucketCoord` to cache keys via the configured
/// [`BucketKeyer`] and optionally reports hits and misses.
pub struct BucketCacheClient {
    /// The underlying generic cache.
    cache: Arc<dyn Cache>,

    /// Keyer shared with the lookup pipeline.
    keyer: BucketKeyer,

    /// Optional metrics for hit/miss reporting.
    metrics: Option<Arc<LookupMetrics>>,
}

impl BucketCacheClient {
    /// Create a new bucket cache client without metrics.
    pub fn new(cache: Arc<dyn Cache>, keyer: BucketKeyer) -> Self {
        Self {
            cache,
            keyer,
            metrics: None,
        }
    }

    /// Create a new bucket cache client with metrics.
    pub fn with_metrics(
        cache: Arc<dyn Cache>,
        keyer: BucketKeyer,
        metrics: Arc<LookupMetrics>,
    ) -> Self {
        Self {
            cache,
            keyer,
            metrics: Some(metrics),
        }
    }

    /// Get the cached payload for a bucket.
    ///
    /// Backend errors are logged and treated as a miss.
    pub async fn get(&self, bucket: &BucketCoord) -> Option<Vec<u8>> {
        let key = self.keyer.key(bucket);
        match self.cache.get(&key).await {
            Ok(Some(data)) => {
                if let Some(ref m) = self.metrics {
                    m.cache_hit();
                }
                Some(data)
            }
            Ok(None) => {
                if let Some(ref m) = self.metrics {
                    m.cache_miss();
                }
                None
            }
            Err(e) => {
                warn!(error = %e, key = %key, "Bucket cache get failed, treating as miss");
                if let Some(ref m) = self.metrics {
                    m.cache_miss();
                }
                None
            }
        }
    }

    /// Store a raw payload for a bucket.
    ///
    /// Backend errors are logged and swallowed; caching is a side effect of
    /// a provider call, not a requirement of the request.
    pub async fn set(&self, bucket: &BucketCoord, data: Vec<u8>) {
        let key = self.keyer.key(bucket);
        if let Err(e) = self.cache.set(&key, data).await {
            warn!(error = %e, key = %key, "Bucket cache set failed");
        }
    }

    /// Current number of live entries in the underlying cache.
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::providers::MemoryCacheProvider;
    use crate::cache::traits::{BoxFuture, CacheError};

    fn client_over_memory() -> BucketCacheClient {
        let cache = Arc::new(MemoryCacheProvider::new(1_000_000, None));
        BucketCacheClient::new(cache, BucketKeyer::new(0.1))
    }

    #[tokio::test]
    async fn test_set_and_get_round_trip() {
        let client = client_over_memory();
        let bucket = BucketCoord { lat: 49.2, lng: -123.2 };

        client.set(&bucket, vec![1, 2, 3]).await;

        let result = client.get(&bucket).await;
        assert_eq!(result, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_get_missing_bucket() {
        let client = client_over_memory();
        let bucket = BucketCoord { lat: 0.0, lng: 0.0 };

        assert!(client.get(&bucket).await.is_none());
    }

    #[tokio::test]
    async fn test_distinct_buckets_do_not_collide() {
        let client = client_over_memory();
        let vancouver = BucketCoord { lat: 49.2, lng: -123.2 };
        let london = BucketCoord { lat: 51.5, lng: -0.2 };

        client.set(&vancouver, vec![1]).await;
        client.set(&london, vec![2]).await;

        assert_eq!(client.get(&vancouver).await, Some(vec![1]));
        assert_eq!(client.get(&london).await, Some(vec![2]));
    }

    #[tokio::test]
    async fn test_metrics_report_hit_and_miss() {
        let cache = Arc::new(MemoryCacheProvider::new(1_000_000, None));
        let metrics = Arc::new(LookupMetrics::new());
        let client =
            BucketCacheClient::with_metrics(cache, BucketKeyer::new(0.1), Arc::clone(&metrics));
        let bucket = BucketCoord { lat: 49.2, lng: -123.2 };

        client.get(&bucket).await;
        client.set(&bucket, vec![1]).await;
        client.get(&bucket).await;

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.cache_hits, 1);
        assert_eq!(snapshot.cache_misses, 1);
    }

    /// Cache backend that fails every operation.
    struct FailingCache;

    impl Cache for FailingCache {
        fn set(&self, _key: &str, _value: Vec<u8>) -> BoxFuture<'_, Result<(), CacheError>> {
            Box::pin(async { Err(CacheError::Backend("down".to_string())) })
        }

        fn get(&self, _key: &str) -> BoxFuture<'_, Result<Option<Vec<u8>>, CacheError>> {
            Box::pin(async { Err(CacheError::Backend("down".to_string())) })
        }

        fn delete(&self, _key: &str) -> BoxFuture<'_, Result<bool, CacheError>> {
            Box::pin(async { Err(CacheError::Backend("down".to_string())) })
        }

        fn entry_count(&self) -> u64 {
            0
        }
    }

    #[tokio::test]
    async fn test_backend_failure_degrades_to_miss() {
        let client = BucketCacheClient::new(Arc::new(FailingCache), BucketKeyer::new(0.1));
        let bucket = BucketCoord { lat: 49.2, lng: -123.2 };

        // Neither call panics or surfaces an error; get reads as a miss.
        client.set(&bucket, vec![1, 2, 3]).await;
        assert!(client.get(&bucket).await.is_none());
    }
}
