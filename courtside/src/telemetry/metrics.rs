//! Lock-free metrics collection for the lookup pipeline.

use std::sync::atomic::{AtomicU64, Ordering};

use super::snapshot::MetricsSnapshot;

/// Atomic counters recording tier outcomes across all requests.
///
/// All methods are lock-free and safe to call from any task. Counters only
/// ever increase; consumers take a [`MetricsSnapshot`] for display.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Requests answered from the persistent store.
    store_hits: AtomicU64,

    /// Requests answered from the bucket cache.
    cache_hits: AtomicU64,

    /// Cache lookups that missed (including backend failures, which
    /// degrade to a miss).
    cache_misses: AtomicU64,

    /// Calls issued to the external search provider.
    provider_calls: AtomicU64,

    /// Provider calls that failed.
    provider_failures: AtomicU64,

    /// Requests that waited behind an identical in-flight lookup.
    coalesced_waits: AtomicU64,
}

impl LookupMetrics {
    /// Create a new metrics collector with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a request served by the persistent store.
    pub fn store_hit(&self) {
        self.store_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request served by the bucket cache.
    pub fn cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache miss.
    pub fn cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a call to the external provider.
    pub fn provider_call(&self) {
        self.provider_calls.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed provider call.
    pub fn provider_failure(&self) {
        self.provider_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request that waited on an identical in-flight lookup.
    pub fn coalesced_wait(&self) {
        self.coalesced_waits.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time copy of all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            store_hits: self.store_hits.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            provider_calls: self.provider_calls.load(Ordering::Relaxed),
            provider_failures: self.provider_failures.load(Ordering::Relaxed),
            coalesced_waits: self.coalesced_waits.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zero() {
        let metrics = LookupMetrics::new();
        let snapshot = metrics.snapshot();

        assert_eq!(snapshot.store_hits, 0);
        assert_eq!(snapshot.cache_hits, 0);
        assert_eq!(snapshot.provider_calls, 0);
    }

    #[test]
    fn test_counters_accumulate() {
        let metrics = LookupMetrics::new();

        metrics.store_hit();
        metrics.store_hit();
        metrics.cache_hit();
        metrics.cache_miss();
        metrics.provider_call();
        metrics.provider_failure();
        metrics.coalesced_wait();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.store_hits, 2);
        assert_eq!(snapshot.cache_hits, 1);
        assert_eq!(snapshot.cache_misses, 1);
        assert_eq!(snapshot.provider_calls, 1);
        assert_eq!(snapshot.provider_failures, 1);
        assert_eq!(snapshot.coalesced_waits, 1);
    }

    #[test]
    fn test_concurrent_increments() {
        use std::sync::Arc;
        use std::thread;

        let metrics = Arc::new(LookupMetrics::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let metrics = Arc::clone(&metrics);
            handles.push(thread::spawn(move || {
                for _ in 0..1000 {
                    metrics.cache_miss();
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(metrics.snapshot().cache_misses, 8000);
    }
}
