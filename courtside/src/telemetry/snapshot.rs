//! Point-in-time copy of lookup metrics.

use serde::Serialize;

/// A point-in-time copy of the [`LookupMetrics`](super::LookupMetrics)
/// counters, suitable for logging or serving from a status endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    /// Requests answered from the persistent store.
    pub store_hits: u64,

    /// Requests answered from the bucket cache.
    pub cache_hits: u64,

    /// Cache lookups that missed.
    pub cache_misses: u64,

    /// Calls issued to the external search provider.
    pub provider_calls: u64,

    /// Provider calls that failed.
    pub provider_failures: u64,

    /// Requests that waited behind an identical in-flight lookup.
    pub coalesced_waits: u64,
}

impl MetricsSnapshot {
    /// Fraction of requests served without a provider call, or `None` when
    /// nothing has been recorded yet.
    pub fn offload_ratio(&self) -> Option<f64> {
        let total = self.store_hits + self.cache_hits + self.provider_calls;
        if total == 0 {
            return None;
        }
        Some((self.store_hits + self.cache_hits) as f64 / total as f64)
    }
}
