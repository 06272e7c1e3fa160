//! The tiered lookup orchestrator.
//!
//! Sequences the three tiers for each request, strictly ordered, first hit
//! wins:
//!
//! ```text
//! Request ──► ┌─────────────┐
//!             │ Store Query │──► ≥1 row ──► Normalize, return
//!             └──────┬──────┘
//!                    │ Miss
//!                    ▼
//!             ┌─────────────┐    (miss path runs under a per-bucket
//!             │ SingleFlight│     lock; waiters re-check the cache)
//!             └──────┬──────┘
//!                    ▼
//!             ┌─────────────┐
//!             │ Bucket Cache│──► Live entry ──► Normalize, return
//!             └──────┬──────┘
//!                    │ Miss
//!                    ▼
//!             ┌─────────────┐
//!             │   Provider  │──► Persist rows, cache raw bytes, return
//!             └─────────────┘
//! ```
//!
//! The store is checked first because it is the cheapest, most authoritative
//! tier and avoids consuming provider quota; the cache second because it
//! avoids the provider for recently searched buckets; the provider last
//! because it is the slowest and rate-limited resource. The tolerance window
//! of the store query and the cache bucket differ, so the two tiers are not
//! interchangeable.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::{BucketCacheClient, Cache};
use crate::coord::{self, BucketKeyer};
use crate::provider::{NearbySearch, PlacesResponse};
use crate::store::{Poi, PoiStore};
use crate::telemetry::{LookupMetrics, MetricsSnapshot};

use super::config::LookupConfig;
use super::error::LookupError;
use super::flight::SingleFlight;
use super::response::SearchResponse;

/// Coordinates the store, cache, and provider tiers for nearby lookups.
///
/// Construct once and share behind an `Arc`; all methods take `&self`.
pub struct LookupOrchestrator {
    /// Durable POI table, tier 1.
    store: Arc<dyn PoiStore>,

    /// Bucketed response cache, tier 2.
    cache: BucketCacheClient,

    /// External search API, tier 3.
    provider: Arc<dyn NearbySearch>,

    /// Maps query points to cache buckets.
    keyer: BucketKeyer,

    /// Per-bucket guard for the miss path.
    flight: SingleFlight,

    /// Optional tier-outcome counters.
    metrics: Option<Arc<LookupMetrics>>,

    /// Injected configuration.
    config: LookupConfig,
}

impl LookupOrchestrator {
    /// Create an orchestrator without metrics.
    pub fn new(
        config: LookupConfig,
        store: Arc<dyn PoiStore>,
        cache: Arc<dyn Cache>,
        provider: Arc<dyn NearbySearch>,
    ) -> Self {
        Self::build(config, store, cache, provider, None)
    }

    /// Create an orchestrator that records tier outcomes.
    pub fn with_metrics(
        config: LookupConfig,
        store: Arc<dyn PoiStore>,
        cache: Arc<dyn Cache>,
        provider: Arc<dyn NearbySearch>,
        metrics: Arc<LookupMetrics>,
    ) -> Self {
        Self::build(config, store, cache, provider, Some(metrics))
    }

    fn build(
        config: LookupConfig,
        store: Arc<dyn PoiStore>,
        cache: Arc<dyn Cache>,
        provider: Arc<dyn NearbySearch>,
        metrics: Option<Arc<LookupMetrics>>,
    ) -> Self {
        let keyer = BucketKeyer::new(config.bucket_size);
        let cache = match metrics {
            Some(ref m) => BucketCacheClient::with_metrics(cache, keyer, Arc::clone(m)),
            None => BucketCacheClient::new(cache, keyer),
        };

        Self {
            store,
            cache,
            provider,
            keyer,
            flight: SingleFlight::new(),
            metrics,
            config,
        }
    }

    /// Find tennis courts near the given point.
    ///
    /// Tiers are consulted in strict priority order; the first tier that
    /// produces data answers the request. On a full miss the provider's
    /// results are persisted to the store and its raw payload cached under
    /// the point's bucket before returning.
    ///
    /// # Errors
    ///
    /// - [`LookupError::InvalidCoordinate`] - point rejected before any tier
    /// - [`LookupError::Store`] - store query or write failed
    /// - [`LookupError::Provider`] - provider call failed; nothing written
    pub async fn find_nearby(&self, lat: f64, lng: f64) -> Result<SearchResponse, LookupError> {
        coord::validate(lat, lng)
            .map_err(|_| LookupError::InvalidCoordinate { lat, lng })?;

        // Tier 1: persistent store.
        let rows = self
            .store
            .find_near(lat, lng, self.config.store_tolerance)
            .await?;
        if !rows.is_empty() {
            if let Some(ref m) = self.metrics {
                m.store_hit();
            }
            debug!(lat, lng, rows = rows.len(), "Store hit");
            return Ok(SearchResponse::from_pois(&rows));
        }

        let bucket = self.keyer.bucket(lat, lng);
        let key = self.keyer.key(&bucket);

        // The miss path runs under the bucket's lock so concurrent identical
        // queries share one provider call and one set of store writes.
        let permit = self.flight.acquire(&key).await;
        if permit.waited() {
            if let Some(ref m) = self.metrics {
                m.coalesced_wait();
            }
        }

        // Tier 2: bucket cache, re-checked after any wait so a queued
        // request is served from the winner's write.
        if let Some(bytes) = self.cache.get(&bucket).await {
            match serde_json::from_slice::<PlacesResponse>(&bytes) {
                Ok(parsed) => {
                    debug!(key = %key, results = parsed.results.len(), "Cache hit");
                    return Ok(parsed.into());
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "Unparseable cache entry, treating as miss");
                }
            }
        }

        // Tier 3: the external provider.
        if let Some(ref m) = self.metrics {
            m.provider_call();
        }
        info!(provider = self.provider.name(), key = %key, "Querying external provider");

        let outcome = match self.provider.search(lat, lng).await {
            Ok(outcome) => outcome,
            Err(e) => {
                if let Some(ref m) = self.metrics {
                    m.provider_failure();
                }
                return Err(e.into());
            }
        };

        // Persist first (fatal on failure), then cache (fail-open).
        let pois: Vec<Poi> = outcome.response.results.iter().map(Poi::from).collect();
        self.store.insert_all(&pois).await?;
        self.cache.set(&bucket, outcome.raw).await;

        debug!(key = %key, results = pois.len(), "Full miss populated store and cache");
        Ok(outcome.response.into())
    }

    /// Point-in-time copy of the tier counters, if metrics are enabled.
    pub fn metrics_snapshot(&self) -> Option<MetricsSnapshot> {
        self.metrics.as_ref().map(|m| m.snapshot())
    }

    /// The injected configuration.
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }
}
