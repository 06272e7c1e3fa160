//! Persistent store seam.

use async_trait::async_trait;
use thiserror::Error;

use super::poi::Poi;

/// Errors from the persistent store.
///
/// Store failures are fatal to the current request: they are propagated to
/// the caller, never retried and never degraded.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database unreachable or query failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Durable table of previously discovered points of interest.
///
/// Implementations must be `Send + Sync`; the orchestrator holds the store
/// as `Arc<dyn PoiStore>`.
#[async_trait]
pub trait PoiStore: Send + Sync {
    /// Returns all POIs whose latitude AND longitude are each within
    /// `tolerance` degrees of the query point.
    ///
    /// This is an axis-aligned bounding-box filter, not radial distance:
    /// two points just inside opposite box corners can be further apart than
    /// points just outside the box.
    async fn find_near(&self, lat: f64, lng: f64, tolerance: f64)
        -> Result<Vec<Poi>, StoreError>;

    /// Appends rows, assigning surrogate ids and stamping `last_updated` at
    /// insert time. Never deduplicates against existing rows.
    async fn insert_all(&self, pois: &[Poi]) -> Result<(), StoreError>;
}
