//! Lookup error taxonomy.

use thiserror::Error;

use crate::provider::ProviderError;
use crate::store::StoreError;

/// Errors surfaced by a lookup request.
///
/// Cache failures never appear here: the cache tier fails open and degrades
/// to a miss. An empty result set is a valid success, not an error.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The persistent store failed; internal error.
    #[error("store query failed: {0}")]
    Store(#[from] StoreError),

    /// The external provider failed; no rows or cache entries were written.
    #[error("provider search failed: {0}")]
    Provider(#[from] ProviderError),

    /// The query point is not a valid geographic coordinate.
    #[error("invalid coordinate: lat {lat}, lng {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },
}
