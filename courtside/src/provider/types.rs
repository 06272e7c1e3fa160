//! Provider traits, errors, and payload models.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boxed future type for dyn-compatible async methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Errors that can occur when calling the external search provider.
///
/// All variants are fatal to the current request; no retries are attempted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// Transport-level failure (connection, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The provider answered with a non-success status code.
    #[error("provider returned HTTP {status}")]
    Status { status: u16 },

    /// The response body could not be parsed.
    #[error("malformed provider payload: {0}")]
    Payload(String),
}

/// A geographic point as the provider serializes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Geometry wrapper around a place's location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

/// A single place in the provider's nearby-search payload.
///
/// Field names match the provider's wire format; unknown provider fields are
/// ignored on deserialization but survive in the raw cached bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,

    /// The provider's short-form address.
    #[serde(default)]
    pub vicinity: String,

    pub geometry: Geometry,
}

/// The provider's nearby-search response payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacesResponse {
    #[serde(default)]
    pub results: Vec<Place>,
}

/// A successful provider search: the parsed payload plus the raw bytes it
/// was parsed from. The raw bytes are what the cache stores.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Parsed payload.
    pub response: PlacesResponse,

    /// The response body exactly as received.
    pub raw: Vec<u8>,
}

/// Seam between the lookup pipeline and a concrete search provider.
///
/// Dyn-compatible so the orchestrator can hold `Arc<dyn NearbySearch>` and
/// tests can substitute call-counting doubles.
pub trait NearbySearch: Send + Sync {
    /// Search for places near the given point.
    fn search(&self, lat: f64, lng: f64) -> BoxFuture<'_, Result<SearchOutcome, ProviderError>>;

    /// Human-readable provider name for logging.
    fn name(&self) -> &str;
}
