//! External search provider abstraction
//!
//! This module provides the seam between the lookup pipeline and the
//! third-party geolocation search API: a dyn-compatible [`NearbySearch`]
//! trait, the Google Places implementation, and an injectable HTTP client
//! for testability.

mod http;
mod places;
mod types;

pub use http::{HttpClient, ReqwestClient};
pub use places::PlacesProvider;
pub use types::{
    BoxFuture, Geometry, LatLng, NearbySearch, Place, PlacesResponse, ProviderError, SearchOutcome,
};

#[cfg(test)]
pub use http::tests::MockHttpClient;
