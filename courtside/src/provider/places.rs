//! Google Places nearby-search provider.
//!
//! Issues authenticated nearby-search requests against the Google Maps
//! Platform Places API and deserializes the JSON payload. Requires users to
//! have their own Google Cloud Platform account and an API key with the
//! Places API enabled.
//!
//! # API Endpoint
//!
//! `https://maps.googleapis.com/maps/api/place/nearbysearch/json?location={lat},{lng}&radius={r}&keyword=tennis_court&key={API_KEY}`
//!
//! The search radius is fixed per provider instance and the category keyword
//! is fixed at `tennis_court`.

use tracing::debug;

use super::http::HttpClient;
use super::types::{BoxFuture, NearbySearch, PlacesResponse, ProviderError, SearchOutcome};

/// Base URL for the nearby-search endpoint.
const NEARBY_SEARCH_URL: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

/// Category keyword sent with every search.
const SEARCH_KEYWORD: &str = "tennis_court";

/// Google Places nearby-search provider.
///
/// Requires a valid Google Maps Platform API key. The key is embedded in the
/// request URL, so the full URL must never be logged.
///
/// # Example
///
/// ```no_run
/// use courtside::provider::{PlacesProvider, ReqwestClient};
///
/// let client = ReqwestClient::new().unwrap();
/// let provider = PlacesProvider::new(client, "YOUR_API_KEY".to_string(), 5000);
/// // Hand provider to LookupOrchestrator...
/// ```
pub struct PlacesProvider<C: HttpClient> {
    http_client: C,
    api_key: String,
    radius: u32,
}

impl<C: HttpClient> PlacesProvider<C> {
    /// Creates a new provider with the given API key and search radius.
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client for making requests
    /// * `api_key` - Valid Google Maps Platform API key
    /// * `radius` - Search radius in the provider's distance units
    pub fn new(http_client: C, api_key: String, radius: u32) -> Self {
        Self {
            http_client,
            api_key,
            radius,
        }
    }

    /// Builds the nearby-search URL for the given point.
    fn build_url(&self, lat: f64, lng: f64) -> String {
        format!(
            "{}?location={},{}&radius={}&keyword={}&key={}",
            NEARBY_SEARCH_URL, lat, lng, self.radius, SEARCH_KEYWORD, self.api_key
        )
    }
}

impl<C: HttpClient> NearbySearch for PlacesProvider<C> {
    fn search(&self, lat: f64, lng: f64) -> BoxFuture<'_, Result<SearchOutcome, ProviderError>> {
        Box::pin(async move {
            let url = self.build_url(lat, lng);
            debug!(lat, lng, radius = self.radius, "Issuing nearby search");

            let raw = self.http_client.get(&url).await?;
            let response: PlacesResponse = serde_json::from_slice(&raw)
                .map_err(|e| ProviderError::Payload(e.to_string()))?;

            debug!(results = response.results.len(), "Nearby search succeeded");
            Ok(SearchOutcome { response, raw })
        })
    }

    fn name(&self) -> &str {
        "Google Places"
    }
}
