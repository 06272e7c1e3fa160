//! Canonical search response shape.
//!
//! Every tier of the pipeline normalizes to this one shape before returning.
//! The field layout mirrors the provider's wire format (`results`,
//! `vicinity`, `geometry.location`) so existing map front ends keep working,
//! but provider-specific extra fields are not echoed to clients.

use serde::{Deserialize, Serialize};

use crate::provider::{Geometry, LatLng, Place, PlacesResponse};
use crate::store::Poi;

/// A single result item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Display name.
    pub name: String,

    /// Short-form address.
    pub vicinity: String,

    /// Location wrapper, provider-shaped.
    pub geometry: Geometry,
}

/// The canonical response returned by every tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

impl SearchResponse {
    /// Normalize persisted rows into the canonical shape.
    pub fn from_pois(pois: &[Poi]) -> Self {
        Self {
            results: pois.iter().map(SearchResult::from).collect(),
        }
    }
}

impl From<&Poi> for SearchResult {
    fn from(poi: &Poi) -> Self {
        Self {
            name: poi.name.clone(),
            vicinity: poi.address.clone(),
            geometry: Geometry {
                location: LatLng {
                    lat: poi.latitude,
                    lng: poi.longitude,
                },
            },
        }
    }
}

impl From<Place> for SearchResult {
    fn from(place: Place) -> Self {
        Self {
            name: place.name,
            vicinity: place.vicinity,
            geometry: place.geometry,
        }
    }
}

impl From<PlacesResponse> for SearchResponse {
    fn from(response: PlacesResponse) -> Self {
        Self {
            results: response.results.into_iter().map(SearchResult::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pois() {
        let pois = vec![Poi::new("Stanley Park Courts", "Stanley Park Dr", 49.30, -123.14)];

        let response = SearchResponse::from_pois(&pois);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].name, "Stanley Park Courts");
        assert_eq!(response.results[0].vicinity, "Stanley Park Dr");
        assert!((response.results[0].geometry.location.lat - 49.30).abs() < 1e-9);
    }

    #[test]
    fn test_from_places_response() {
        let body = r#"{
            "results": [
                {
                    "name": "A",
                    "vicinity": "addr",
                    "geometry": { "location": { "lat": 1.0, "lng": 2.0 } }
                }
            ]
        }"#;
        let parsed: PlacesResponse = serde_json::from_str(body).unwrap();

        let response: SearchResponse = parsed.into();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].vicinity, "addr");
    }

    #[test]
    fn test_serialized_shape_matches_wire_format() {
        let response = SearchResponse::from_pois(&[Poi::new("A", "addr", 1.5, 2.5)]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["results"][0]["name"], "A");
        assert_eq!(json["results"][0]["vicinity"], "addr");
        assert_eq!(json["results"][0]["geometry"]["location"]["lat"], 1.5);
        assert_eq!(json["results"][0]["geometry"]["location"]["lng"], 2.5);
    }

    #[test]
    fn test_empty_results_serialize() {
        let response = SearchResponse { results: vec![] };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"results":[]}"#);
    }
}
