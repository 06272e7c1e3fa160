//! Persisted point-of-interest entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::provider::Place;

/// A durably stored tennis court.
///
/// Identity is assigned by the store on insert (surrogate key); `id` is
/// `None` until the row is persisted. No natural key is enforced, so repeated
/// provider calls can produce duplicate rows at the same coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Poi {
    /// Surrogate key, assigned by the store.
    pub id: Option<i64>,

    /// Display name.
    pub name: String,

    /// Short-form address.
    pub address: String,

    /// Latitude in degrees.
    pub latitude: f64,

    /// Longitude in degrees.
    pub longitude: f64,

    /// When the row was (re)written, stamped by the store at insert time.
    pub last_updated: DateTime<Utc>,
}

impl Poi {
    /// Create an unpersisted POI.
    ///
    /// `last_updated` is provisional; the store stamps the definitive value
    /// at insert time.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            address: address.into(),
            latitude,
            longitude,
            last_updated: Utc::now(),
        }
    }
}

impl From<&Place> for Poi {
    fn from(place: &Place) -> Self {
        Self::new(
            place.name.clone(),
            place.vicinity.clone(),
            place.geometry.location.lat,
            place.geometry.location.lng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{Geometry, LatLng};

    #[test]
    fn test_new_poi_has_no_id() {
        let poi = Poi::new("Stanley Park Courts", "Stanley Park Dr", 49.30, -123.14);

        assert!(poi.id.is_none());
        assert_eq!(poi.name, "Stanley Park Courts");
        assert_eq!(poi.address, "Stanley Park Dr");
    }

    #[test]
    fn test_from_place() {
        let place = Place {
            name: "Kits Beach Courts".to_string(),
            vicinity: "Cornwall Ave".to_string(),
            geometry: Geometry {
                location: LatLng { lat: 49.27, lng: -123.15 },
            },
        };

        let poi = Poi::from(&place);
        assert_eq!(poi.name, "Kits Beach Courts");
        assert_eq!(poi.address, "Cornwall Ave");
        assert!((poi.latitude - 49.27).abs() < 1e-9);
        assert!((poi.longitude - (-123.15)).abs() < 1e-9);
        assert!(poi.id.is_none());
    }
}
