//! Coordinate bucketing module
//!
//! Maps geographic coordinates (latitude/longitude) onto a fixed-size
//! rectangular grid and formats stable textual keys for grid cells. The grid
//! is used to coarsen cache keys so that nearby queries share a cache entry.

mod types;

pub use types::{BucketCoord, CoordError, MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};

/// Default grid cell size in degrees (roughly 10 km per side).
pub const DEFAULT_BUCKET_SIZE: f64 = 0.1;

/// Prefix for bucket cache keys.
const KEY_PREFIX: &str = "TennisCourts";

/// Validates that a geographic point is finite and within range.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees (-90.0 to 90.0)
/// * `lng` - Longitude in degrees (-180.0 to 180.0)
#[inline]
pub fn validate(lat: f64, lng: f64) -> Result<(), CoordError> {
    if !lat.is_finite() || !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(CoordError::InvalidLatitude(lat));
    }
    if !lng.is_finite() || !(MIN_LNG..=MAX_LNG).contains(&lng) {
        return Err(CoordError::InvalidLongitude(lng));
    }
    Ok(())
}

/// Maps geographic points onto a fixed-size grid and formats cell keys.
///
/// Bucketing floors each axis independently: `floor(value / size) * size`.
/// The keyer derives a fixed decimal precision from the cell size at
/// construction so that keys are byte-stable across runs and platforms,
/// independent of locale or shortest-roundtrip float formatting.
///
/// # Example
///
/// ```
/// use courtside::coord::BucketKeyer;
///
/// let keyer = BucketKeyer::new(0.1);
/// let bucket = keyer.bucket(49.2827, -123.1207);
/// assert_eq!(keyer.key(&bucket), "TennisCourts-49.2--123.2");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BucketKeyer {
    /// Grid cell size in degrees.
    size: f64,
    /// Decimal places used when formatting cell coordinates into keys.
    decimals: usize,
}

impl BucketKeyer {
    /// Creates a keyer for the given cell size.
    ///
    /// The size must be positive; it is supplied by
    /// [`LookupConfig`](crate::lookup::LookupConfig) which defaults it to
    /// [`DEFAULT_BUCKET_SIZE`].
    pub fn new(size: f64) -> Self {
        debug_assert!(size > 0.0, "bucket size must be positive");
        Self {
            size,
            decimals: decimals_for(size),
        }
    }

    /// Floors a point onto the grid.
    ///
    /// Pure and deterministic; the same point always maps to the same cell,
    /// and any two points within a cell map to equal `BucketCoord`s.
    #[inline]
    pub fn bucket(&self, lat: f64, lng: f64) -> BucketCoord {
        BucketCoord {
            lat: (lat / self.size).floor() * self.size,
            lng: (lng / self.size).floor() * self.size,
        }
    }

    /// Formats a cell into its cache key.
    ///
    /// Format: `TennisCourts-{lat}-{lng}` with both values printed at the
    /// fixed precision derived from the cell size.
    /// Example: `TennisCourts-49.2--123.2`
    pub fn key(&self, bucket: &BucketCoord) -> String {
        format!(
            "{}-{:.prec$}-{:.prec$}",
            KEY_PREFIX,
            bucket.lat,
            bucket.lng,
            prec = self.decimals
        )
    }

    /// The configured grid cell size in degrees.
    pub fn size(&self) -> f64 {
        self.size
    }
}

impl Default for BucketKeyer {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET_SIZE)
    }
}

/// Number of decimal places needed to print grid corners exactly.
///
/// A 0.1-degree grid needs one place, a 0.05-degree grid two. Capped at six
/// places; finer grids than that are outside the useful range of the scheme.
fn decimals_for(size: f64) -> usize {
    let mut decimals = 0;
    let mut scaled = size;
    while scaled < 0.999_999_9 && decimals < 6 {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}
