use crate::api::geohash::{decode_with_error, encode};
use crate::core::precision::{format_value, fraction_digits};
use crate::util::coord::Coordinate;
use crate::util::error::GeohashError;
use geo_types::Point;
use serde::{Deserialize, Serialize};

/// A single cell in the geohash spatial encoding.
///
/// Each `GeohashCell` represents one rectangular region on the WGS84
/// ellipsoid, with its base-32 hash, center point, and per-axis error
/// bounds (half the cell extent on each axis).
///
/// # Example
///
/// ```
/// use geohash_rs::GeohashCell;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let cell = GeohashCell::from_wgs84(&(-5.6, 42.6), 5)?;
/// assert_eq!(cell.hash, "ezs42");
/// println!("Center: ({}, {})", cell.longitude(), cell.latitude());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeohashCell {
    /// Base-32 geohash identifying this cell
    pub hash: String,
    /// Cell center (x = longitude, y = latitude), in degrees
    pub center: Point<f64>,
    /// Half the cell's latitude extent
    pub lat_error: f64,
    /// Half the cell's longitude extent
    pub lng_error: f64,
}

impl GeohashCell {
    /// Create a GeohashCell containing a WGS84 (lon/lat) coordinate.
    ///
    /// The cell snaps to its own center, so `center` is the midpoint of the
    /// enclosing region rather than the input point.
    ///
    /// # Example
    /// ```
    /// use geohash_rs::GeohashCell;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// // From tuple
    /// let cell = GeohashCell::from_wgs84(&(-2.248, 53.481), 9)?;
    /// // From Point
    /// let cell = GeohashCell::from_wgs84(&Point::new(-2.248, 53.481), 9)?;
    /// println!("Cell hash: {}", cell.hash);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate, length: usize) -> Result<Self, GeohashError> {
        let hash = encode(coord.y(), coord.x(), length)?;
        Self::from_hash(&hash)
    }

    /// Create a GeohashCell from an existing geohash string.
    ///
    /// # Example
    /// ```
    /// use geohash_rs::GeohashCell;
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// let cell = GeohashCell::from_wgs84(&(-5.6, 42.6), 5)?;
    /// let restored = GeohashCell::from_hash(&cell.hash)?;
    /// assert_eq!(cell, restored);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_hash(hash: &str) -> Result<Self, GeohashError> {
        let decoded = decode_with_error(hash)?;

        Ok(Self {
            hash: hash.to_string(),
            center: decoded.to_point(),
            lat_error: decoded.lat_error,
            lng_error: decoded.lng_error,
        })
    }

    /// Returns the latitude of the cell center in degrees.
    pub fn latitude(&self) -> f64 {
        self.center.y()
    }

    /// Returns the longitude of the cell center in degrees.
    pub fn longitude(&self) -> f64 {
        self.center.x()
    }

    /// Returns the hash length in symbols.
    pub fn len(&self) -> usize {
        self.hash.len()
    }

    /// Returns true for the zero-symbol hash, whose cell is the whole world.
    pub fn is_empty(&self) -> bool {
        self.hash.is_empty()
    }

    /// Returns the cell center as a `geo_types::Point`.
    pub fn to_point(&self) -> Point<f64> {
        self.center
    }

    /// Formats the center as `(latitude, longitude)` decimal strings with
    /// the fewest digits that keep both inside their error bounds.
    pub fn display_strings(&self) -> (String, String) {
        let digits = fraction_digits(self.lng_error);
        (
            format_value(self.latitude(), digits),
            format_value(self.longitude(), digits),
        )
    }
}

impl std::fmt::Display for GeohashCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hash)
    }
}
