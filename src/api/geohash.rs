use crate::core::bisect::{narrow, widen};
use crate::core::constants::{BITS_PER_SYMBOL, DEFAULT_HASH_LENGTH, LAT_RANGE, LNG_RANGE};
use crate::core::interleave::{bits_to_hash, hash_to_bits, merge, split};
use crate::core::precision::{format_value, fraction_digits};
use crate::util::error::GeohashError;
use geo_types::Point;
use serde::{Deserialize, Serialize};

/// A decoded geohash: per-axis interval midpoints and half-widths.
///
/// The coordinate originally encoded lies within
/// `[latitude - lat_error, latitude + lat_error]` and
/// `[longitude - lng_error, longitude + lng_error]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodedCoordinate {
    /// Latitude interval midpoint in degrees
    pub latitude: f64,
    /// Longitude interval midpoint in degrees
    pub longitude: f64,
    /// Half-width of the final latitude interval
    pub lat_error: f64,
    /// Half-width of the final longitude interval
    pub lng_error: f64,
}

impl DecodedCoordinate {
    /// Returns the midpoint as a `geo_types::Point` (x = longitude, y = latitude).
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Formats both axes as decimal strings, rounded to the fewest digits
    /// that keep the displayed values inside their error bounds.
    ///
    /// A single digit count derived from the longitude error serves both
    /// axes: longitude always receives the first bit of every 5-bit group,
    /// so its error is the latitude error or exactly double it.
    ///
    /// Returns `(latitude, longitude)`.
    pub fn display_strings(&self) -> (String, String) {
        let digits = fraction_digits(self.lng_error);
        (
            format_value(self.latitude, digits),
            format_value(self.longitude, digits),
        )
    }
}

/// Encodes a coordinate into a geohash of exactly `length` symbols.
///
/// Longitude is narrowed over ⌈5·length/2⌉ bits and latitude over
/// ⌊5·length/2⌋; the two bit streams are interleaved longitude-first and
/// packed through the base-32 alphabet.
///
/// # Example
/// ```
/// use geohash_rs::encode;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// assert_eq!(encode(42.6, -5.6, 5)?, "ezs42");
/// # Ok(())
/// # }
/// ```
pub fn encode(latitude: f64, longitude: f64, length: usize) -> Result<String, GeohashError> {
    if !(LAT_RANGE.0..=LAT_RANGE.1).contains(&latitude) {
        return Err(GeohashError::LatitudeOutOfRange(latitude));
    }
    if !(LNG_RANGE.0..=LNG_RANGE.1).contains(&longitude) {
        return Err(GeohashError::LongitudeOutOfRange(longitude));
    }

    let bit_count = length * BITS_PER_SYMBOL;
    let lng_bits = widen(longitude, LNG_RANGE.0, LNG_RANGE.1, bit_count.div_ceil(2));
    let lat_bits = widen(latitude, LAT_RANGE.0, LAT_RANGE.1, bit_count / 2);

    Ok(bits_to_hash(&merge(&lng_bits, &lat_bits)))
}

/// Encodes a coordinate at the default length of 12 symbols.
pub fn encode_default(latitude: f64, longitude: f64) -> Result<String, GeohashError> {
    encode(latitude, longitude, DEFAULT_HASH_LENGTH)
}

/// Decodes a geohash into raw midpoints and error bounds, no formatting.
///
/// # Example
/// ```
/// use geohash_rs::decode_with_error;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let decoded = decode_with_error("ezs42")?;
/// assert!((decoded.latitude - 42.605).abs() < decoded.lat_error);
/// assert_eq!(decoded.lng_error, 180.0 / 2_f64.powi(13));
/// # Ok(())
/// # }
/// ```
pub fn decode_with_error(geohash: &str) -> Result<DecodedCoordinate, GeohashError> {
    let bits = hash_to_bits(geohash)?;
    let (lng_bits, lat_bits) = split(&bits);

    let (latitude, lat_error) = narrow(lat_bits, LAT_RANGE.0, LAT_RANGE.1);
    let (longitude, lng_error) = narrow(lng_bits, LNG_RANGE.0, LNG_RANGE.1);

    Ok(DecodedCoordinate {
        latitude,
        longitude,
        lat_error,
        lng_error,
    })
}

/// Decodes a geohash into `(latitude, longitude)` decimal strings, rounded
/// per the error bound. May carry trailing zeros.
///
/// # Example
/// ```
/// use geohash_rs::decode;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// assert_eq!(decode("ezs42")?, ("42.60".to_string(), "-5.60".to_string()));
/// # Ok(())
/// # }
/// ```
pub fn decode(geohash: &str) -> Result<(String, String), GeohashError> {
    Ok(decode_with_error(geohash)?.display_strings())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_reference_hash() -> Result<(), GeohashError> {
        assert_eq!(encode(42.6, -5.6, 5)?, "ezs42");
        Ok(())
    }

    #[test]
    fn test_encode_produces_requested_length() -> Result<(), GeohashError> {
        for length in 0..=20 {
            assert_eq!(encode(42.6, -5.6, length)?.len(), length);
        }
        Ok(())
    }

    #[test]
    fn test_encode_rejects_out_of_range() {
        assert_eq!(
            encode(90.1, 0.0, 5),
            Err(GeohashError::LatitudeOutOfRange(90.1))
        );
        assert_eq!(
            encode(-90.1, 0.0, 5),
            Err(GeohashError::LatitudeOutOfRange(-90.1))
        );
        assert_eq!(
            encode(0.0, 180.5, 5),
            Err(GeohashError::LongitudeOutOfRange(180.5))
        );
        assert_eq!(
            encode(0.0, -180.5, 5),
            Err(GeohashError::LongitudeOutOfRange(-180.5))
        );
    }

    #[test]
    fn test_encode_accepts_boundary_coordinates() -> Result<(), GeohashError> {
        for &(lat, lng) in &[(90.0, 180.0), (-90.0, -180.0), (90.0, -180.0), (0.0, 0.0)] {
            assert_eq!(encode(lat, lng, 6)?.len(), 6);
        }
        Ok(())
    }

    #[test]
    fn test_decode_reference_hash() -> Result<(), GeohashError> {
        assert_eq!(decode("ezs42")?, ("42.60".to_string(), "-5.60".to_string()));
        Ok(())
    }

    #[test]
    fn test_decode_empty_hash_is_world_midpoint() -> Result<(), GeohashError> {
        let decoded = decode_with_error("")?;
        assert_eq!(decoded.latitude, 0.0);
        assert_eq!(decoded.longitude, 0.0);
        assert_eq!(decoded.lat_error, 90.0);
        assert_eq!(decoded.lng_error, 180.0);

        assert_eq!(decode("")?, ("0".to_string(), "0".to_string()));
        Ok(())
    }

    #[test]
    fn test_decode_with_error_reference_values() -> Result<(), GeohashError> {
        // "ezs42" is 25 bits: 13 longitude, 12 latitude
        let decoded = decode_with_error("ezs42")?;
        assert_eq!(decoded.lng_error, 180.0 / 2_f64.powi(13));
        assert_eq!(decoded.lat_error, 90.0 / 2_f64.powi(12));
        assert!((decoded.latitude - 42.60498046875).abs() < 1e-12);
        assert!((decoded.longitude - -5.60302734375).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_decode_rejects_excluded_letters() {
        for hash in ["a", "ezsa2", "oil", "31ezs42l"] {
            assert!(matches!(
                decode(hash),
                Err(GeohashError::InvalidSymbol(_))
            ));
        }
    }

    #[test]
    fn test_single_symbol_bit_split() -> Result<(), GeohashError> {
        // one symbol is 5 bits: longitude 3, latitude 2
        let hash = encode(90.0, 180.0, 1)?;
        let decoded = decode_with_error(&hash)?;
        assert_eq!(decoded.lng_error, 180.0 / 2_f64.powi(3));
        assert_eq!(decoded.lat_error, 90.0 / 2_f64.powi(2));
        assert!((decoded.latitude - 90.0).abs() <= decoded.lat_error);
        assert!((decoded.longitude - 180.0).abs() <= decoded.lng_error);
        Ok(())
    }

    #[test]
    fn test_round_trip_within_error_bounds() -> Result<(), GeohashError> {
        let coordinates = [
            (42.6, -5.6),
            (53.48082746395233, -2.2479699500757597),
            (-33.8688, 151.2093),
            (0.0, 0.0),
            (89.999, -179.999),
            (-90.0, 180.0),
        ];

        for &(lat, lng) in &coordinates {
            for length in 1..=12 {
                let hash = encode(lat, lng, length)?;
                let decoded = decode_with_error(&hash)?;
                assert!(
                    (decoded.latitude - lat).abs() <= decoded.lat_error,
                    "hash={} lat={} decoded={}",
                    hash,
                    lat,
                    decoded.latitude
                );
                assert!(
                    (decoded.longitude - lng).abs() <= decoded.lng_error,
                    "hash={} lng={} decoded={}",
                    hash,
                    lng,
                    decoded.longitude
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_error_shrinks_with_length() -> Result<(), GeohashError> {
        let mut previous = decode_with_error(&encode(42.6, -5.6, 1)?)?;
        for length in 2..=12 {
            let decoded = decode_with_error(&encode(42.6, -5.6, length)?)?;
            assert!(decoded.lat_error <= previous.lat_error);
            assert!(decoded.lng_error <= previous.lng_error);
            // each extra symbol halves one axis at least once
            assert!(
                decoded.lat_error < previous.lat_error || decoded.lng_error < previous.lng_error
            );
            previous = decoded;
        }
        Ok(())
    }

    #[test]
    fn test_longer_hash_shares_prefix() -> Result<(), GeohashError> {
        let short = encode(48.8566, 2.3522, 6)?;
        let long = encode(48.8566, 2.3522, 12)?;
        assert!(long.starts_with(&short));
        Ok(())
    }

    #[test]
    fn test_display_bound_law() -> Result<(), GeohashError> {
        for length in 1..=10 {
            let hash = encode(42.6, -5.6, length)?;
            let decoded = decode_with_error(&hash)?;
            let (lat_str, lng_str) = decode(&hash)?;

            let lat_displayed: f64 = lat_str.parse().unwrap();
            let lng_displayed: f64 = lng_str.parse().unwrap();
            assert!((lat_displayed - decoded.latitude).abs() <= decoded.lat_error);
            assert!((lng_displayed - decoded.longitude).abs() <= decoded.lng_error);
        }
        Ok(())
    }

    #[test]
    fn test_decoded_coordinate_to_point() -> Result<(), GeohashError> {
        let decoded = decode_with_error("ezs42")?;
        let point = decoded.to_point();
        assert_eq!(point.x(), decoded.longitude);
        assert_eq!(point.y(), decoded.latitude);
        Ok(())
    }
}
