//! # geohash-rs
//!
//! A reversible mapping between (latitude, longitude) coordinates and
//! compact base-32 geohash strings, with the per-axis error bounds
//! inherent to finite-length encoding.
//!
//! There are two main entry points.
//!
//! ### 1. `GeohashCell` - Cell Operations
//!
//! ```
//! use geohash_rs::GeohashCell;
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let cell = GeohashCell::from_wgs84(&(-5.6, 42.6), 5)?;
//! println!("{}", cell.hash);
//! println!("center: ({}, {})", cell.latitude(), cell.longitude());
//! println!("error: ({}, {})", cell.lat_error, cell.lng_error);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Free Functions - String In, String Out
//!
//! ```
//! use geohash_rs::{decode, encode};
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let hash = encode(42.6, -5.6, 5)?;
//! assert_eq!(hash, "ezs42");
//!
//! let (lat, lng) = decode(&hash)?;
//! assert_eq!((lat.as_str(), lng.as_str()), ("42.60", "-5.60"));
//! # Ok(())
//! # }
//! ```
//!
//! Decoded strings are rounded to the fewest decimal digits that keep the
//! displayed value within the hash's error bound; `decode_with_error`
//! returns the raw midpoints and half-widths instead.

pub mod api;
pub mod core;
pub mod util;

pub use api::{DecodedCoordinate, GeohashCell, decode, decode_with_error, encode, encode_default};
pub use core::{BASE32_ALPHABET, BITS_PER_SYMBOL, DEFAULT_HASH_LENGTH, LAT_RANGE, LNG_RANGE};
pub use util::{Coordinate, GeohashError};

pub use geo_types;
