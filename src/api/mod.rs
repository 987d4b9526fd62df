pub mod cell;
pub mod geohash;

pub use cell::GeohashCell;
pub use geohash::{DecodedCoordinate, decode, decode_with_error, encode, encode_default};
