use crate::core::constants::BASE32_ALPHABET;
use crate::util::error::GeohashError;

/// Converts a geohash symbol to its 5-bit value (0-31).
///
/// Returns `GeohashError::InvalidSymbol` for any character outside the
/// alphabet, including the deliberately excluded a, i, l, o.
pub fn symbol_to_value(c: char) -> Result<u8, GeohashError> {
    BASE32_ALPHABET
        .iter()
        .position(|&s| s == c)
        .map(|i| i as u8)
        .ok_or(GeohashError::InvalidSymbol(c))
}

/// Converts a 5-bit value (0-31) back to its geohash symbol.
///
/// Values above 31 cannot arise from 5-bit grouping; debug builds assert.
pub fn value_to_symbol(v: u8) -> char {
    debug_assert!(v < 32, "value out of 5-bit range: {}", v);
    BASE32_ALPHABET[v as usize]
}
