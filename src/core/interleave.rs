use crate::core::alphabet::{symbol_to_value, value_to_symbol};
use crate::core::constants::BITS_PER_SYMBOL;
use crate::util::error::GeohashError;

/// Unpacks a geohash string into its full bit sequence, 5 bits per symbol,
/// most significant bit first.
///
/// Fails on the first character outside the alphabet; partial bit sequences
/// are meaningless since bit positions are absolute.
pub fn hash_to_bits(geohash: &str) -> Result<Vec<bool>, GeohashError> {
    let mut bits = Vec::with_capacity(geohash.len() * BITS_PER_SYMBOL);

    for c in geohash.chars() {
        let value = symbol_to_value(c)?;
        for shift in (0..BITS_PER_SYMBOL).rev() {
            bits.push(value >> shift & 1 == 1);
        }
    }

    Ok(bits)
}

/// Packs a bit sequence into geohash symbols, 5 bits per symbol.
///
/// The encode path always merges to a whole number of symbols, so the
/// length is a multiple of 5 by construction.
pub fn bits_to_hash(bits: &[bool]) -> String {
    debug_assert!(bits.len() % BITS_PER_SYMBOL == 0);

    bits.chunks(BITS_PER_SYMBOL)
        .map(|chunk| {
            let value = chunk.iter().fold(0u8, |acc, &b| acc << 1 | b as u8);
            value_to_symbol(value)
        })
        .collect()
}

/// Splits an interleaved bit sequence into its two axis streams.
///
/// Longitude owns the even positions (0, 2, 4, ...), latitude the odd ones.
/// Returns `(longitude_bits, latitude_bits)`.
pub fn split(bits: &[bool]) -> (Vec<bool>, Vec<bool>) {
    let lng_bits = bits.iter().copied().step_by(2).collect();
    let lat_bits = bits.iter().copied().skip(1).step_by(2).collect();
    (lng_bits, lat_bits)
}

/// Interleaves two axis streams back into one sequence, longitude bit first
/// at each position.
///
/// When the latitude stream is one bit shorter (odd total), the final
/// position takes only the longitude bit, so the output length is exactly
/// `lng_bits.len() + lat_bits.len()`.
pub fn merge(lng_bits: &[bool], lat_bits: &[bool]) -> Vec<bool> {
    debug_assert!(
        lng_bits.len() == lat_bits.len() || lng_bits.len() == lat_bits.len() + 1,
        "longitude stream must match or exceed latitude by exactly one bit"
    );

    let mut bits = Vec::with_capacity(lng_bits.len() + lat_bits.len());
    let mut lat_iter = lat_bits.iter();

    for &lng_bit in lng_bits {
        bits.push(lng_bit);
        if let Some(&lat_bit) = lat_iter.next() {
            bits.push(lat_bit);
        }
    }

    bits
}
