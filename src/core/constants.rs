/// The 32-symbol geohash alphabet: digits 0-9 and lowercase b-z,
/// excluding a, i, l, o to avoid visual ambiguity.
pub const BASE32_ALPHABET: [char; 32] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'j', 'k',
    'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Bits contributed by each geohash symbol
pub const BITS_PER_SYMBOL: usize = 5;

/// Latitude interval (lo, hi) before any narrowing
pub const LAT_RANGE: (f64, f64) = (-90.0, 90.0);

/// Longitude interval (lo, hi) before any narrowing
pub const LNG_RANGE: (f64, f64) = (-180.0, 180.0);

/// Default geohash length when the caller has no precision requirement.
///
/// Twelve symbols (60 bits) narrow longitude past double-precision
/// floating resolution; longer hashes add no usable accuracy.
pub const DEFAULT_HASH_LENGTH: usize = 12;
