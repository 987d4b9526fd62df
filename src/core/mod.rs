pub mod alphabet;
pub mod bisect;
pub mod constants;
pub mod interleave;
pub mod precision;

pub use alphabet::{symbol_to_value, value_to_symbol};
pub use bisect::{narrow, widen};
pub use constants::{BASE32_ALPHABET, BITS_PER_SYMBOL, DEFAULT_HASH_LENGTH, LAT_RANGE, LNG_RANGE};
pub use interleave::{bits_to_hash, hash_to_bits, merge, split};
pub use precision::{format_value, fraction_digits};
