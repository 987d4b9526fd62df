/// Narrows an interval by one binary-search step per bit.
///
/// Bit 1 keeps the upper half, bit 0 the lower half. Returns the final
/// interval's midpoint and half-width; with no bits that is simply the
/// midpoint and half-width of `(lo, hi)` itself.
pub fn narrow(bits: impl IntoIterator<Item = bool>, lo: f64, hi: f64) -> (f64, f64) {
    let (mut lo, mut hi) = (lo, hi);

    for bit in bits {
        let mid = (lo + hi) / 2.0;
        if bit {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    ((lo + hi) / 2.0, (hi - lo) / 2.0)
}

/// Runs the bisection in the encode direction: emits the bit sequence that
/// `narrow` would consume to recover an interval containing `val`.
///
/// `val > mid` emits 1 and keeps the upper half; otherwise 0 and the lower
/// half, so an exact tie with the midpoint resolves downward.
pub fn widen(val: f64, lo: f64, hi: f64, bit_count: usize) -> Vec<bool> {
    let (mut lo, mut hi) = (lo, hi);
    let mut bits = Vec::with_capacity(bit_count);

    while bits.len() < bit_count {
        let mid = (lo + hi) / 2.0;
        if val > mid {
            bits.push(true);
            lo = mid;
        } else {
            bits.push(false);
            hi = mid;
        }
    }

    bits
}
