/// Returns the minimum number of fractional digits such that rounding a
/// value to that many digits cannot move it outside `[value - error,
/// value + error]`.
///
/// The rounding grid spacing `10^-digits` must not exceed the full interval
/// width `2 * error`, which gives `max(0, floor(-log10(2 * error)) + 1)`.
///
/// `error <= 0` is a caller contract violation: every non-empty geohash has
/// a strictly positive error, and the empty hash has the full half-range.
pub fn fraction_digits(error: f64) -> usize {
    debug_assert!(error > 0.0, "error bound must be strictly positive");
    if error <= 0.0 {
        return 0;
    }

    let digits = (-(2.0 * error).log10()).floor() as i32 + 1;
    digits.max(0) as usize
}

/// Formats a coordinate with a fixed number of fractional digits.
/// Trailing zeros are kept; they carry the precision information.
pub fn format_value(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_for_typical_errors() {
        // lng error of "ezs42": 180 / 2^13
        assert_eq!(fraction_digits(0.02197265625), 2);
        // lng error of a 1-symbol hash: 180 / 2^3
        assert_eq!(fraction_digits(22.5), 0);
        // empty hash: full longitude half-range
        assert_eq!(fraction_digits(90.0), 0);
        // errors already below the grid spacing of a whole degree
        assert_eq!(fraction_digits(0.4), 1);
        assert_eq!(fraction_digits(0.004), 3);
    }

    #[test]
    fn test_digits_never_negative() {
        for error in [0.6, 1.0, 45.0, 90.0, 180.0] {
            assert_eq!(fraction_digits(error), 0);
        }
    }

    #[test]
    fn test_rounding_stays_within_error_bound() {
        for k in 1..=30 {
            let error = 180.0 / 2_f64.powi(k);
            let digits = fraction_digits(error);
            for &value in &[42.60498046875, -5.60302734375, 0.3, -179.99] {
                let displayed: f64 = format_value(value, digits).parse().unwrap();
                assert!(
                    (displayed - value).abs() <= error,
                    "k={} digits={} value={} displayed={}",
                    k,
                    digits,
                    value,
                    displayed
                );
            }
        }
    }

    #[test]
    fn test_format_keeps_trailing_zeros() {
        assert_eq!(format_value(42.6, 2), "42.60");
        assert_eq!(format_value(0.0, 0), "0");
        assert_eq!(format_value(-5.6, 3), "-5.600");
    }
}
