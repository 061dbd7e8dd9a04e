use std::cmp::Ordering;

/// `2^63`, the first `f64` above every `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Converts an `i64` to the nearest `f64`.
///
/// Integers above `2^53` in magnitude are rounded, the same way true division
/// promotes its operands.
///
/// ## Example
/// ```
/// use sabdastra::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-12), -12.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Compares an integer with a real exactly, without rounding the integer.
///
/// Returns `None` if `real` is NaN.
///
/// ## Example
/// ```
/// use std::cmp::Ordering;
///
/// use sabdastra::util::num::cmp_i64_f64;
///
/// assert_eq!(cmp_i64_f64(2, 2.0), Some(Ordering::Equal));
/// assert_eq!(cmp_i64_f64(-1, -1.5), Some(Ordering::Greater));
///
/// // 2^53 + 1 rounds to 2^53 as a real, but is still larger.
/// assert_eq!(cmp_i64_f64(9_007_199_254_740_993, 9_007_199_254_740_992.0),
///            Some(Ordering::Greater));
/// ```
#[must_use]
pub fn cmp_i64_f64(int: i64, real: f64) -> Option<Ordering> {
    if real.is_nan() {
        return None;
    }
    if real >= I64_BOUND {
        return Some(Ordering::Less);
    }
    if real < -I64_BOUND {
        return Some(Ordering::Greater);
    }

    let whole = real.trunc();
    // In range, so the cast is exact.
    #[allow(clippy::cast_possible_truncation)]
    let truncated = whole as i64;

    match int.cmp(&truncated) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(real - whole)),
        unequal => Some(unequal),
    }
}
