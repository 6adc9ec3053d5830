/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;
/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Parameters
/// - `value`: The integer to convert.
///
/// ## Returns
/// - `Some(f64)`: The converted value if it is safe.
/// - `None`: If the value exceeds `MAX_SAFE_U64_INT` in absolute value.
///
/// ## Example
/// ```
/// use admatch::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// // Works for safe values
/// assert_eq!(i64_to_f64_checked(42), Some(42.0));
///
/// // Fails for values outside the safe range
/// assert_eq!(i64_to_f64_checked(MAX_SAFE_I64_INT + 1), None);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64_checked(value: i64) -> Option<f64> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return None;
    }
    Some(value as f64)
}

/// Safely converts an `f64` to `i64` if and only if it is finite, integral,
/// and within the exactly-representable range.
///
/// ## Parameters
/// - `value`: The real number to convert.
///
/// ## Returns
/// - `Some(i64)`: The integer value if conversion is lossless.
/// - `None`: If the value is non-finite, fractional, or too large.
///
/// ## Example
/// ```
/// use admatch::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(10.0), Some(10));
/// assert_eq!(f64_to_i64_checked(1.25), None);
/// assert_eq!(f64_to_i64_checked(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_checked(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_SAFE_I64_INT as f64 {
        return None;
    }
    Some(value as i64)
}
