//! Scalar helpers shared by the parser and the vector operations
//!
//! Decimal-place rounding, clamping, the "is this a usable number" check and
//! the number formatting used by the `(x, y, z)` representation.

use crate::constants::{DEFAULT_CLAMP_MAX, DEFAULT_CLAMP_MIN};

/// Returns true when `value` can be stored in a valid vector
///
/// NaN and the infinities are rejected.
#[inline]
pub fn is_valid_number(value: f64) -> bool {
    value.is_finite()
}

/// Checks every value with [`is_valid_number`]
pub fn validate_numbers(values: &[f64]) -> bool {
    values.iter().all(|v| is_valid_number(*v))
}

fn decimal_base(places: i32) -> f64 {
    10f64.powi(places)
}

// Above 2^52 every f64 is already an integer, so scaling would only lose
// precision or overflow to infinity.
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0;

fn scaled(value: f64, places: i32, op: fn(f64) -> f64) -> f64 {
    let base = decimal_base(places);
    let shifted = value * base;
    if !shifted.is_finite() || value.abs() >= EXACT_INTEGER_LIMIT / base {
        return value + 0.0;
    }
    op(shifted) / base + 0.0
}

/// Rounds `value` to `places` decimal digits
///
/// Negative zero results are folded into positive zero so that the textual
/// representation never shows `-0`. Values too large to carry `places`
/// fractional digits come back unchanged.
///
/// # Examples
///
/// ```rust
/// use vecta::numeric::round;
///
/// assert_eq!(round(1.23456, 2), 1.23);
/// assert_eq!(round(-1e-15, 12).to_string(), "0");
/// ```
pub fn round(value: f64, places: i32) -> f64 {
    scaled(value, places, f64::round)
}

/// Rounds `value` down to `places` decimal digits
pub fn floor(value: f64, places: i32) -> f64 {
    scaled(value, places, f64::floor)
}

/// Rounds `value` up to `places` decimal digits
pub fn ceil(value: f64, places: i32) -> f64 {
    scaled(value, places, f64::ceil)
}

/// Clamps `value` into `[min, max]`
///
/// Unlike `f64::clamp` this never panics: a reversed range saturates at `max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Clamps `value` into the default `[0, 1]` range
pub fn clamp_unit(value: f64) -> f64 {
    clamp(value, DEFAULT_CLAMP_MIN, DEFAULT_CLAMP_MAX)
}

/// Formats a number the way a host default number-to-string conversion does
///
/// Integral values have no decimal point, fractions use the shortest
/// round-trip digits and very large or very small magnitudes switch to
/// exponent notation with an explicit sign (`1e+21`, `1e-7`).
///
/// # Examples
///
/// ```rust
/// use vecta::numeric::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(-0.5), "-0.5");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }

    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}
