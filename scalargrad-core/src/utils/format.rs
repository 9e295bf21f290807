use num_traits::Float;
use std::fmt::{Display, LowerExp};

/// Formats `value` with `precision` significant digits, the way JavaScript's
/// `Number.prototype.toPrecision` does.
///
/// Fixed notation is used when the decimal exponent lies in
/// `-6..precision`, exponential notation (`1.235e+4`, `1.000e-7`) otherwise.
/// Zero prints as `0.000` (for `precision = 4`, sign dropped), non-finite
/// values as `NaN`, `Infinity` and `-Infinity`.
///
/// A `precision` of 0 is treated as 1.
pub fn to_precision<F>(value: F, precision: usize) -> String
where
    F: Float + Display + LowerExp,
{
    let precision = precision.max(1);
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value.is_zero() {
        return format!("{:.*}", precision - 1, 0.0);
    }

    // The exponent must come from the rounded mantissa: 9.9996 rounds to 1.000e1.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -6 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{}", mantissa, sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        format!("{:.*}", decimals, value)
    }
}
