//! Digit helpers shared by the layout builder and the transition engine.
//!
//! Digit sequences are little-endian: index 0 holds the least-significant
//! digit, matching the order wheels are stored in.

use crate::error::{FlipError, Result};

/// Number of digits `value` needs in base `radix`. Zero still needs one.
pub fn digit_count(value: u64, radix: u32) -> usize {
    let radix = radix as u64;
    let mut count = 1;
    let mut rest = value / radix;
    while rest > 0 {
        rest /= radix;
        count += 1;
    }
    count
}

/// Digit width of the larger of two values
pub fn max_number_length(a: u64, b: u64, radix: u32) -> usize {
    digit_count(a.max(b), radix)
}

/// Digits of `value`, least-significant first, zero padded to `len`.
///
/// Digits above `len` are dropped; callers size `len` from [`digit_count`].
pub fn reversed_padded_digits(value: u64, len: usize, radix: u32) -> Vec<u32> {
    let radix = radix as u64;
    let mut rest = value;
    (0..len)
        .map(|_| {
            let digit = (rest % radix) as u32;
            rest /= radix;
            digit
        })
        .collect()
}

/// Convert caller-supplied floating point input into a display value.
///
/// Fractions are truncated toward zero; negative and non-finite input is
/// rejected.
pub fn checked_value(value: f64) -> Result<u64> {
    if !value.is_finite() {
        return Err(FlipError::InvalidArgument(format!(
            "value must be finite, got {}",
            value
        )));
    }
    if value < 0.0 {
        return Err(FlipError::InvalidArgument(format!(
            "value must not be negative, got {}",
            value
        )));
    }
    if value >= u64::MAX as f64 {
        return Err(FlipError::InvalidArgument(format!(
            "value {} does not fit the display",
            value
        )));
    }
    Ok(value.trunc() as u64)
}
