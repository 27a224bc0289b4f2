//! Encoder for tinyseries text compression.

use crate::constants::{
    round_half_up, zigzag_encode, CHAR_OFFSET, CONTINUATION_BIT, GROUP_BITS, GROUP_MASK, SCALED_LIMIT,
};
use crate::error::EncodeError;
use crate::precision::Precision;

/// Compress a series at the given decimal precision
///
/// # Arguments
/// * `series` - Values in order; an empty slice encodes to `""`
/// * `precision` - Decimal digits to keep, in `[0, 10]`
///
/// # Errors
/// Returns an error if:
/// - `precision` is outside `[0, 10]`
/// - any element is NaN or infinite
/// - any element scaled by `10^precision` leaves the encodable range
///
/// The whole series is validated before any output is produced.
///
/// # Example
/// ```
/// let text = tinyseries::compress(&[12345.0], 0).unwrap();
/// assert_eq!(text, "?qbW");
/// ```
pub fn compress(series: &[f64], precision: i32) -> Result<String, EncodeError> {
    compress_with(series, Precision::new(precision)?)
}

/// Compress a series at the default precision of 3 digits
///
/// # Errors
/// See [`compress`].
pub fn compress_default(series: &[f64]) -> Result<String, EncodeError> {
    compress_with(series, Precision::DEFAULT)
}

/// Compress a series with an already validated precision
///
/// # Errors
/// See [`compress`].
pub fn compress_with(series: &[f64], precision: Precision) -> Result<String, EncodeError> {
    let scaled = scale_series(series, precision)?;
    if scaled.is_empty() {
        return Ok(String::new());
    }

    // Most slowly varying series need 1-3 characters per value
    let mut out = String::with_capacity(1 + scaled.len() * 3);
    out.push(precision.header());

    let mut last = 0i64;
    for &value in &scaled {
        // |value|, |last| < 2^62, so the difference cannot overflow
        push_group(&mut out, zigzag_encode(value - last));
        last = value;
    }

    Ok(out)
}

/// Validate every element and convert it to a fixed-point integer
fn scale_series(series: &[f64], precision: Precision) -> Result<Vec<i64>, EncodeError> {
    let scale = precision.scale();
    series
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if !value.is_finite() {
                return Err(EncodeError::NonNumericElement { index });
            }
            let scaled = round_half_up(value * scale);
            if scaled.abs() >= SCALED_LIMIT {
                return Err(EncodeError::ValueOutOfRange { index });
            }
            Ok(scaled as i64)
        })
        .collect()
}

/// Emit one base-32 variable-length group, least significant bits first
#[inline]
fn push_group(out: &mut String, mut zz: u64) {
    while zz >= CONTINUATION_BIT {
        out.push(group_char(CONTINUATION_BIT | (zz & GROUP_MASK)));
        zz >>= GROUP_BITS;
    }
    out.push(group_char(zz));
}

#[inline]
fn group_char(chunk: u64) -> char {
    // chunk <= 0x3f, so the result is ASCII in '?'..='~'
    char::from((chunk as u8) + CHAR_OFFSET as u8)
}
