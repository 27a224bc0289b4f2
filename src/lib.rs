//! `tinyseries` - Compact text encoding for numeric time series
//!
//! Turns an ordered sequence of `f64` values into a short printable string and
//! back, keeping a configurable number of decimal digits. Built for series whose
//! consecutive values are close to each other (timestamps, slowly varying sensor
//! readings), where most values shrink to one or two characters.
//!
//! # Lossy vs Lossless
//!
//! Values are stored as fixed-point integers at the chosen precision (0 to 10
//! decimal digits). Decoding returns `round(value * 10^p) / 10^p` for every input
//! value, so the codec is **lossless exactly when the input has at most `p`
//! decimal digits**. Rounding sends ties toward positive infinity (`2.5 -> 3`,
//! `-2.5 -> -2`).
//!
//! # Example
//! ```
//! use tinyseries::{compress, decompress};
//!
//! let series = [12365.54524354, 14789.54699, 11367.67845123];
//! let text = compress(&series, 3).unwrap();
//! assert_eq!(text, "BqmvqVck}rCxizoE");
//!
//! let values = decompress(&text).unwrap();
//! assert_eq!(values, vec![12365.545, 14789.547, 11367.678]);
//! ```
//!
//! # Text Format
//!
//! Every character is ASCII in `'?'..='~'` (63-126): no whitespace, quotes or
//! control characters, so the output can be embedded in JSON, CSV or URLs
//! as-is. An empty series encodes to the empty string, without a header.
//!
//! | Position | Content |
//! |----------|---------|
//! | 0 | Header: `'?' + precision` (`'?'` to `'I'`) |
//! | 1.. | One variable-length group per value |
//!
//! ## Value Groups
//!
//! Each value goes through four steps:
//!
//! 1. **Scale**: `scaled = round(value * 10^p)` as `i64`
//! 2. **Delta**: `delta = scaled - previous_scaled` (previous starts at 0)
//! 3. **Zig-zag**: `0, -1, 1, -2, 2, ...` maps to `0, 1, 2, 3, 4, ...`
//! 4. **Base-32 groups**: 5 bits per character, least significant first
//!
//! | Character | Bits | Meaning |
//! |-----------|------|---------|
//! | `'_'..='~'` | `1xxxxx` | 5 payload bits, more characters follow |
//! | `'?'..='^'` | `0xxxxx` | last 5 payload bits of the value |
//!
//! A delta of ±15 fits one character, ±511 two, ±16383 three.
//!
//! ## Supported Ranges
//! - Precision: 0 to 10 decimal digits
//! - Values: finite, with `|value * 10^p| < 2^62`
//! - Groups: up to 13 characters (64-bit zig-zag value)

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]

mod constants;
mod decoder;
mod encoder;
mod error;
mod precision;

#[cfg(test)]
mod tests;

// Re-export public API
pub use decoder::decompress;
pub use encoder::{compress, compress_default, compress_with};
pub use error::{DecodeError, EncodeError};
pub use precision::Precision;
