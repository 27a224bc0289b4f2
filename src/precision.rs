//! Decimal precision used to scale values to fixed-point integers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{CHAR_OFFSET, POW10, PRECISION_MAX, PRECISION_MIN};
use crate::error::EncodeError;

/// Number of decimal digits retained by the codec, always in `[0, 10]`.
///
/// Serializes as a bare integer. Deserialization runs the same range check
/// as [`Precision::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct Precision(u8);

impl Precision {
    /// Precision used by [`crate::compress_default`]
    pub const DEFAULT: Self = Self(3);

    /// Lowest precision (integers only)
    pub const MIN: Self = Self(PRECISION_MIN);

    /// Highest precision
    pub const MAX: Self = Self(PRECISION_MAX);

    /// Validate a precision
    ///
    /// # Errors
    /// Returns `EncodeError::PrecisionOutOfRange` unless `0 <= precision <= 10`.
    pub fn new(precision: i32) -> Result<Self, EncodeError> {
        match u8::try_from(precision) {
            Ok(p) if (PRECISION_MIN..=PRECISION_MAX).contains(&p) => Ok(Self(p)),
            _ => Err(EncodeError::PrecisionOutOfRange { precision }),
        }
    }

    /// Number of decimal digits
    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Fixed-point scale factor, `10^precision`
    #[inline]
    #[must_use]
    pub fn scale(self) -> f64 {
        POW10[self.0 as usize]
    }

    /// Header character that opens an encoded text
    #[inline]
    pub(crate) fn header(self) -> char {
        char::from(self.0 + CHAR_OFFSET as u8)
    }

    /// Parse the header character of an encoded text
    #[inline]
    pub(crate) fn from_header(c: char) -> Option<Self> {
        let p = u32::from(c).checked_sub(CHAR_OFFSET)?;
        u8::try_from(p)
            .ok()
            .filter(|p| *p <= PRECISION_MAX)
            .map(Self)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i32> for Precision {
    type Error = EncodeError;

    fn try_from(precision: i32) -> Result<Self, Self::Error> {
        Self::new(precision)
    }
}

impl From<Precision> for u8 {
    fn from(p: Precision) -> Self {
        p.0
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
