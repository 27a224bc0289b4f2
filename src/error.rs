//! Error types for tinyseries encoding and decoding operations.

use std::fmt;

use crate::constants::{PRECISION_MAX, PRECISION_MIN};

/// Error returned when compressing a series fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Precision is outside `[0, 10]`
    PrecisionOutOfRange { precision: i32 },
    /// Element is NaN or infinite
    NonNumericElement { index: usize },
    /// Element scaled by `10^precision` does not fit the 62-bit delta range
    ValueOutOfRange { index: usize },
}

/// Error returned when decompressing text fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// First character does not encode a precision in `[0, 10]`
    InvalidPrecisionHeader { found: char },
    /// Character can never appear inside an encoded group
    InvalidCharacter { offset: usize, found: char },
    /// Input ended inside a continuation run
    Truncated { offset: usize },
    /// Group or running total exceeds 64 bits
    Overflow { offset: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrecisionOutOfRange { precision } => {
                write!(
                    f,
                    "precision {precision} is out of range, should be between {PRECISION_MIN} and {PRECISION_MAX}"
                )
            }
            Self::NonNumericElement { index } => {
                write!(f, "series element {index} is not a finite number")
            }
            Self::ValueOutOfRange { index } => {
                write!(f, "series element {index} is too large to encode at this precision")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrecisionHeader { found } => {
                write!(f, "invalid precision header {found:?}, text is not a compressed series")
            }
            Self::InvalidCharacter { offset, found } => {
                write!(f, "invalid character {found:?} at offset {offset}")
            }
            Self::Truncated { offset } => {
                write!(f, "text ends inside a value group at offset {offset}")
            }
            Self::Overflow { offset } => {
                write!(f, "value group at offset {offset} overflows 64 bits")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
