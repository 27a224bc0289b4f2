//! Decoding functionality for tinyseries encoded text.

use std::str::Chars;

use crate::constants::{
    zigzag_decode, CHAR_OFFSET, CONTINUATION_BIT, GROUP_BITS, GROUP_MASK, MAX_GROUP_CHAR,
};
use crate::error::DecodeError;
use crate::precision::Precision;

/// Decompress text produced by [`crate::compress`] back to values
///
/// Each value comes back rounded to the precision stored in the header,
/// i.e. `round(original * 10^p) / 10^p`.
///
/// # Errors
/// Returns an error if:
/// - the header does not encode a precision in `[0, 10]`
/// - a character outside `'?'..='~'` appears after the header
/// - the text ends inside a continuation run
/// - a group or the running total does not fit 64 bits
///
/// # Example
/// ```
/// let values = tinyseries::decompress("?qbW").unwrap();
/// assert_eq!(values, vec![12345.0]);
/// ```
#[must_use = "decoding returns values that should be used"]
pub fn decompress(text: &str) -> Result<Vec<f64>, DecodeError> {
    let mut chars = text.chars();
    let Some(header) = chars.next() else {
        return Ok(Vec::new());
    };
    let precision = Precision::from_header(header).ok_or(DecodeError::InvalidPrecisionHeader { found: header })?;
    let scale = precision.scale();

    let mut reader = GroupReader::new(chars, 1);
    let mut result = Vec::new();
    let mut last = 0i64;

    while reader.has_more() {
        let offset = reader.offset();
        let delta = zigzag_decode(reader.read_group()?);
        last = last.checked_add(delta).ok_or(DecodeError::Overflow { offset })?;
        result.push(last as f64 / scale);
    }

    Ok(result)
}

/// Cursor over the value groups of an encoded text
pub(crate) struct GroupReader<'a> {
    chars: std::iter::Peekable<Chars<'a>>,
    offset: usize,
}

impl<'a> GroupReader<'a> {
    /// Create a reader positioned at character `offset` of the original text
    #[inline]
    pub fn new(chars: Chars<'a>, offset: usize) -> Self {
        Self { chars: chars.peekable(), offset }
    }

    /// Character index of the next unread character
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Check if there are more characters to read
    #[inline]
    pub fn has_more(&mut self) -> bool {
        self.chars.peek().is_some()
    }

    /// Read one zig-zag encoded value
    pub fn read_group(&mut self) -> Result<u64, DecodeError> {
        let mut value = 0u64;
        let mut shift = 0u32;

        loop {
            let chunk = self.read_chunk()?;
            let bits = chunk & GROUP_MASK;
            if shift >= u64::BITS || (bits << shift) >> shift != bits {
                return Err(DecodeError::Overflow { offset: self.offset - 1 });
            }
            value |= bits << shift;
            shift += GROUP_BITS;

            if chunk & CONTINUATION_BIT == 0 {
                return Ok(value);
            }
        }
    }

    /// Read the next character as a 6-bit chunk
    #[inline]
    fn read_chunk(&mut self) -> Result<u64, DecodeError> {
        let offset = self.offset;
        let found = self.chars.next().ok_or(DecodeError::Truncated { offset })?;
        self.offset += 1;

        let code = u32::from(found);
        if !(CHAR_OFFSET..=MAX_GROUP_CHAR).contains(&code) {
            return Err(DecodeError::InvalidCharacter { offset, found });
        }
        Ok(u64::from(code - CHAR_OFFSET))
    }
}
