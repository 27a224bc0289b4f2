//! Internal constants and helper functions for tinyseries encoding.

/// Offset added to every emitted character so output stays printable (`'?'`)
pub(crate) const CHAR_OFFSET: u32 = 63;

/// Continuation flag of a 5-bit group
pub(crate) const CONTINUATION_BIT: u64 = 0x20;

/// Payload mask of a 5-bit group
pub(crate) const GROUP_MASK: u64 = 0x1f;

/// Bits carried by each group
pub(crate) const GROUP_BITS: u32 = 5;

/// Largest character a group can produce (`'~'`)
pub(crate) const MAX_GROUP_CHAR: u32 = CHAR_OFFSET + 0x3f;

/// Lowest supported precision (inclusive)
pub(crate) const PRECISION_MIN: u8 = 0;

/// Highest supported precision (inclusive)
pub(crate) const PRECISION_MAX: u8 = 10;

/// Exclusive bound on `|scaled|`. Keeps every delta inside `i64` and every
/// zig-zag value inside `u64`.
pub(crate) const SCALED_LIMIT: f64 = 4_611_686_018_427_387_904.0; // 2^62

/// Exact powers of ten for every supported precision
pub(crate) const POW10: [f64; PRECISION_MAX as usize + 1] = [
    1.0,
    10.0,
    100.0,
    1_000.0,
    10_000.0,
    100_000.0,
    1_000_000.0,
    10_000_000.0,
    100_000_000.0,
    1_000_000_000.0,
    10_000_000_000.0,
];

/// Round to the nearest integer, ties toward positive infinity.
///
/// `f64::round` sends ties away from zero, which disagrees on negative
/// halves (`-2.5` must become `-2`). `x - x.floor()` is exact for every
/// finite `x`, so the comparison never sees a rounding artifact.
#[inline]
pub(crate) fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Map a signed delta onto the unsigned line: 0, -1, 1, -2, 2 -> 0, 1, 2, 3, 4
#[inline]
pub(crate) fn zigzag_encode(delta: i64) -> u64 {
    ((delta << 1) ^ (delta >> 63)) as u64
}

/// Inverse of [`zigzag_encode`]
#[inline]
pub(crate) fn zigzag_decode(zz: u64) -> i64 {
    ((zz >> 1) as i64) ^ -((zz & 1) as i64)
}
