//! Index selection: mapping one random draw onto one alphabet position.

use crate::FractionSource;

/// Uniform-real selection: `floor(fraction * len)`.
///
/// Uniform over `0..len` given an ideal source. The clamp keeps the index
/// in bounds for a source that returns exactly `1.0`.
pub(crate) fn uniform_index<R>(source: &R, len: usize) -> usize
where
    R: FractionSource + ?Sized,
{
    let scaled = (source.fraction() * len as f64) as usize;
    scaled.min(len - 1)
}

/// Byte-modulo selection: `byte % len`.
///
/// Whenever `256 % len != 0` this overweights positions below `256 % len`:
/// they receive `ceil(256 / len)` of the 256 byte values, the rest receive
/// `floor(256 / len)`.
pub(crate) const fn modulo_index(byte: u8, len: usize) -> usize {
    byte as usize % len
}
