//! Bounds-checked byte copies and little-endian word codecs.

use core::ops::Range;

use crate::Error;

/// Resolve `offset..offset + len` against a buffer of `available` bytes.
///
/// Overflowing or out-of-range requests are reported as
/// [`Error::BufferTooSmall`].
#[inline]
pub fn checked_range(available: usize, offset: usize, len: usize) -> Result<Range<usize>, Error> {
    match offset.checked_add(len) {
        Some(end) if end <= available => Ok(offset..end),
        _ => Err(Error::BufferTooSmall {
            required: offset.saturating_add(len),
            available,
        }),
    }
}

/// Copy `len` bytes from `src[src_off..]` into `dst[dst_off..]`.
///
/// Nothing is written unless both ranges fit.
pub fn copy_bytes(
    src: &[u8],
    src_off: usize,
    dst: &mut [u8],
    dst_off: usize,
    len: usize,
) -> Result<(), Error> {
    let from = checked_range(src.len(), src_off, len)?;
    let to = checked_range(dst.len(), dst_off, len)?;
    dst[to].copy_from_slice(&src[from]);
    Ok(())
}

/// Decode consecutive little-endian `u64` words from `src` into `dst`.
///
/// `src` must hold at least `8 * dst.len()` bytes.
#[inline(always)]
pub fn read_u64_le(src: &[u8], dst: &mut [u64]) {
    debug_assert!(src.len() >= 8 * dst.len());
    for (chunk, v) in src.chunks_exact(8).zip(dst.iter_mut()) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *v = u64::from_le_bytes(word);
    }
}

/// Encode `src` words as little-endian bytes into `dst`.
///
/// A trailing partial chunk of `dst` receives the leading bytes of the
/// corresponding word, which gives left truncation of the encoded stream.
#[inline(always)]
pub fn write_u64_le(src: &[u64], dst: &mut [u8]) {
    for (chunk, v) in dst.chunks_mut(8).zip(src.iter()) {
        let n = chunk.len();
        chunk.copy_from_slice(&v.to_le_bytes()[..n]);
    }
}
