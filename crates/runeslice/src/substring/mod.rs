//! Rune-indexed substrings.
//!
//! `start` and `length` are measured in codepoints as the scanner counts
//! them. Negative values count back from the end:
//! - a negative `start` is resolved against the codepoint count of the whole
//!   buffer;
//! - a negative `length` is resolved against the codepoint count of what
//!   remains after `start`;
//! - `length == 0` means "to the end".
//!
//! Nothing here fails. A `start` before the beginning, a `start` past the end,
//! or a `length` that resolves to zero or less all produce an empty result.

use core::ops::Range;

use crate::{
    ByteSeq,
    scan::{boundary, count},
};


/// Resolves `start` and `length` to a byte range of `p`.
///
/// The range is always in bounds. Empty results are reported as an empty
/// range at an in-bounds offset.
///
/// ```rust
/// use runeslice::substring_range;
///
/// assert_eq!(substring_range(b"ABCDEFG", 2, 3), 2..5);
/// assert_eq!(substring_range("añbc".as_bytes(), 1, 2), 1..4);
/// assert_eq!(substring_range(b"ABC", -5, 1), 0..0);
/// ```
#[must_use]
pub fn substring_range(p: &[u8], start: isize, length: isize) -> Range<usize> {
    if p.is_empty() {
        return 0..0;
    }

    let start = if start < 0 {
        let back = start.unsigned_abs();
        let total = count(p);
        if back > total {
            return 0..0;
        }
        total - back
    } else {
        start.unsigned_abs()
    };

    let lo = if start > 0 { boundary(p, start).0 } else { 0 };
    let rest = &p[lo..];
    if rest.is_empty() {
        return lo..lo;
    }

    if length == 0 {
        return lo..p.len();
    }

    let length = if length < 0 {
        let back = length.unsigned_abs();
        let total = count(rest);
        if back >= total {
            return lo..lo;
        }
        total - back
    } else {
        length.unsigned_abs()
    };

    let (len, _) = boundary(rest, length);
    lo..lo + len
}

/// Returns the part of `buf` that starts `start` codepoints in and spans
/// `length` codepoints.
///
/// See the [module docs](self) for how negative and zero arguments resolve.
///
/// ```rust
/// use runeslice::substring;
///
/// let s = "ABCDEFGHIJKLMNOPQ";
/// assert_eq!(substring(s, 0, 3), "ABC");
/// assert_eq!(substring(s, -3, 3), "OPQ");
/// assert_eq!(substring(s, 0, -3), "ABCDEFGHIJKLMN");
/// assert_eq!(substring(s, -6, -3), "LMN");
/// assert_eq!(substring(s, 100, 10), "");
/// ```
#[inline]
#[must_use]
pub fn substring<B: ByteSeq + ?Sized>(buf: &B, start: isize, length: isize) -> &B {
    buf.slice_range(substring_range(buf.as_byte_slice(), start, length))
}

/// [`substring`] over raw bytes.
#[inline]
#[must_use]
pub fn substring_bytes(buf: &[u8], start: isize, length: isize) -> &[u8] {
    substring(buf, start, length)
}

/// [`substring`] over a text view.
#[inline]
#[must_use]
pub fn substring_str(buf: &str, start: isize, length: isize) -> &str {
    substring(buf, start, length)
}
