//! Codepoint boundary scanner.
//!
//! What it does
//! - Walks a byte buffer one codepoint at a time, reporting only how many
//!   bytes each step consumed. The scalar value is never materialized.
//! - Classifies lead bytes through a 256-entry table and validates the second
//!   byte of a multi-byte sequence against a per-lead accept range, which is
//!   what rejects overlong encodings, surrogates and values above U+10FFFF.
//!
//! Recovery policy
//! - A byte that cannot start a well-formed sequence is one step of width 1:
//!   stray continuation bytes, `C0`/`C1`/`F5..FF`, truncated sequences at the
//!   end of the buffer, and sequences with any out-of-range continuation byte
//!   all consume exactly their lead byte. The following byte is then
//!   classified on its own.
//! - Counting and advancing share [`codepoint_width`], so a buffer's count and
//!   the cursor after that many advances always agree, malformed or not.
//!
//! Invariants
//! - Every cursor returned lies in `[0, len]`.
//! - On valid UTF-8 every cursor returned is a `char` boundary.

use crate::{ByteSeq, trace_recovery};


/// Bytes below this value are ASCII and encode themselves.
pub(crate) const RUNE_SELF: u8 = 0x80;

/// Lowest continuation byte.
const LOCB: u8 = 0x80;
/// Highest continuation byte.
const HICB: u8 = 0xBF;

// Descriptor layout: the high nibble indexes `ACCEPT_RANGES` (or is `F` for
// the two one-byte classes), the low three bits hold the sequence size.
const XX: u8 = 0xF1; // invalid: size 1
const AS: u8 = 0xF0; // ASCII: size 1
const S1: u8 = 0x02; // accept 0, size 2
const S2: u8 = 0x13; // accept 1, size 3
const S3: u8 = 0x03; // accept 0, size 3
const S4: u8 = 0x23; // accept 2, size 3
const S5: u8 = 0x34; // accept 3, size 4
const S6: u8 = 0x04; // accept 0, size 4
const S7: u8 = 0x44; // accept 4, size 4

/// Descriptor for every possible first byte of a sequence.
#[rustfmt::skip]
static FIRST: [u8; 256] = [
    //   1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
    AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, // 0x00-0x0F
    AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, // 0x10-0x1F
    AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, // 0x20-0x2F
    AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, // 0x30-0x3F
    AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, // 0x40-0x4F
    AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, // 0x50-0x5F
    AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, // 0x60-0x6F
    AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, // 0x70-0x7F
    //   1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
    XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, // 0x80-0x8F
    XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, // 0x90-0x9F
    XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, // 0xA0-0xAF
    XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, // 0xB0-0xBF
    XX, XX, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, // 0xC0-0xCF
    S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, // 0xD0-0xDF
    S2, S3, S3, S3, S3, S3, S3, S3, S3, S3, S3, S3, S3, S4, S3, S3, // 0xE0-0xEF
    S5, S6, S6, S6, S7, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, // 0xF0-0xFF
];

/// Inclusive bounds for the second byte of a multi-byte sequence.
#[derive(Debug, Clone, Copy)]
struct AcceptRange {
    lo: u8,
    hi: u8,
}

impl AcceptRange {
    const fn new(lo: u8, hi: u8) -> Self {
        Self { lo, hi }
    }

    #[inline]
    const fn contains(self, b: u8) -> bool {
        self.lo <= b && b <= self.hi
    }
}

// Sized to the full nibble so any descriptor index stays in bounds. Only the
// first five entries are ever selected.
static ACCEPT_RANGES: [AcceptRange; 16] = {
    let mut ranges = [AcceptRange::new(0, 0); 16];
    ranges[0] = AcceptRange::new(LOCB, HICB);
    ranges[1] = AcceptRange::new(0xA0, HICB);
    ranges[2] = AcceptRange::new(LOCB, 0x9F);
    ranges[3] = AcceptRange::new(0x90, HICB);
    ranges[4] = AcceptRange::new(LOCB, 0x8F);
    ranges
};

#[inline]
const fn is_continuation(b: u8) -> bool {
    LOCB <= b && b <= HICB
}

/// Returns the number of bytes one scanner step consumes at byte offset `i`.
///
/// The result is `0` when `i` is at or past the end of `p`, otherwise `1..=4`.
/// Any byte that does not begin a complete, well-formed sequence is a step of
/// width 1.
///
/// ```rust
/// use runeslice::codepoint_width;
///
/// let p = "aé€😀".as_bytes();
/// assert_eq!(codepoint_width(p, 0), 1);
/// assert_eq!(codepoint_width(p, 1), 2);
/// assert_eq!(codepoint_width(p, 3), 3);
/// assert_eq!(codepoint_width(p, 6), 4);
/// assert_eq!(codepoint_width(p, 10), 0);
///
/// // Lead byte of a 3-byte sequence with an ASCII byte where a continuation
/// // byte belongs.
/// assert_eq!(codepoint_width(b"\xE2\x82A", 0), 1);
/// ```
#[inline]
#[must_use]
pub fn codepoint_width(p: &[u8], i: usize) -> usize {
    let Some(&b) = p.get(i) else {
        return 0;
    };
    if b < RUNE_SELF {
        return 1;
    }

    let x = FIRST[usize::from(b)];
    if x == XX {
        trace_recovery!(offset = i, byte = b, "invalid lead byte");
        return 1;
    }

    let size = usize::from(x & 7);
    if i + size > p.len() {
        trace_recovery!(offset = i, byte = b, size, "truncated sequence");
        return 1;
    }

    let accept = ACCEPT_RANGES[usize::from(x >> 4)];
    let width = if !accept.contains(p[i + 1]) {
        1
    } else if size == 2 {
        2
    } else if !is_continuation(p[i + 2]) {
        1
    } else if size == 3 {
        3
    } else if !is_continuation(p[i + 3]) {
        1
    } else {
        4
    };

    if width == 1 {
        trace_recovery!(offset = i, byte = b, size, "ill-formed continuation");
    }
    width
}

/// Advances up to `n` steps from the start of `p`.
///
/// Returns the byte cursor after the walk and whether all `n` steps fit
/// before the buffer ran out.
pub(crate) fn boundary(p: &[u8], mut n: usize) -> (usize, bool) {
    let mut i = 0;
    while n > 0 && i < p.len() {
        i += codepoint_width(p, i);
        n -= 1;
    }
    debug_assert!(i <= p.len(), "cursor {i} past end {}", p.len());
    (i, n == 0)
}

/// Counts the steps needed to walk all of `p`.
pub(crate) fn count(p: &[u8]) -> usize {
    let mut i = 0;
    let mut n = 0;
    while i < p.len() {
        i += codepoint_width(p, i);
        n += 1;
    }
    n
}

/// Returns the byte offset reached after advancing `n` codepoints from the
/// start of `buf`, and whether all `n` advances fit.
///
/// When `buf` holds fewer than `n` codepoints the offset is `buf.len()` and
/// the flag is `false`. Malformed bytes count as one codepoint each.
///
/// ```rust
/// use runeslice::codepoint_boundary;
///
/// assert_eq!(codepoint_boundary("añb", 2), (3, true));
/// assert_eq!(codepoint_boundary("añb", 5), (4, false));
/// assert_eq!(codepoint_boundary(b"a\x80b".as_slice(), 2), (2, true));
/// ```
#[inline]
#[must_use]
pub fn codepoint_boundary<B: ByteSeq + ?Sized>(buf: &B, n: usize) -> (usize, bool) {
    boundary(buf.as_byte_slice(), n)
}

/// [`codepoint_boundary`] over raw bytes.
#[inline]
#[must_use]
pub fn codepoint_boundary_bytes(buf: &[u8], n: usize) -> (usize, bool) {
    boundary(buf, n)
}

/// [`codepoint_boundary`] over a text view.
#[inline]
#[must_use]
pub fn codepoint_boundary_str(buf: &str, n: usize) -> (usize, bool) {
    boundary(buf.as_bytes(), n)
}

/// Returns the number of codepoints in `buf`, counting each malformed byte as
/// one.
///
/// For valid UTF-8 this equals `str::chars().count()`.
#[inline]
#[must_use]
pub fn codepoint_count<B: ByteSeq + ?Sized>(buf: &B) -> usize {
    count(buf.as_byte_slice())
}
