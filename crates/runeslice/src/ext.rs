use core::ops::Range;

use crate::{ByteSeq, codepoint_boundary, codepoint_count, substring, substring_range};

/// Method-call syntax for the scanner and the extractor.
///
/// ```rust
/// use runeslice::RuneSlice;
///
/// let s = "añb€";
/// assert_eq!(s.rune_count(), 4);
/// assert_eq!(s.rune_boundary(2), (3, true));
/// assert_eq!(s.rune_sub(-2, 0), "b€");
/// assert_eq!(b"xyz".as_slice().rune_sub(1, 1), b"y");
/// ```
pub trait RuneSlice: ByteSeq {
    /// See [`codepoint_boundary`].
    #[must_use]
    fn rune_boundary(&self, n: usize) -> (usize, bool) {
        codepoint_boundary(self, n)
    }

    /// See [`codepoint_count`].
    #[must_use]
    fn rune_count(&self) -> usize {
        codepoint_count(self)
    }

    /// See [`substring`].
    #[must_use]
    fn rune_sub(&self, start: isize, length: isize) -> &Self {
        substring(self, start, length)
    }

    /// See [`substring_range`].
    #[must_use]
    fn rune_sub_range(&self, start: isize, length: isize) -> Range<usize> {
        substring_range(self.as_byte_slice(), start, length)
    }
}

impl<B: ByteSeq + ?Sized> RuneSlice for B {}
