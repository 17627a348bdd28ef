use core::ops::Range;

use bstr::BStr;

mod sealed {
    pub trait Sealed {}

    impl Sealed for [u8] {}
    impl Sealed for str {}
    impl Sealed for bstr::BStr {}
}

/// A borrowed, indexable byte sequence the scanner can walk.
///
/// Implemented for `[u8]`, `str` and [`BStr`]. The trait is sealed: slicing a
/// `str` is only sound at the offsets the scanner produces, which holds for
/// the implementations here.
pub trait ByteSeq: sealed::Sealed {
    /// Returns the underlying bytes.
    fn as_byte_slice(&self) -> &[u8];

    /// Returns the sub-sequence covering `range`.
    ///
    /// `range` must come from the scanner. Out-of-bounds or non-boundary
    /// ranges yield an empty sequence instead of panicking.
    #[must_use]
    fn slice_range(&self, range: Range<usize>) -> &Self;
}

impl ByteSeq for [u8] {
    #[inline]
    fn as_byte_slice(&self) -> &[u8] {
        self
    }

    #[inline]
    fn slice_range(&self, range: Range<usize>) -> &Self {
        self.get(range).unwrap_or_default()
    }
}

impl ByteSeq for str {
    #[inline]
    fn as_byte_slice(&self) -> &[u8] {
        self.as_bytes()
    }

    #[inline]
    fn slice_range(&self, range: Range<usize>) -> &Self {
        debug_assert!(
            self.is_char_boundary(range.start) && self.is_char_boundary(range.end),
            "{range:?} does not fall on char boundaries"
        );
        self.get(range).unwrap_or_default()
    }
}

impl ByteSeq for BStr {
    #[inline]
    fn as_byte_slice(&self) -> &[u8] {
        self
    }

    #[inline]
    fn slice_range(&self, range: Range<usize>) -> &Self {
        BStr::new(self.as_byte_slice().slice_range(range))
    }
}
