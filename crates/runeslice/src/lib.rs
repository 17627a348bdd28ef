//! Byte-level UTF-8 codepoint boundary scanning and rune-indexed substrings.
//!
//! The scanner walks raw bytes with a lead-byte classification table instead
//! of a full decoder. It never rejects input: any byte that does not begin a
//! well-formed sequence counts as one codepoint of width 1, so offsets and
//! counts stay consistent on malformed buffers.
//!
//! ```rust
//! use runeslice::{codepoint_boundary, substring};
//!
//! assert_eq!(codepoint_boundary("日本語", 2), (6, true));
//! assert_eq!(substring("ABCDEFGHIJKLMNOPQ", -6, -3), "LMN");
//! assert_eq!(substring(b"ab\xFFcd".as_slice(), 2, 2), b"\xFFc");
//! ```
//!
//! The crate also carries two small leaf utilities: loose boolean coercion
//! ([`Truthy`], [`parse_bool`]) and decimal rounding ([`round`],
//! [`percent`], behind the default `std` feature).

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

/// Emits a trace event when the scanner falls back to a width-1 step.
///
/// Expands to nothing unless the `tracing` feature is enabled.
macro_rules! trace_recovery {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(target: "runeslice::scan", $($arg)*);
    };
}
pub(crate) use trace_recovery;

mod error;
mod ext;
#[cfg(feature = "std")]
mod math;
mod scan;
mod seq;
mod substring;
mod truthy;

#[cfg(any(test, feature = "fuzzing"))]
#[doc(hidden)]
pub mod oracle;

#[cfg(test)]
mod tests;

pub use error::ParseBoolError;
pub use ext::RuneSlice;
#[cfg(feature = "std")]
pub use math::{percent, round};
pub use scan::{
    codepoint_boundary, codepoint_boundary_bytes, codepoint_boundary_str, codepoint_count,
    codepoint_width,
};
pub use seq::ByteSeq;
pub use substring::{substring, substring_bytes, substring_range, substring_str};
pub use truthy::{Truthy, as_bool, parse_bool};
