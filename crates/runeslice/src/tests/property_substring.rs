use alloc::{string::String, vec::Vec};
use core::ops::Range;

use quickcheck::QuickCheck;

use super::property_oracle::{Utf8ish, test_count};
use crate::{oracle, substring, substring_bytes, substring_range, substring_str};

/// Substring resolution written against the model's list of boundaries.
fn model_range(p: &[u8], start: isize, length: isize) -> Range<usize> {
    let bounds = oracle::boundaries(p);
    let total = bounds.len() - 1;
    if p.is_empty() {
        return 0..0;
    }
    let start = if start < 0 {
        match total.checked_sub(start.unsigned_abs()) {
            Some(s) => s,
            None => return 0..0,
        }
    } else {
        start.unsigned_abs().min(total)
    };
    let lo = bounds[start];
    if lo == p.len() {
        return lo..lo;
    }
    if length == 0 {
        return lo..p.len();
    }
    let remaining = total - start;
    let length = if length < 0 {
        match remaining.checked_sub(length.unsigned_abs()) {
            Some(l) if l > 0 => l,
            _ => return lo..lo,
        }
    } else {
        length.unsigned_abs().min(remaining)
    };
    lo..bounds[start + length]
}

/// Property: the resolved range matches the model and is always in bounds.
#[test]
fn range_matches_model() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: Utf8ish, start: i8, length: i8) -> bool {
        let p = input.0.as_slice();
        let (start, length) = (isize::from(start), isize::from(length));
        let got = substring_range(p, start, length);
        got.end <= p.len() && got.start <= got.end && got == model_range(p, start, length)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Utf8ish, i8, i8) -> bool);
}

/// Property: taking `(0, 0)` of a non-empty result returns it unchanged.
#[test]
fn whole_of_result_is_idempotent() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: Utf8ish, start: i8, length: i8) -> bool {
        let out = substring_bytes(&input.0, isize::from(start), isize::from(length));
        out.is_empty() || substring_bytes(out, 0, 0) == out
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Utf8ish, i8, i8) -> bool);
}

/// Property: on valid text, the result equals the same window taken over
/// `chars()`.
#[test]
fn text_matches_char_window() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(s: String, start: i8, length: i8) -> bool {
        let chars: Vec<char> = s.chars().collect();
        let total = chars.len();
        let (start, length) = (isize::from(start), isize::from(length));

        let expected: String = {
            let from = if start < 0 {
                total.checked_sub(start.unsigned_abs())
            } else {
                Some(start.unsigned_abs().min(total))
            };
            match from {
                None => String::new(),
                Some(from) => {
                    let rest = &chars[from..];
                    let take = match length {
                        0 => rest.len(),
                        l if l < 0 => rest.len().saturating_sub(l.unsigned_abs()),
                        l => l.unsigned_abs().min(rest.len()),
                    };
                    rest[..take].iter().collect()
                }
            }
        };

        let got = substring_str(&s, start, length);
        got == expected && substring(s.as_bytes(), start, length) == expected.as_bytes()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String, i8, i8) -> bool);
}
