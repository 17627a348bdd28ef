#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use runeslice::{codepoint_boundary, codepoint_count, oracle, substring_bytes, substring_range};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    start: i16,
    length: i16,
    bytes: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let p = input.bytes;
    let bounds = oracle::boundaries(p);
    let total = bounds.len() - 1;

    assert_eq!(codepoint_count(p), total);
    for (n, &offset) in bounds.iter().enumerate() {
        assert_eq!(codepoint_boundary(p, n), (offset, true), "n = {n}");
    }
    assert_eq!(codepoint_boundary(p, total + 1), (p.len(), false));

    let (start, length) = (isize::from(input.start), isize::from(input.length));
    let range = substring_range(p, start, length);
    assert!(range.start <= range.end && range.end <= p.len());
    assert!(bounds.binary_search(&range.start).is_ok());
    assert!(bounds.binary_search(&range.end).is_ok());

    let out = substring_bytes(p, start, length);
    assert_eq!(out, &p[range]);
    if !out.is_empty() {
        assert_eq!(substring_bytes(out, 0, 0), out);
    }

    if let Ok(s) = core::str::from_utf8(p) {
        let sub = runeslice::substring_str(s, start, length);
        assert_eq!(sub.as_bytes(), out);
    }
});
