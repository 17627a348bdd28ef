//! Independent model of the scanner built on `core`'s UTF-8 chunk decoder.
//!
//! Every valid scalar is one unit at its encoded width; every byte of an
//! invalid chunk is one unit of width 1.

use alloc::vec::Vec;

/// Returns every cursor the scanner visits on `p`, starting with `0` and
/// ending with `p.len()`.
#[must_use]
pub fn boundaries(p: &[u8]) -> Vec<usize> {
    let mut out = Vec::with_capacity(p.len() + 1);
    let mut offset = 0;
    out.push(offset);
    for chunk in p.utf8_chunks() {
        for ch in chunk.valid().chars() {
            offset += ch.len_utf8();
            out.push(offset);
        }
        for _ in chunk.invalid() {
            offset += 1;
            out.push(offset);
        }
    }
    out
}

/// Returns the codepoint count the scanner reports for `p`.
#[must_use]
pub fn count(p: &[u8]) -> usize {
    boundaries(p).len() - 1
}
