#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use runeslice::{codepoint_boundary, codepoint_count, substring};

/// Deterministically create a text payload of roughly `target_len` bytes.
fn make_payload(target_len: usize, unit: &str) -> String {
    let mut s = String::with_capacity(target_len + unit.len());
    while s.len() < target_len {
        s.push_str(unit);
    }
    s
}

/// Same as [`make_payload`] but with a stray continuation byte every 16 bytes.
fn make_malformed_payload(target_len: usize) -> Vec<u8> {
    let mut out = make_payload(target_len, "abcdefghijklmno").into_bytes();
    for (i, b) in out.iter_mut().enumerate() {
        if i % 16 == 15 {
            *b = 0x80;
        }
    }
    out
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    for &len in &[1_024usize, 64 * 1_024, 1_024 * 1_024] {
        group.throughput(Throughput::Bytes(len as u64));

        for (label, payload) in [
            ("ascii", make_payload(len, "the quick brown fox ")),
            ("mixed", make_payload(len, "añb€😀 ")),
            ("cjk", make_payload(len, "日本語テキスト")),
        ] {
            group.bench_with_input(BenchmarkId::new(format!("count/{label}"), len), &payload, |b, p| {
                b.iter(|| codepoint_count(black_box(p.as_str())));
            });
            group.bench_with_input(
                BenchmarkId::new(format!("boundary/{label}"), len),
                &payload,
                |b, p| b.iter(|| codepoint_boundary(black_box(p.as_str()), black_box(usize::MAX))),
            );
        }

        let malformed = make_malformed_payload(len);
        group.bench_with_input(BenchmarkId::new("count/malformed", len), &malformed, |b, p| {
            b.iter(|| codepoint_count(black_box(p.as_slice())));
        });
    }
    group.finish();
}

fn bench_substring(c: &mut Criterion) {
    let mut group = c.benchmark_group("substring");
    let payload = make_payload(64 * 1_024, "añb€😀 ");
    for &(start, length) in &[(0isize, 0isize), (100, 100), (-100, 50), (-500, -250)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{start},{length}")),
            &payload,
            |b, p| b.iter(|| substring(black_box(p.as_str()), start, length).len()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_scan, bench_substring);
criterion_main!(benches);
