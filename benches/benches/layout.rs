// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the pure layout math in `chronoline_layout` and settings
//! resolution in `chronoline_settings`.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use chronoline_layout::{Cursor, Direction, HorizontalScale, RowLayout, reveal_plan};
use chronoline_settings::{Attributes, HorizontalStart, Key, Options, Side, resolve};

/// Deterministic card heights between 80 and 280px.
fn heights(n: usize) -> Vec<f64> {
    let mut state = 0x2545_f491_u32;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            80.0 + f64::from(state % 200)
        })
        .collect()
}

fn bench_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_layout");
    for &n in &[16_usize, 256, 4096] {
        let hs = heights(n);
        group.bench_with_input(BenchmarkId::new("alternating", n), &hs, |b, hs| {
            b.iter(|| RowLayout::compute(black_box(hs), HorizontalStart::Top, None));
        });
        group.bench_with_input(BenchmarkId::new("same_side", n), &hs, |b, hs| {
            b.iter(|| RowLayout::compute(black_box(hs), HorizontalStart::Top, Some(Side::Bottom)));
        });
    }
    group.finish();
}

fn bench_scale(c: &mut Criterion) {
    c.bench_function("scale_for_viewport_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for h in (200..1400).step_by(7) {
                acc += HorizontalScale::for_viewport_height(black_box(f64::from(h))).node_width;
            }
            acc
        });
    });
}

fn bench_cursor(c: &mut Criterion) {
    c.bench_function("cursor_walk_1024", |b| {
        b.iter(|| {
            let mut cursor = Cursor::start_at(1024, 3, 0, false);
            while cursor.advance(Direction::Next, black_box(1)) {}
            while cursor.advance(Direction::Previous, black_box(2)) {}
            cursor.revision()
        });
    });
}

fn bench_reveal(c: &mut Criterion) {
    let flags: Vec<bool> = (0..4096).map(|i| i % 97 == 0 && i < 2048).collect();
    c.bench_function("reveal_plan_4096", |b| {
        b.iter(|| reveal_plan(black_box(&flags)));
    });
}

fn bench_resolve(c: &mut Criterion) {
    let attributes = Attributes::from_pairs([
        ("data-mode", "horizontal"),
        ("data-horizontal-start-position", "bottom"),
        ("data-move-items", "2"),
        ("data-start-index", "3"),
        ("data-vertical-trigger", "120px"),
        ("data-same-side-nodes", "bottom"),
        ("data-node-color", "#336699"),
    ]);
    let options = Options::new()
        .set(Key::MinWidth, 480)
        .set(Key::RtlMode, true)
        .set(Key::UseSwiper, "auto");
    c.bench_function("resolve_settings", |b| {
        b.iter(|| resolve(black_box(&attributes), black_box(&options), 24));
    });
}

criterion_group!(
    benches,
    bench_rows,
    bench_scale,
    bench_cursor,
    bench_reveal,
    bench_resolve
);
criterion_main!(benches);
