// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `chronoline_engine` over the in-memory document.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};

use chronoline_engine::{Document, MemoryDocument, NodeId, Timeline, classes};
use chronoline_settings::{Key, Options};

/// A document with one `#bench` timeline of `n` items, and its container.
fn document(n: usize) -> (MemoryDocument, NodeId) {
    let mut doc = MemoryDocument::new(Size::new(1280.0, 900.0));
    let body = doc.body();
    let container = doc.element("div", "timeline");
    doc.set_attribute(container, "id", "bench");
    let wrap = doc.element("div", classes::WRAP);
    let items = doc.element("div", classes::ITEMS);
    doc.append_child(body, container);
    doc.append_child(container, wrap);
    doc.append_child(wrap, items);
    doc.set_natural_size(wrap, Size::new(1000.0, 400.0));
    for i in 0..n {
        let item = doc.element("div", "timeline__item");
        let content = doc.element("div", classes::CONTENT);
        let heading = doc.element("h3", "");
        doc.set_text(heading, "Milestone");
        doc.append_child(item, content);
        doc.append_child(content, heading);
        doc.append_child(items, item);
        let i = i as f64;
        doc.set_natural_size(item, Size::new(200.0, 120.0 + (i * 37.0) % 90.0));
        doc.set_rect(item, Rect::new(0.0, i * 250.0, 600.0, i * 250.0 + 200.0));
    }
    (doc, container)
}

fn bench_setup(c: &mut Criterion) {
    let mut group = c.benchmark_group("initialize");
    for &n in &[10_usize, 100, 1000] {
        for mode in ["horizontal", "vertical"] {
            let options = Options::new()
                .set(Key::Mode, mode)
                .set(Key::MaxWidth, 2000)
                .set(Key::MinWidth, 0);
            group.bench_with_input(BenchmarkId::new(mode, n), &n, |b, &n| {
                b.iter_batched(
                    || document(n),
                    |(doc, container)| {
                        let mut timeline = Timeline::new(doc);
                        timeline.initialize(&[container], black_box(&options), 0)
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let (doc, container) = document(200);
    let mut timeline = Timeline::new(doc);
    let options = Options::new().set(Key::Mode, "horizontal").set(Key::MinWidth, 0);
    timeline.initialize(&[container], &options, 0);
    let next = timeline
        .document()
        .find_by_class(container, classes::NAV_NEXT);

    c.bench_function("next_click", |b| {
        b.iter(|| {
            if let Some(next) = next {
                black_box(timeline.dispatch_click(next));
            }
        });
    });
    c.bench_function("api_jump", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 37) % 200;
            if let Some(mut api) = timeline.api("bench") {
                api.set_current_index(i);
                api.update_position();
            }
        });
    });
}

fn bench_relayout(c: &mut Criterion) {
    c.bench_function("resize_relayout_100", |b| {
        b.iter_batched(
            || {
                let (doc, container) = document(100);
                let mut timeline = Timeline::new(doc);
                timeline.initialize(&[container], &Options::new(), 0);
                timeline
            },
            |mut timeline| {
                timeline
                    .document_mut()
                    .set_viewport(Size::new(500.0, 900.0));
                timeline.on_resize(0);
                timeline.advance(1_000);
                timeline
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_setup, bench_navigation, bench_relayout);
criterion_main!(benches);
