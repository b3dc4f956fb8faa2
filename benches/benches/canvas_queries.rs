// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for canvas-space queries and the event dispatch path.
//!
//! The synthetic canvas is a deterministic grid of pages, sized to
//! approximate a well-used note canvas rather than a worst case.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use std::time::Duration;
use trellis_canvas::CanvasEngine;
use trellis_interaction::PointerInput;
use trellis_page_tree::{LayoutConfig, NoteId, PageContent, PageTree};

const PAGE: Size = Size::new(200.0, 150.0);
const COLUMNS: usize = 16;

fn grid_tree(count: usize) -> PageTree {
    let mut tree = PageTree::new();
    let content = PageContent::sized(PAGE);
    for i in 0..count {
        let col = (i % COLUMNS) as f64;
        let row = (i / COLUMNS) as f64;
        let origin = Point::new(col * 220.0, row * 170.0);
        tree.insert(
            NoteId::new(i as u64),
            Rect::from_origin_size(origin, PAGE),
            &content,
        );
    }
    tree
}

fn grid_engine(count: usize) -> CanvasEngine {
    let mut engine = CanvasEngine::new(LayoutConfig::default(), Size::new(4000.0, 3000.0));
    let content = PageContent::sized(PAGE);
    for i in 0..count {
        let col = (i % COLUMNS) as f64;
        let row = (i / COLUMNS) as f64;
        let origin = Point::new(col * 220.0, row * 170.0);
        engine.insert_page(
            NoteId::new(i as u64),
            Rect::from_origin_size(origin, PAGE),
            &content,
        );
    }
    engine
}

fn bench_page_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_tree/page_at");
    let config = LayoutConfig::default();

    for count in [64usize, 256, 1024] {
        let tree = grid_tree(count);
        // The first-inserted page sits at the back of the paint order, so
        // hitting it walks the whole order; a miss always does.
        let backmost = Point::new(100.0, 75.0);
        let miss = Point::new(-500.0, -500.0);

        group.bench_with_input(BenchmarkId::new("hit_backmost", count), &tree, |b, tree| {
            b.iter(|| black_box(tree.page_at(black_box(backmost), &config)));
        });
        group.bench_with_input(BenchmarkId::new("miss", count), &tree, |b, tree| {
            b.iter(|| black_box(tree.page_at(black_box(miss), &config)));
        });
    }
    group.finish();
}

fn bench_pages_in_rect(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_tree/pages_in_rect");
    let config = LayoutConfig::default();
    // Roughly a quarter of the grid at the largest size.
    let marquee = Rect::new(0.0, 0.0, 1800.0, 1400.0);

    for count in [64usize, 256, 1024] {
        let tree = grid_tree(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("marquee", count), &tree, |b, tree| {
            b.iter(|| black_box(tree.pages_in_rect(black_box(marquee), &config)));
        });
    }
    group.finish();
}

fn bench_drag_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/drag_round_trip");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for count in [64usize, 256] {
        group.bench_function(BenchmarkId::new("press_jog_release", count), |b| {
            let mut engine = grid_engine(count);
            let press = PointerInput::new(Point::new(100.0, 75.0));
            let jog = PointerInput::new(Point::new(101.0, 76.0));
            // Jog out and back, so geometry is identical across iterations.
            b.iter(|| {
                engine.pointer_down(&press);
                engine.pointer_dragged(&jog);
                engine.pointer_dragged(&press);
                engine.pointer_up(&press);
                black_box(engine.take_needs_redraw());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_page_at,
    bench_pages_in_rect,
    bench_drag_dispatch
);
criterion_main!(benches);
