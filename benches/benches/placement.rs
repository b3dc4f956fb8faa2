// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for linked-page placement and subtree snapshots.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use std::time::Duration;
use trellis_page_tree::{LayoutConfig, NoteId, PageContent, PageId, PageTree};
use trellis_placement::{DEFAULT_GAP, SnapshotStore, place_linked_page};

const PAGE: Size = Size::new(200.0, 150.0);

/// An anchor with `children` pages already placed under it, each by the
/// same algorithm being measured.
fn anchor_with_children(children: usize) -> (PageTree, PageId) {
    let mut tree = PageTree::new();
    let config = LayoutConfig::default();
    let content = PageContent::sized(PAGE);
    let anchor = tree.insert(NoteId::new(0), Rect::new(0.0, 0.0, 200.0, 150.0), &content);
    for i in 0..children {
        let rect = place_linked_page(&tree, anchor, PAGE, DEFAULT_GAP).unwrap();
        let id = tree.insert(NoteId::new(1 + i as u64), rect, &content);
        tree.set_parent(id, Some(anchor), &config);
    }
    (tree, anchor)
}

/// An anchor with a chain of linked pages hanging off it, `depth` long.
fn chain(depth: usize) -> (PageTree, PageId, PageId) {
    let mut tree = PageTree::new();
    let config = LayoutConfig::default();
    let content = PageContent::sized(PAGE);
    let anchor = tree.insert(NoteId::new(0), Rect::new(0.0, 0.0, 200.0, 150.0), &content);
    let mut parent = anchor;
    let mut first = anchor;
    for i in 0..depth {
        let rect = place_linked_page(&tree, parent, PAGE, DEFAULT_GAP).unwrap();
        let id = tree.insert(NoteId::new(1 + i as u64), rect, &content);
        tree.set_parent(id, Some(parent), &config);
        if i == 0 {
            first = id;
        }
        parent = id;
    }
    (tree, anchor, first)
}

fn bench_place_linked_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/place_linked_page");

    for children in [0usize, 1, 8, 64] {
        let (tree, anchor) = anchor_with_children(children);
        group.bench_with_input(
            BenchmarkId::new("next_child", children),
            &tree,
            |b, tree| {
                b.iter(|| black_box(place_linked_page(tree, anchor, PAGE, DEFAULT_GAP)));
            },
        );
    }
    group.finish();
}

fn bench_snapshot_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/snapshots");
    // Each sample clones the whole tree, so keep the batch count modest.
    group.sample_size(30);
    group.measurement_time(Duration::from_secs(3));
    let config = LayoutConfig::default();

    for depth in [1usize, 8, 64] {
        let setup = chain(depth);
        group.bench_with_input(
            BenchmarkId::new("close_reopen", depth),
            &setup,
            |b, (tree, anchor, first)| {
                b.iter_batched(
                    || (tree.clone(), SnapshotStore::new()),
                    |(mut tree, mut store)| {
                        store.close_subtree(&mut tree, *anchor, *first);
                        let _ = store.reopen(&mut tree, *anchor, NoteId::new(1), &config);
                        black_box(tree.len())
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_place_linked_page, bench_snapshot_cycle);
criterion_main!(benches);
