// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration tests for automatic placement and the close/reopen cycle.

use kurbo::{Rect, Size};
use trellis_page_tree::{Edge, LayoutConfig, NoteId, PageContent, PageTree};
use trellis_placement::{DEFAULT_GAP, SnapshotStore, place_linked_page};

fn sized(w: f64, h: f64) -> PageContent {
    PageContent::sized(Size::new(w, h))
}

const SQUARE: Size = Size::new(200.0, 200.0);

#[test]
fn first_link_takes_the_first_free_side_in_priority_order() {
    let mut tree = PageTree::new();
    let anchor = tree.insert(NoteId::new(1), Rect::new(0.0, 0.0, 200.0, 200.0), &sized(200.0, 200.0));
    // One page already sits to the anchor's right and one below it, so the
    // right and below candidates collide and left is the first free side.
    tree.insert(NoteId::new(2), Rect::new(250.0, 0.0, 450.0, 200.0), &sized(200.0, 200.0));
    tree.insert(NoteId::new(3), Rect::new(0.0, 250.0, 200.0, 450.0), &sized(200.0, 200.0));

    let rect = place_linked_page(&tree, anchor, SQUARE, DEFAULT_GAP);
    assert_eq!(rect, Some(Rect::new(-220.0, 0.0, -20.0, 200.0)));
}

#[test]
fn a_linked_anchor_tries_the_side_opposite_its_own_edge_first() {
    let config = LayoutConfig::default();
    let mut tree = PageTree::new();
    let parent = tree.insert(
        NoteId::new(1),
        Rect::new(0.0, -1000.0, 200.0, -800.0),
        &sized(200.0, 200.0),
    );
    let anchor = tree.insert(NoteId::new(2), Rect::new(0.0, 0.0, 200.0, 200.0), &sized(200.0, 200.0));
    tree.set_parent(anchor, Some(parent), &config);
    assert_eq!(tree.edge_from_parent(anchor), Some(Edge::Bottom));

    // The anchor hangs off its parent's bottom edge, so its own first child
    // is tried above first, into the open space back toward the parent.
    let rect = place_linked_page(&tree, anchor, SQUARE, DEFAULT_GAP);
    assert_eq!(rect, Some(Rect::new(0.0, -220.0, 200.0, -20.0)));
}

#[test]
fn when_every_side_collides_the_right_candidate_wins_anyway() {
    let mut tree = PageTree::new();
    let anchor = tree.insert(NoteId::new(1), Rect::new(0.0, 0.0, 200.0, 200.0), &sized(200.0, 200.0));
    for (note, rect) in [
        (2, Rect::new(220.0, 0.0, 420.0, 200.0)),
        (3, Rect::new(-220.0, 0.0, -20.0, 200.0)),
        (4, Rect::new(0.0, 220.0, 200.0, 420.0)),
        (5, Rect::new(0.0, -220.0, 200.0, -20.0)),
    ] {
        tree.insert(NoteId::new(note), rect, &sized(200.0, 200.0));
    }

    let rect = place_linked_page(&tree, anchor, SQUARE, DEFAULT_GAP);
    assert_eq!(rect, Some(Rect::new(220.0, 0.0, 420.0, 200.0)));
}

#[test]
fn a_second_link_extends_past_the_first_child() {
    let config = LayoutConfig::default();
    let mut tree = PageTree::new();
    let anchor = tree.insert(NoteId::new(1), Rect::new(0.0, 0.0, 200.0, 200.0), &sized(200.0, 200.0));
    let first = tree.insert(NoteId::new(2), Rect::new(220.0, 0.0, 420.0, 200.0), &sized(200.0, 200.0));
    tree.set_parent(first, Some(anchor), &config);

    let rect = place_linked_page(&tree, anchor, SQUARE, DEFAULT_GAP);
    assert_eq!(rect, Some(Rect::new(440.0, 0.0, 640.0, 200.0)));
}

#[test]
fn the_combined_frame_ignores_children_on_other_sides() {
    let config = LayoutConfig::default();
    let mut tree = PageTree::new();
    let anchor = tree.insert(NoteId::new(1), Rect::new(0.0, 0.0, 200.0, 200.0), &sized(200.0, 200.0));
    let right_a = tree.insert(NoteId::new(2), Rect::new(220.0, 0.0, 420.0, 200.0), &sized(200.0, 200.0));
    let right_b = tree.insert(NoteId::new(3), Rect::new(220.0, 220.0, 420.0, 420.0), &sized(200.0, 200.0));
    let below = tree.insert(NoteId::new(4), Rect::new(0.0, 250.0, 200.0, 450.0), &sized(200.0, 200.0));
    tree.set_parent(right_a, Some(anchor), &config);
    tree.set_parent(right_b, Some(anchor), &config);
    tree.set_parent(below, Some(anchor), &config);

    // The first child fixes the direction as rightward; both rightward
    // children form the combined frame and the one below drops out. The new
    // page clears the union of the two, not just the first child.
    let rect = place_linked_page(&tree, anchor, SQUARE, DEFAULT_GAP);
    assert_eq!(rect, Some(Rect::new(440.0, 0.0, 640.0, 200.0)));
}

#[test]
fn sibling_extension_leans_back_toward_the_anchor_midline() {
    let config = LayoutConfig::default();
    let mut tree = PageTree::new();
    let anchor = tree.insert(NoteId::new(1), Rect::new(0.0, 0.0, 200.0, 200.0), &sized(200.0, 200.0));
    // The existing child sits high: its center is above the anchor's, so
    // the next sibling aligns to the combined frame's bottom edge.
    let high = tree.insert(NoteId::new(2), Rect::new(220.0, -100.0, 420.0, 100.0), &sized(200.0, 200.0));
    tree.set_parent(high, Some(anchor), &config);

    let rect = place_linked_page(&tree, anchor, SQUARE, DEFAULT_GAP);
    assert_eq!(rect, Some(Rect::new(440.0, -100.0, 640.0, 100.0)));
}

#[test]
fn a_stale_anchor_yields_no_rectangle() {
    let mut tree = PageTree::new();
    let anchor = tree.insert(NoteId::new(1), Rect::new(0.0, 0.0, 200.0, 200.0), &sized(200.0, 200.0));
    tree.remove(anchor);
    assert_eq!(place_linked_page(&tree, anchor, SQUARE, DEFAULT_GAP), None);
}

#[test]
fn closing_and_reopening_restores_placed_geometry() {
    let config = LayoutConfig::default();
    let mut tree = PageTree::new();
    let anchor = tree.insert(NoteId::new(1), Rect::new(0.0, 0.0, 200.0, 200.0), &sized(200.0, 200.0));

    let placed = place_linked_page(&tree, anchor, SQUARE, DEFAULT_GAP).unwrap();
    let child = tree.insert(NoteId::new(2), placed, &sized(200.0, 200.0));
    tree.set_parent(child, Some(anchor), &config);

    let mut store = SnapshotStore::new();
    assert!(store.close_subtree(&mut tree, anchor, child));
    assert!(!tree.contains(child));

    let reopened = store.reopen(&mut tree, anchor, NoteId::new(2), &config);
    assert_eq!(reopened, Some(child));
    assert_eq!(tree.content_rect(child), Some(placed));
    assert_eq!(tree.parent(child), Some(anchor));
    assert_eq!(tree.edge_from_parent(child), Some(Edge::Right));
}
