// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Watch the placement algorithm pick spots.
//!
//! Builds a cramped canvas by hand and prints where each successive
//! linked page lands: the side priority for a first child, the skip past
//! occupied spots, and the beyond-the-siblings extension.
//!
//! Run:
//! - `cargo run -p trellis_demos --example placement_walk`

use kurbo::{Rect, Size};
use trellis_page_tree::{LayoutConfig, NoteId, PageContent, PageId, PageTree};
use trellis_placement::{DEFAULT_GAP, place_linked_page};

const PAGE: Size = Size::new(200.0, 200.0);

fn place_and_link(
    tree: &mut PageTree,
    config: &LayoutConfig,
    anchor: PageId,
    note: u64,
) -> Option<PageId> {
    let rect = place_linked_page(tree, anchor, PAGE, DEFAULT_GAP)?;
    println!(
        "  note {note} under {anchor:?} -> ({:.0},{:.0})..({:.0},{:.0})",
        rect.x0, rect.y0, rect.x1, rect.y1
    );
    let id = tree.insert(NoteId::new(note), rect, &PageContent::sized(PAGE));
    tree.set_parent(id, Some(anchor), config);
    Some(id)
}

fn main() {
    let mut tree = PageTree::new();
    let config = LayoutConfig::default();
    let content = PageContent::sized(PAGE);

    let anchor = tree.insert(NoteId::new(1), Rect::new(0.0, 0.0, 200.0, 200.0), &content);
    // Wall off the right and bottom candidate spots.
    tree.insert(NoteId::new(2), Rect::new(250.0, 0.0, 450.0, 200.0), &content);
    tree.insert(NoteId::new(3), Rect::new(0.0, 250.0, 200.0, 450.0), &content);

    println!("first child skips the walled-off right spot:");
    let first = place_and_link(&mut tree, &config, anchor, 10).unwrap();

    println!("second child extends past the first:");
    let second = place_and_link(&mut tree, &config, anchor, 11).unwrap();

    println!("a grandchild would land back on the anchor, so it walks on:");
    place_and_link(&mut tree, &config, first, 12).unwrap();

    println!("children of {anchor:?}: {:?}", tree.children(anchor));
    println!(
        "edges: first {:?}, second {:?}",
        tree.edge_from_parent(first),
        tree.edge_from_parent(second)
    );
}
