// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-subtree snapshots and the store that holds them.
//!
//! Closing a linked page removes its whole subtree from the tree but first
//! records everything needed to bring it back: ids, notes, rectangles, and
//! link structure. Reopening the same note from the same anchor restores
//! the subtree exactly as it was, original ids included, so references held
//! elsewhere stay valid across a close and reopen.

use alloc::vec::Vec;
use hashbrown::HashMap;
use kurbo::{Rect, Size};
use trellis_page_tree::{LayoutConfig, NoteId, PageContent, PageId, PageTree};

/// Everything needed to rebuild one node and its descendants.
#[derive(Clone, Debug)]
pub struct SubtreeSnapshot {
    /// The id the node had, and will have again after a reopen.
    pub id: PageId,
    /// The note the node displays.
    pub note: NoteId,
    /// Page-space content rectangle at close time.
    pub rect: Rect,
    /// Minimum content size to re-impose on restore.
    pub min_size: Size,
    /// Fixed width-over-height ratio, if the content has one.
    pub locked_aspect_ratio: Option<f64>,
    /// Child subtrees in their original order.
    pub children: Vec<SubtreeSnapshot>,
}

/// Record a node and all of its descendants. Returns `None` for a stale id.
#[must_use]
pub fn capture_subtree(tree: &PageTree, root: PageId) -> Option<SubtreeSnapshot> {
    let note = tree.note(root)?;
    let rect = tree.content_rect(root)?;
    let min_size = tree.min_size(root)?;
    let children = tree
        .children(root)
        .iter()
        .filter_map(|&child| capture_subtree(tree, child))
        .collect();
    Some(SubtreeSnapshot {
        id: root,
        note,
        rect,
        min_size,
        locked_aspect_ratio: tree.locked_aspect_ratio(root),
        children,
    })
}

/// Snapshots of closed subtrees, keyed by the anchor they were closed from
/// and the note the closed page displayed.
///
/// Each entry is consumed by the reopen that uses it; closing the same note
/// from the same anchor again replaces whatever the store held for that
/// pair.
#[derive(Clone, Debug, Default)]
pub struct SnapshotStore {
    entries: HashMap<(PageId, NoteId), SubtreeSnapshot>,
}

impl SnapshotStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of subtrees currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a snapshot exists for this anchor and note.
    #[must_use]
    pub fn contains(&self, anchor: PageId, note: NoteId) -> bool {
        self.entries.contains_key(&(anchor, note))
    }

    /// Capture `page`'s subtree under the `(anchor, note)` key and remove
    /// it from the tree. An earlier snapshot for the same key is replaced.
    ///
    /// Returns `false`, leaving both the tree and the store untouched, if
    /// `page` is stale.
    pub fn close_subtree(&mut self, tree: &mut PageTree, anchor: PageId, page: PageId) -> bool {
        let Some(snapshot) = capture_subtree(tree, page) else {
            return false;
        };
        self.entries.insert((anchor, snapshot.note), snapshot);
        tree.remove(page);
        true
    }

    /// Restore the subtree closed from `anchor` for `note`, linking its
    /// root back under `anchor`. The snapshot is consumed; a second reopen
    /// of the same pair returns `None`.
    ///
    /// Also returns `None`, without consuming the snapshot, when there is
    /// no matching entry, the anchor is stale, or a live page already owns
    /// the root's id.
    pub fn reopen(
        &mut self,
        tree: &mut PageTree,
        anchor: PageId,
        note: NoteId,
        config: &LayoutConfig,
    ) -> Option<PageId> {
        if !tree.contains(anchor) || tree.contains(self.entries.get(&(anchor, note))?.id) {
            return None;
        }
        let snapshot = self.entries.remove(&(anchor, note))?;
        let root = snapshot.id;
        restore_node(tree, &snapshot, Some(anchor), config);
        Some(root)
    }
}

fn restore_node(
    tree: &mut PageTree,
    snapshot: &SubtreeSnapshot,
    parent: Option<PageId>,
    config: &LayoutConfig,
) {
    let content = PageContent {
        natural_size: snapshot.rect.size(),
        min_size: snapshot.min_size,
        locked_aspect_ratio: snapshot.locked_aspect_ratio,
    };
    if !tree.insert_with_id(snapshot.id, snapshot.note, snapshot.rect, &content) {
        // The id came back to life some other way; leave that page alone
        // and drop this branch of the snapshot.
        return;
    }
    tree.set_parent(snapshot.id, parent, config);
    for child in &snapshot.children {
        restore_node(tree, child, Some(snapshot.id), config);
    }
}
