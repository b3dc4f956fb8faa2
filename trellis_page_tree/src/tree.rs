// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page-node arena: ownership, links, z-order, and canvas queries.

use alloc::vec::Vec;
use hashbrown::HashMap;
use kurbo::{Point, Rect, Size, Vec2};
use smallvec::SmallVec;

use crate::{Edge, LayoutConfig, NoteId, PageComponent, PageContent, PageId, frames};

/// Internal node record.
///
/// Geometry beyond `content_rect` is derived on demand; `edge_from_parent`
/// is the only cached derived value.
#[derive(Clone, Debug)]
struct PageNode {
    note: NoteId,
    content_rect: Rect,
    min_size: Size,
    locked_aspect_ratio: Option<f64>,
    selected: bool,
    enabled: bool,
    parent: Option<PageId>,
    children: SmallVec<[PageId; 4]>,
    edge_from_parent: Option<Edge>,
}

/// Arena of page nodes for one canvas.
///
/// The tree is the sole owner of its nodes; parent/child links are ids, so
/// removing a subtree can never leave a dangling reference, only a stale id
/// that all lookups answer with `None` or an empty result.
///
/// Frame queries take the [`LayoutConfig`] by reference on every call; the
/// tree never caches frame geometry.
#[derive(Clone, Debug, Default)]
pub struct PageTree {
    nodes: HashMap<PageId, PageNode>,
    /// Paint order, back to front; also the tie-break order for queries.
    order: Vec<PageId>,
    /// High-water mark for allocated ids. Ids are never reused.
    next_id: u64,
    /// Translation from page-space to canvas-space.
    origin: Vec2,
}

impl PageTree {
    /// An empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` refers to a live node.
    #[must_use]
    pub fn contains(&self, id: PageId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Translation from page-space to canvas-space.
    #[must_use]
    pub fn canvas_origin(&self) -> Vec2 {
        self.origin
    }

    /// Set the translation from page-space to canvas-space.
    ///
    /// Edge classifications are invariant under this translation, so cached
    /// edges stay valid.
    pub fn set_canvas_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    /// Convert a page-space point to canvas-space.
    #[must_use]
    pub fn page_to_canvas(&self, point: Point) -> Point {
        point + self.origin
    }

    /// Convert a canvas-space point to page-space.
    #[must_use]
    pub fn canvas_to_page(&self, point: Point) -> Point {
        point - self.origin
    }

    /// Insert a new, parentless node displaying `note`.
    ///
    /// `rect` is in page-space and is clamped to the content's minimum
    /// size. The new node goes on top of the paint order.
    pub fn insert(&mut self, note: NoteId, rect: Rect, content: &PageContent) -> PageId {
        self.next_id += 1;
        let id = PageId(self.next_id);
        self.insert_node(id, note, rect, content);
        id
    }

    /// Insert a node under a previously allocated id, as when restoring a
    /// closed subtree.
    ///
    /// Returns `false` (and does nothing) if the id is still live. The
    /// allocation high-water mark moves past `id`, so restored ids keep the
    /// never-reused guarantee.
    pub fn insert_with_id(
        &mut self,
        id: PageId,
        note: NoteId,
        rect: Rect,
        content: &PageContent,
    ) -> bool {
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.next_id = self.next_id.max(id.0);
        self.insert_node(id, note, rect, content);
        true
    }

    fn insert_node(&mut self, id: PageId, note: NoteId, rect: Rect, content: &PageContent) {
        self.nodes.insert(
            id,
            PageNode {
                note,
                content_rect: frames::raise_to_min(rect, content.min_size),
                min_size: content.min_size,
                locked_aspect_ratio: content.locked_aspect_ratio,
                selected: false,
                enabled: false,
                parent: None,
                children: SmallVec::new(),
                edge_from_parent: None,
            },
        );
        self.order.push(id);
    }

    /// Remove a node and all of its descendants, bottom-up.
    ///
    /// Returns the removed ids, deepest first. A stale id removes nothing.
    pub fn remove(&mut self, id: PageId) -> Vec<PageId> {
        let mut removed = Vec::new();
        if !self.nodes.contains_key(&id) {
            return removed;
        }
        if let Some(parent) = self.nodes.get(&id).and_then(|n| n.parent)
            && let Some(p) = self.nodes.get_mut(&parent)
        {
            p.children.retain(|c| *c != id);
        }
        self.remove_subtree(id, &mut removed);
        removed
    }

    fn remove_subtree(&mut self, id: PageId, removed: &mut Vec<PageId>) {
        let children: SmallVec<[PageId; 4]> = self
            .nodes
            .get(&id)
            .map(|n| n.children.clone())
            .unwrap_or_default();
        for child in children {
            if let Some(n) = self.nodes.get_mut(&child) {
                n.parent = None;
            }
            self.remove_subtree(child, removed);
        }
        if self.nodes.remove(&id).is_some() {
            self.order.retain(|o| *o != id);
            removed.push(id);
        }
    }

    /// The note a node displays.
    #[must_use]
    pub fn note(&self, id: PageId) -> Option<NoteId> {
        self.nodes.get(&id).map(|n| n.note)
    }

    /// A node's authoritative page-space content rectangle.
    #[must_use]
    pub fn content_rect(&self, id: PageId) -> Option<Rect> {
        self.nodes.get(&id).map(|n| n.content_rect)
    }

    /// A node's minimum content size.
    #[must_use]
    pub fn min_size(&self, id: PageId) -> Option<Size> {
        self.nodes.get(&id).map(|n| n.min_size)
    }

    /// A node's locked width-over-height ratio, if its content has one.
    #[must_use]
    pub fn locked_aspect_ratio(&self, id: PageId) -> Option<f64> {
        self.nodes.get(&id).and_then(|n| n.locked_aspect_ratio)
    }

    /// Write a node's content rectangle, clamped to its minimum size.
    ///
    /// Refreshes the node's own edge classification and those of its
    /// children. Returns `false` for a stale id.
    pub fn set_content_rect(&mut self, id: PageId, rect: Rect, config: &LayoutConfig) -> bool {
        let Some(node) = self.nodes.get_mut(&id) else {
            return false;
        };
        node.content_rect = frames::raise_to_min(rect, node.min_size);
        self.refresh_edges_around(id, config);
        true
    }

    /// Translate a node's content rectangle by `delta`.
    pub fn translate(&mut self, id: PageId, delta: Vec2, config: &LayoutConfig) -> bool {
        match self.content_rect(id) {
            Some(rect) => {
                let moved = rect.with_origin(rect.origin() + delta);
                self.set_content_rect(id, moved, config)
            }
            None => false,
        }
    }

    /// A node's parent, if it is linked under one.
    #[must_use]
    pub fn parent(&self, id: PageId) -> Option<PageId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    /// A node's children in insertion order, which is their z-order among
    /// siblings. Empty for a stale id.
    #[must_use]
    pub fn children(&self, id: PageId) -> &[PageId] {
        self.nodes.get(&id).map_or(&[], |n| n.children.as_slice())
    }

    /// All descendants of a node, depth-first. Does not include the node.
    #[must_use]
    pub fn descendants(&self, id: PageId) -> Vec<PageId> {
        let mut out = Vec::new();
        let mut stack: Vec<PageId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Link a node under a parent (or unlink it with `None`) and refresh
    /// its edge classification.
    ///
    /// Linking appends to the parent's child list, putting the node last in
    /// sibling z-order. Refuses (returning `false`) a stale id, a stale
    /// parent, or a parent inside the node's own subtree.
    pub fn set_parent(&mut self, id: PageId, parent: Option<PageId>, config: &LayoutConfig) -> bool {
        if !self.nodes.contains_key(&id) {
            return false;
        }
        if let Some(p) = parent {
            // A parent inside the node's own subtree would make the link
            // structure cyclic; refuse rather than corrupt.
            if !self.nodes.contains_key(&p) || self.in_subtree(p, id) {
                return false;
            }
        }
        let old = self.nodes.get(&id).and_then(|n| n.parent);
        if old == parent {
            return true;
        }
        if let Some(old_parent) = old
            && let Some(n) = self.nodes.get_mut(&old_parent)
        {
            n.children.retain(|c| *c != id);
        }
        if let Some(new_parent) = parent
            && let Some(n) = self.nodes.get_mut(&new_parent)
        {
            n.children.push(id);
        }
        if let Some(n) = self.nodes.get_mut(&id) {
            n.parent = parent;
        }
        self.refresh_edge(id, config);
        true
    }

    /// The cached side of its parent a node sits on; `None` for parentless
    /// or stale nodes.
    #[must_use]
    pub fn edge_from_parent(&self, id: PageId) -> Option<Edge> {
        self.nodes.get(&id).and_then(|n| n.edge_from_parent)
    }

    /// Re-derive every node's edge classification.
    ///
    /// Geometry writes keep classifications current on their own; this is
    /// for when `config` itself changes and every layout frame moves.
    pub fn refresh_edges(&mut self, config: &LayoutConfig) {
        let ids: Vec<PageId> = self.order.clone();
        for id in ids {
            self.refresh_edge(id, config);
        }
    }

    /// Whether a node is selected.
    #[must_use]
    pub fn is_selected(&self, id: PageId) -> bool {
        self.nodes.get(&id).is_some_and(|n| n.selected)
    }

    /// Set a node's selected flag. Returns whether the flag changed.
    pub fn set_selected(&mut self, id: PageId, selected: bool) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) if node.selected != selected => {
                node.selected = selected;
                true
            }
            _ => false,
        }
    }

    /// The selected nodes in paint order.
    #[must_use]
    pub fn selected_pages(&self) -> Vec<PageId> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.is_selected(*id))
            .collect()
    }

    /// The node currently enabled for in-place editing, if any.
    #[must_use]
    pub fn enabled_page(&self) -> Option<PageId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.nodes.get(id).is_some_and(|n| n.enabled))
    }

    /// Enable at most one node for in-place editing.
    ///
    /// Any previously enabled node is disabled first; passing `None` (or a
    /// stale id) just disables. Returns whether anything changed.
    pub fn set_enabled(&mut self, id: Option<PageId>) -> bool {
        let target = id.filter(|id| self.nodes.contains_key(id));
        let mut changed = false;
        for (node_id, node) in &mut self.nodes {
            let enable = target == Some(*node_id);
            if node.enabled != enable {
                node.enabled = enable;
                changed = true;
            }
        }
        changed
    }

    /// All nodes in paint order, back to front.
    pub fn pages(&self) -> impl Iterator<Item = PageId> + '_ {
        self.order.iter().copied()
    }

    /// Move a node to the front of the paint order.
    ///
    /// Returns whether the order changed.
    pub fn bring_to_front(&mut self, id: PageId) -> bool {
        match self.order.iter().position(|o| *o == id) {
            Some(pos) if pos + 1 != self.order.len() => {
                self.order.remove(pos);
                self.order.push(id);
                true
            }
            _ => false,
        }
    }

    /// The topmost node whose pick region contains the canvas-space point.
    ///
    /// The pick region is the layout frame united with the visual frame
    /// grown by the handle overhang, so protruding handle halves are
    /// clickable. The resolved node's [`component_at`](Self::component_at)
    /// may still be `None` there.
    #[must_use]
    pub fn page_at(&self, point: Point, config: &LayoutConfig) -> Option<PageId> {
        self.order
            .iter()
            .rev()
            .copied()
            .find(|id| self.pick_frame(*id, config).is_some_and(|f| f.contains(point)))
    }

    /// Nodes whose visual frame overlaps the canvas-space rectangle, in
    /// paint order. Touching edges do not count as overlap.
    #[must_use]
    pub fn pages_in_rect(&self, rect: Rect, config: &LayoutConfig) -> Vec<PageId> {
        self.order
            .iter()
            .copied()
            .filter(|id| {
                self.visual_frame(*id, config)
                    .is_some_and(|f| f.intersect(rect).area() > 0.0)
            })
            .collect()
    }

    /// Which component of a node a canvas-space point lands on.
    #[must_use]
    pub fn component_at(
        &self,
        id: PageId,
        point: Point,
        config: &LayoutConfig,
    ) -> Option<PageComponent> {
        let content = self.canvas_content_rect(id)?;
        frames::component_at(content, point, config)
    }

    /// A node's layout frame (visual frame plus shadow) in canvas-space.
    #[must_use]
    pub fn layout_frame(&self, id: PageId, config: &LayoutConfig) -> Option<Rect> {
        Some(frames::layout_frame_for(self.canvas_content_rect(id)?, config))
    }

    /// A node's visual frame (border, title bar, content) in canvas-space.
    #[must_use]
    pub fn visual_frame(&self, id: PageId, config: &LayoutConfig) -> Option<Rect> {
        Some(frames::visual_frame_for(self.canvas_content_rect(id)?, config))
    }

    /// A node's title-bar strip in canvas-space.
    #[must_use]
    pub fn title_bar_frame(&self, id: PageId, config: &LayoutConfig) -> Option<Rect> {
        Some(frames::title_bar_frame_for(
            self.canvas_content_rect(id)?,
            config,
        ))
    }

    /// A node's content container in canvas-space.
    #[must_use]
    pub fn content_container_frame(&self, id: PageId, config: &LayoutConfig) -> Option<Rect> {
        Some(frames::content_container_for(
            self.canvas_content_rect(id)?,
            config,
        ))
    }

    fn canvas_content_rect(&self, id: PageId) -> Option<Rect> {
        let rect = self.content_rect(id)?;
        Some(rect.with_origin(rect.origin() + self.origin))
    }

    fn pick_frame(&self, id: PageId, config: &LayoutConfig) -> Option<Rect> {
        let content = self.canvas_content_rect(id)?;
        let visual = frames::visual_frame_for(content, config);
        let o = config.handle_overhang();
        Some((visual + config.shadow_margins()).union(visual.inflate(o, o)))
    }

    fn in_subtree(&self, id: PageId, root: PageId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == root {
                return true;
            }
            cursor = self.nodes.get(&current).and_then(|n| n.parent);
        }
        false
    }

    fn refresh_edge(&mut self, id: PageId, config: &LayoutConfig) {
        let edge = self.nodes.get(&id).and_then(|node| {
            let parent = self.nodes.get(&node.parent?)?;
            // The translation to canvas-space shifts both frames equally,
            // so classification happens in page-space.
            let m = frames::layout_frame_for(node.content_rect, config).center();
            let p = frames::layout_frame_for(parent.content_rect, config);
            Some(frames::edge_between(m, p))
        });
        if let Some(node) = self.nodes.get_mut(&id) {
            node.edge_from_parent = edge;
        }
    }

    fn refresh_edges_around(&mut self, id: PageId, config: &LayoutConfig) {
        self.refresh_edge(id, config);
        let children: SmallVec<[PageId; 4]> = self
            .nodes
            .get(&id)
            .map(|n| n.children.clone())
            .unwrap_or_default();
        for child in children {
            self.refresh_edge(child, config);
        }
    }
}
