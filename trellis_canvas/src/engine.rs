// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine that ties tree, gestures, placement, and delegate together.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};
use trellis_interaction::{
    Engine, KeyContext, KeyInput, PointerContext, PointerInput, ResizeLimits,
};
use trellis_page_tree::{LayoutConfig, NoteId, PageComponent, PageContent, PageId, PageTree};
use trellis_placement::{DEFAULT_GAP, SnapshotStore, place_linked_page};

use crate::delegate::CanvasDelegate;

/// The full state behind one canvas view: the page tree, the live input
/// contexts, and the store of closed subtrees.
///
/// Hosts feed raw pointer and key events in through the `pointer_*` and
/// `key_*` methods and paint from the [`PageTree`] the engine owns. Side
/// effects that outlive the engine, such as persistence and link creation,
/// surface through the [`CanvasDelegate`].
///
/// Points and rectangles on this API are in canvas coordinates unless a
/// method says otherwise; conversion to page space happens internally via
/// the tree's canvas origin.
#[derive(Debug)]
pub struct CanvasEngine<D = ()> {
    tree: PageTree,
    config: LayoutConfig,
    canvas_size: Size,
    snapshots: SnapshotStore,
    delegate: D,
    pointer_context: Option<PointerContext>,
    key_context: Option<KeyContext>,
    selection_rect: Option<Rect>,
    hovered: Option<PageId>,
    link_mode: bool,
    needs_redraw: bool,
    selection_revision: u64,
}

impl CanvasEngine {
    /// An engine with no delegate.
    #[must_use]
    pub fn new(config: LayoutConfig, canvas_size: Size) -> Self {
        Self::with_delegate(config, canvas_size, ())
    }
}

impl<D: CanvasDelegate> CanvasEngine<D> {
    /// An engine that reports its side effects to `delegate`.
    #[must_use]
    pub fn with_delegate(config: LayoutConfig, canvas_size: Size, delegate: D) -> Self {
        Self {
            tree: PageTree::new(),
            config,
            canvas_size,
            snapshots: SnapshotStore::new(),
            delegate,
            pointer_context: None,
            key_context: None,
            selection_rect: None,
            hovered: None,
            link_mode: false,
            needs_redraw: true,
            selection_revision: 0,
        }
    }

    /// The page tree, for painting and inspection.
    #[must_use]
    pub fn tree(&self) -> &PageTree {
        &self.tree
    }

    /// The layout configuration behind every frame computation.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replace the layout configuration.
    ///
    /// Layout frames move with it, so every cached edge classification is
    /// re-derived.
    pub fn set_config(&mut self, config: LayoutConfig) {
        if self.config != config {
            self.config = config;
            self.tree.refresh_edges(&self.config);
            self.needs_redraw = true;
        }
    }

    /// Resize the canvas view.
    ///
    /// Existing pages are not re-clamped; gestures respect the new bounds
    /// from the next event on.
    pub fn set_canvas_size(&mut self, size: Size) {
        if self.canvas_size != size {
            self.canvas_size = size;
            self.needs_redraw = true;
        }
    }

    /// The vector added to page-space points to reach canvas space.
    #[must_use]
    pub fn canvas_origin(&self) -> Vec2 {
        self.tree.canvas_origin()
    }

    /// Scroll the canvas by moving its origin.
    pub fn set_canvas_origin(&mut self, origin: Vec2) {
        if self.tree.canvas_origin() != origin {
            self.tree.set_canvas_origin(origin);
            self.needs_redraw = true;
        }
    }

    /// The marquee rectangle while a rubber-band selection is live, in
    /// canvas coordinates.
    #[must_use]
    pub fn selection_rect(&self) -> Option<Rect> {
        self.selection_rect
    }

    /// The page under the pointer as of the last [`pointer_moved`] call.
    ///
    /// [`pointer_moved`]: Self::pointer_moved
    #[must_use]
    pub fn hovered_page(&self) -> Option<PageId> {
        self.hovered
    }

    /// A counter that advances whenever the set of selected pages changes.
    ///
    /// Hosts can compare revisions instead of diffing selection lists.
    #[must_use]
    pub fn selection_revision(&self) -> u64 {
        self.selection_revision
    }

    /// The page enabled for in-place editing, if any.
    #[must_use]
    pub fn enabled_page(&self) -> Option<PageId> {
        self.tree.enabled_page()
    }

    /// Enable at most one page for in-place editing; `None` disables.
    pub fn set_enabled_page(&mut self, page: Option<PageId>) {
        if self.tree.set_enabled(page) {
            self.needs_redraw = true;
        }
    }

    /// The snapshots of closed subtrees, keyed by anchor and note.
    #[must_use]
    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    /// The delegate.
    #[must_use]
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// The delegate, mutably.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// True once anything observable changed since the last call.
    ///
    /// Reading resets the flag, so one paint per batch of events suffices.
    pub fn take_needs_redraw(&mut self) -> bool {
        core::mem::take(&mut self.needs_redraw)
    }

    /// Route a pointer press.
    ///
    /// What the press starts depends on where it lands: a resize handle, a
    /// page body, link mode, or empty canvas each install a different
    /// context. A press while a pointer context is still live discards
    /// that context, since its release evidently went missing.
    pub fn pointer_down(&mut self, input: &PointerInput) {
        self.pointer_context = None;
        let context = PointerContext::begin(self, input);
        self.pointer_context = context;
    }

    /// Route a pointer drag to the live pointer context, if any.
    pub fn pointer_dragged(&mut self, input: &PointerInput) {
        let mut context = self.pointer_context.take();
        if let Some(context) = &mut context {
            context.dragged(self, input);
        }
        self.pointer_context = context;
    }

    /// Route a pointer release, finishing the live pointer context.
    pub fn pointer_up(&mut self, input: &PointerInput) {
        if let Some(context) = self.pointer_context.take() {
            context.up(self, input);
        }
    }

    /// Track the page under an idle pointer for hover feedback.
    pub fn pointer_moved(&mut self, input: &PointerInput) {
        let hovered = self.page_at(input.point);
        if self.hovered != hovered {
            self.hovered = hovered;
            self.needs_redraw = true;
        }
    }

    /// Route a key press. Returns whether the key was consumed.
    ///
    /// The first arrow, delete, or backspace press installs a keyboard
    /// context; repeats and further recognized presses go to the live one.
    /// Keys outside that vocabulary are never consumed, with or without a
    /// live context. A keyboard context runs independently of any pointer
    /// context.
    pub fn key_down(&mut self, input: &KeyInput) -> bool {
        if !KeyContext::recognizes(input) {
            return false;
        }
        if self.key_context.is_none() {
            self.key_context = KeyContext::begin(input);
        }
        let Some(mut context) = self.key_context.take() else {
            return false;
        };
        context.key_down(self, input);
        self.key_context = Some(context);
        true
    }

    /// Route a key release. Returns whether the release was consumed.
    ///
    /// Releases of unrecognized keys are never consumed. A recognized
    /// release the live context was not waiting for (delete during an
    /// arrow nudge, or the reverse) is consumed and leaves the context
    /// running.
    pub fn key_up(&mut self, input: &KeyInput) -> bool {
        if !KeyContext::recognizes(input) {
            return false;
        }
        let Some(mut context) = self.key_context.take() else {
            return false;
        };
        if context.key_up(self, input) {
            self.key_context = Some(context);
        }
        true
    }

    /// Insert a parentless page displaying `note` at a page-space `rect`.
    pub fn insert_page(&mut self, note: NoteId, rect: Rect, content: &PageContent) -> PageId {
        let id = self.tree.insert(note, rect, content);
        self.needs_redraw = true;
        id
    }

    /// Insert a page at a canvas-space drop point, at its natural size.
    pub fn place_page(&mut self, note: NoteId, at: Point, content: &PageContent) -> PageId {
        let origin = self.tree.canvas_to_page(at);
        let rect = Rect::from_origin_size(origin, content.natural_size);
        self.insert_page(note, rect, content)
    }

    /// Re-insert a page under an id it held before, as when reloading a
    /// persisted canvas. `rect` is in page space.
    ///
    /// Returns `false` if the id is still live.
    pub fn restore_page(
        &mut self,
        id: PageId,
        note: NoteId,
        rect: Rect,
        content: &PageContent,
    ) -> bool {
        let inserted = self.tree.insert_with_id(id, note, rect, content);
        if inserted {
            self.needs_redraw = true;
        }
        inserted
    }

    /// Link a page under a parent, or unlink it with `None`.
    ///
    /// This is how hosts answer [`CanvasDelegate::link_requested`]. Stale
    /// ids and cycles are refused, as by [`PageTree::set_parent`].
    pub fn set_parent(&mut self, page: PageId, parent: Option<PageId>) -> bool {
        let linked = self.tree.set_parent(page, parent, &self.config);
        if linked {
            self.needs_redraw = true;
        }
        linked
    }

    /// Open the page for `note` as a child of `anchor`.
    ///
    /// A subtree closed earlier from this anchor comes back exactly as it
    /// was. Otherwise a fresh page is placed in free space near the anchor
    /// and linked under it. Returns `None` when `anchor` is stale.
    pub fn open_linked_page(
        &mut self,
        anchor: PageId,
        note: NoteId,
        content: &PageContent,
    ) -> Option<PageId> {
        if let Some(root) = self.snapshots.reopen(&mut self.tree, anchor, note, &self.config) {
            self.needs_redraw = true;
            return Some(root);
        }
        let rect = place_linked_page(&self.tree, anchor, content.natural_size, DEFAULT_GAP)?;
        let id = self.tree.insert(note, rect, content);
        self.tree.set_parent(id, Some(anchor), &self.config);
        self.needs_redraw = true;
        Some(id)
    }

    /// Close a linked page: snapshot its subtree under its parent and take
    /// it off the canvas.
    ///
    /// Returns `false` for a stale id or a parentless page; a root page
    /// has no anchor to reopen from, so it stays up.
    pub fn close_linked_page(&mut self, page: PageId) -> bool {
        let Some(anchor) = self.tree.parent(page) else {
            return false;
        };
        let selected = self.tree.selected_pages();
        let closed = self.snapshots.close_subtree(&mut self.tree, anchor, page);
        if closed {
            self.note_removed_pages(&selected);
        }
        closed
    }

    /// Remove pages and their subtrees outright, with no snapshot.
    ///
    /// This is how hosts answer [`CanvasDelegate::remove_requested`].
    pub fn remove_pages(&mut self, pages: &[PageId]) {
        let selected = self.tree.selected_pages();
        let mut removed = false;
        for &id in pages {
            removed |= !self.tree.remove(id).is_empty();
        }
        if removed {
            self.note_removed_pages(&selected);
        }
    }

    /// Enter link mode: the next press picks a source page and the paired
    /// release a target, and the link surfaces through
    /// [`CanvasDelegate::link_requested`].
    pub fn begin_link_mode(&mut self) {
        self.link_mode = true;
    }

    // Removal invalidates anything that pointed at the removed nodes.
    fn note_removed_pages(&mut self, selected_before: &[PageId]) {
        self.needs_redraw = true;
        if selected_before.iter().any(|id| !self.tree.contains(*id)) {
            self.selection_revision += 1;
        }
        if self.hovered.is_some_and(|id| !self.tree.contains(id)) {
            self.hovered = None;
        }
    }
}

impl<D: CanvasDelegate> Engine for CanvasEngine<D> {
    fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    fn page_at(&self, point: Point) -> Option<PageId> {
        self.tree.page_at(point, &self.config)
    }

    fn component_at(&self, page: PageId, point: Point) -> Option<PageComponent> {
        self.tree.component_at(page, point, &self.config)
    }

    fn pages_in_rect(&self, rect: Rect) -> Vec<PageId> {
        self.tree.pages_in_rect(rect, &self.config)
    }

    fn page_and_descendants(&self, page: PageId) -> Vec<PageId> {
        let mut out = Vec::new();
        out.push(page);
        out.extend(self.tree.descendants(page));
        out
    }

    fn selected_pages(&self) -> Vec<PageId> {
        self.tree.selected_pages()
    }

    fn is_selected(&self, page: PageId) -> bool {
        self.tree.is_selected(page)
    }

    fn select(&mut self, page: PageId) {
        if self.tree.set_selected(page, true) {
            self.selection_revision += 1;
            self.needs_redraw = true;
        }
    }

    fn deselect(&mut self, page: PageId) {
        if self.tree.set_selected(page, false) {
            self.selection_revision += 1;
            self.needs_redraw = true;
        }
    }

    fn deselect_all(&mut self) {
        let mut changed = false;
        for id in self.tree.selected_pages() {
            changed |= self.tree.set_selected(id, false);
        }
        if changed {
            self.selection_revision += 1;
            self.needs_redraw = true;
        }
    }

    fn set_selection_rect(&mut self, rect: Option<Rect>) {
        if self.selection_rect != rect {
            self.selection_rect = rect;
            self.needs_redraw = true;
        }
    }

    fn bring_to_front(&mut self, page: PageId) {
        if self.tree.bring_to_front(page) {
            self.needs_redraw = true;
        }
    }

    fn content_rect(&self, page: PageId) -> Option<Rect> {
        let rect = self.tree.content_rect(page)?;
        Some(rect.with_origin(rect.origin() + self.tree.canvas_origin()))
    }

    fn set_content_rect(&mut self, page: PageId, rect: Rect) {
        let rect = rect.with_origin(rect.origin() - self.tree.canvas_origin());
        if self.tree.set_content_rect(page, rect, &self.config) {
            self.needs_redraw = true;
        }
    }

    fn translate_pages(&mut self, pages: &[PageId], delta: Vec2) {
        let mut moved = false;
        for &id in pages {
            moved |= self.tree.translate(id, delta, &self.config);
        }
        if moved {
            self.needs_redraw = true;
        }
    }

    fn resize_limits(&self, page: PageId) -> ResizeLimits {
        ResizeLimits {
            min_size: self.tree.min_size(page).unwrap_or_default(),
            aspect_ratio: self.tree.locked_aspect_ratio(page),
        }
    }

    fn link_mode(&self) -> bool {
        self.link_mode
    }

    fn end_link_mode(&mut self) {
        self.link_mode = false;
    }

    fn modified(&mut self, pages: &[PageId]) {
        self.needs_redraw = true;
        self.delegate.pages_modified(pages);
    }

    fn finished_modifying(&mut self, pages: &[PageId]) {
        self.delegate.modification_finished(pages);
    }

    fn remove_requested(&mut self, pages: &[PageId]) {
        self.delegate.remove_requested(pages);
    }

    fn link_requested(&mut self, source: PageId, target: PageId) {
        self.delegate.link_requested(source, target);
    }
}
