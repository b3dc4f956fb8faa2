// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The narrow contract between gesture contexts and the canvas engine.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Size, Vec2};
use trellis_page_tree::{PageComponent, PageId};

/// Per-page bounds the resize contexts respect.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResizeLimits {
    /// Smallest content size the page may reach.
    pub min_size: Size,
    /// Width over height to hold fixed, when the content locks its
    /// proportions.
    pub aspect_ratio: Option<f64>,
}

impl Default for ResizeLimits {
    fn default() -> Self {
        Self {
            min_size: Size::ZERO,
            aspect_ratio: None,
        }
    }
}

/// Everything a gesture context may ask of, or do to, the canvas.
///
/// Contexts never touch the page tree, the snapshot store, or the host
/// delegate directly; this trait is their entire world. All points and
/// rectangles cross it in canvas coordinates, and the implementation is
/// responsible for converting to and from page space.
///
/// Mutations on stale page ids are silently ignored and queries on them
/// return `None` or empty results; a page can disappear mid-gesture when a
/// keyboard context removes it.
pub trait Engine {
    /// Size of the canvas in canvas coordinates.
    fn canvas_size(&self) -> Size;

    /// The topmost page whose pick region contains `point`, if any.
    fn page_at(&self, point: Point) -> Option<PageId>;

    /// The component of `page` under `point`, if any.
    fn component_at(&self, page: PageId, point: Point) -> Option<PageComponent>;

    /// Pages whose visual frames overlap `rect`, in paint order.
    fn pages_in_rect(&self, rect: Rect) -> Vec<PageId>;

    /// `page` followed by all of its descendants.
    fn page_and_descendants(&self, page: PageId) -> Vec<PageId>;

    /// Currently selected pages, in paint order.
    fn selected_pages(&self) -> Vec<PageId>;

    /// Whether `page` is selected.
    fn is_selected(&self, page: PageId) -> bool;

    /// Add `page` to the selection.
    fn select(&mut self, page: PageId);

    /// Drop `page` from the selection.
    fn deselect(&mut self, page: PageId);

    /// Empty the selection.
    fn deselect_all(&mut self);

    /// Publish (or clear) the marquee rectangle drawn during a
    /// selection drag. Purely visual feedback; selection itself is driven
    /// through [`select`](Self::select) and friends.
    fn set_selection_rect(&mut self, rect: Option<Rect>);

    /// Move `page` to the front of the paint order.
    fn bring_to_front(&mut self, page: PageId);

    /// `page`'s content rectangle, in canvas coordinates.
    fn content_rect(&self, page: PageId) -> Option<Rect>;

    /// Write `page`'s content rectangle from canvas coordinates. The
    /// engine clamps to the page's minimum size.
    fn set_content_rect(&mut self, page: PageId, rect: Rect);

    /// Translate every listed page by `delta`.
    fn translate_pages(&mut self, pages: &[PageId], delta: Vec2);

    /// Bounds for resizing `page`.
    fn resize_limits(&self, page: PageId) -> ResizeLimits;

    /// Whether the next pointer press starts a link instead of a gesture.
    fn link_mode(&self) -> bool;

    /// Leave link mode. Called by the link context when its press ends,
    /// whether or not a link was made.
    fn end_link_mode(&mut self);

    /// Geometry of the listed pages changed and should be redrawn.
    fn modified(&mut self, pages: &[PageId]);

    /// A gesture that was changing the listed pages has ended; the host
    /// can now persist the result as one undoable step.
    fn finished_modifying(&mut self, pages: &[PageId]);

    /// The user asked to remove the listed pages. Removal itself is the
    /// host's job; contexts never delete pages.
    fn remove_requested(&mut self, pages: &[PageId]);

    /// The user drew a link from `source` to `target`.
    fn link_requested(&mut self, source: PageId, target: PageId);
}
