// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resizing a page by one of its eight handles.
//!
//! Two regimes share the context. Unconstrained resizing moves whichever
//! edges the handle controls, clamping each axis so the content never drops
//! below its minimum size. Aspect-locked resizing (corner and top/bottom
//! handles on pages whose content fixes its proportions) derives one axis
//! from the other through the locked ratio, then applies the canvas and
//! minimum-size clamps while keeping the ratio exact.

use kurbo::{Point, Rect, Size, Vec2};
use trellis_page_tree::{Handle, PageId};

use crate::engine::Engine;
use crate::input::PointerInput;

/// Pointer context for a press on a resize handle.
#[derive(Clone, Debug)]
pub struct Resize {
    page: PageId,
    handle: Handle,
    last: Point,
}

impl Resize {
    /// Start resizing `page` by `handle` from the press point.
    #[must_use]
    pub fn begin(page: PageId, handle: Handle, input: &PointerInput) -> Self {
        Self {
            page,
            handle,
            last: input.point,
        }
    }

    /// Apply the pointer's travel since the last event to the page.
    pub fn dragged(&mut self, engine: &mut impl Engine, input: &PointerInput) {
        let canvas = engine.canvas_size();
        let bounded = bound_to_canvas(input.point, canvas);
        let delta = bounded - self.last;
        self.last = bounded;

        let Some(rect) = engine.content_rect(self.page) else {
            return;
        };
        let limits = engine.resize_limits(self.page);
        let resized = match limits.aspect_ratio {
            // Left/right edge handles stay unconstrained even on locked
            // pages; only corners and the top/bottom edges hold the ratio.
            Some(ratio) if !matches!(self.handle, Handle::Left | Handle::Right) => {
                resize_aspect(rect, self.handle, delta, limits.min_size, ratio, canvas)
            }
            _ => resize_unconstrained(rect, self.handle, delta, limits.min_size),
        };
        engine.set_content_rect(self.page, resized);
        engine.modified(&[self.page]);
    }

    /// Release: close out the resize.
    pub fn up(self, engine: &mut impl Engine, _input: &PointerInput) {
        engine.finished_modifying(&[self.page]);
    }
}

/// Clamp a pointer position into the canvas.
///
/// The far bound is one unit inside the canvas size, matching the behavior
/// the rest of the geometry expects for points on the last row or column.
fn bound_to_canvas(point: Point, canvas: Size) -> Point {
    Point::new(
        point.x.clamp(0.0, (canvas.width - 1.0).max(0.0)),
        point.y.clamp(0.0, (canvas.height - 1.0).max(0.0)),
    )
}

/// Move the edges `handle` controls by `delta`, clamping each axis so the
/// size never drops below `min`. Left and top variants move the origin;
/// the opposite edges stay put.
fn resize_unconstrained(rect: Rect, handle: Handle, delta: Vec2, min: Size) -> Rect {
    let mut r = rect;
    if handle.controls_left() {
        // Dragging right shrinks; stop where the width reaches the minimum.
        let dx = delta.x.min(r.width() - min.width);
        r.x0 += dx;
    } else if handle.controls_right() {
        let dx = delta.x.max(min.width - r.width());
        r.x1 += dx;
    }
    if handle.controls_top() {
        let dy = delta.y.min(r.height() - min.height);
        r.y0 += dy;
    } else if handle.controls_bottom() {
        let dy = delta.y.max(min.height - r.height());
        r.y1 += dy;
    }
    r
}

/// Resize while holding width over height at `ratio`.
///
/// Corners are driven by horizontal pointer travel with the vertical
/// growth derived; top/bottom edges are driven vertically with the width
/// derived. Clamps run in a fixed order, and every clamp recomputes the
/// other axis from whichever one it bound, so the ratio survives all of
/// them:
///
/// 1. the derived axis must not push past the canvas edge it grows toward;
/// 2. left-side handles must not push the origin past zero;
/// 3. neither axis may shrink below `min`.
fn resize_aspect(
    rect: Rect,
    handle: Handle,
    delta: Vec2,
    min: Size,
    ratio: f64,
    canvas: Size,
) -> Rect {
    let (w, h) = (rect.width(), rect.height());
    // Growth per axis; positive grows the page, negative shrinks it.
    let (mut gx, mut gy) = match handle {
        Handle::TopRight | Handle::BottomRight => (delta.x, delta.x / ratio),
        Handle::TopLeft | Handle::BottomLeft => (-delta.x, -delta.x / ratio),
        Handle::Top => (-delta.y * ratio, -delta.y),
        Handle::Bottom => (delta.y * ratio, delta.y),
        Handle::Left | Handle::Right => return rect,
    };

    match handle {
        Handle::Top | Handle::Bottom => {
            gx = gx.min(canvas.width - rect.x1);
            gy = gx / ratio;
        }
        Handle::TopLeft | Handle::TopRight => {
            gy = gy.min(rect.y0);
            gx = gy * ratio;
        }
        Handle::BottomLeft | Handle::BottomRight => {
            gy = gy.min(canvas.height - rect.y1);
            gx = gy * ratio;
        }
        Handle::Left | Handle::Right => {}
    }
    if matches!(handle, Handle::TopLeft | Handle::BottomLeft) {
        gx = gx.min(rect.x0);
        gy = gx / ratio;
    }
    if gx < min.width - w {
        gx = min.width - w;
        gy = gx / ratio;
    }
    if gy < min.height - h {
        gy = min.height - h;
        gx = gy * ratio;
    }

    let new_w = w + gx;
    let new_h = h + gy;
    let x0 = if matches!(handle, Handle::TopLeft | Handle::BottomLeft) {
        rect.x1 - new_w
    } else {
        rect.x0
    };
    let y0 = if handle.controls_top() {
        rect.y1 - new_h
    } else {
        rect.y0
    };
    Rect::new(x0, y0, x0 + new_w, y0 + new_h)
}
