// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee selection: drag a rectangle over empty canvas to select pages.

use alloc::vec::Vec;
use kurbo::{Point, Rect};
use trellis_page_tree::PageId;

use crate::engine::Engine;
use crate::input::{Modifiers, PointerInput};

/// Pointer context for a press that started on empty canvas.
///
/// Dragging spans a rectangle from the press origin and selects the pages
/// it touches. With shift held the touched set is toggled against the
/// selection that existed at press time, so sweeping over already-selected
/// pages deselects them. A press that never moves is a plain click on
/// empty canvas and clears the selection on release.
#[derive(Clone, Debug)]
pub struct SelectionRect {
    origin: Point,
    /// Selection at press time; only consulted when extending.
    original: Vec<PageId>,
    extend: bool,
    moved: bool,
}

impl SelectionRect {
    /// Start the marquee at the press point.
    pub fn begin(engine: &mut impl Engine, input: &PointerInput) -> Self {
        let extend = input.modifiers.contains(Modifiers::SHIFT);
        if !extend {
            engine.deselect_all();
        }
        Self {
            origin: input.point,
            original: engine.selected_pages(),
            extend,
            moved: false,
        }
    }

    /// Grow or shrink the marquee to the current point and reselect.
    pub fn dragged(&mut self, engine: &mut impl Engine, input: &PointerInput) {
        if input.point == self.origin {
            engine.set_selection_rect(None);
            return;
        }
        self.moved = true;
        let rect = Rect::from_points(self.origin, input.point);
        engine.set_selection_rect(Some(rect));

        let touched = engine.pages_in_rect(rect);
        let chosen = if self.extend {
            symmetric_difference(&self.original, &touched)
        } else {
            touched
        };
        engine.deselect_all();
        for id in chosen {
            engine.select(id);
        }
    }

    /// Release: clear the marquee, and the selection too if this was a
    /// motionless click on empty canvas.
    pub fn up(self, engine: &mut impl Engine, _input: &PointerInput) {
        if !self.moved {
            engine.deselect_all();
        }
        engine.set_selection_rect(None);
    }
}

/// Ids in exactly one of the two lists, originals first.
fn symmetric_difference(original: &[PageId], touched: &[PageId]) -> Vec<PageId> {
    let mut out: Vec<PageId> = original
        .iter()
        .copied()
        .filter(|id| !touched.contains(id))
        .collect();
    out.extend(touched.iter().copied().filter(|id| !original.contains(id)));
    out
}
