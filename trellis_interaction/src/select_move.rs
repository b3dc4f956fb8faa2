// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-to-select and drag-to-move, the workhorse pointer context.

use kurbo::{Point, Vec2};
use trellis_page_tree::PageId;

use crate::engine::Engine;
use crate::input::{Modifiers, PointerInput};

/// Pointer context for a press on a page's title bar or content.
///
/// The press adjusts the selection (shift toggles the page, a double-click
/// pulls in its whole subtree, a plain press on an unselected page selects
/// just it) and dragging then moves every selected page together. A clean
/// click inside a multi-selection collapses the selection to the clicked
/// page on release.
#[derive(Clone, Debug)]
pub struct SelectAndMove {
    page: PageId,
    last: Point,
    moved: bool,
    toggled: bool,
    took_subtree: bool,
}

impl SelectAndMove {
    /// Apply the press-time selection change for a press on `page`.
    pub fn begin(engine: &mut impl Engine, page: PageId, input: &PointerInput) -> Self {
        let mut toggled = false;
        let mut took_subtree = false;
        if input.modifiers.contains(Modifiers::SHIFT) {
            if engine.is_selected(page) {
                engine.deselect(page);
            } else {
                engine.select(page);
            }
            toggled = true;
        } else if input.click_count == 2 {
            for id in engine.page_and_descendants(page) {
                engine.select(id);
            }
            took_subtree = true;
        } else if !engine.is_selected(page) {
            engine.deselect_all();
            engine.select(page);
        }
        Self {
            page,
            last: input.point,
            moved: false,
            toggled,
            took_subtree,
        }
    }

    /// Move the whole selection by the pointer's travel since last event.
    pub fn dragged(&mut self, engine: &mut impl Engine, input: &PointerInput) {
        let delta = input.point - self.last;
        self.last = input.point;
        if delta == Vec2::ZERO {
            return;
        }
        self.moved = true;
        let selected = engine.selected_pages();
        engine.translate_pages(&selected, delta);
        engine.modified(&selected);
    }

    /// Release: collapse a clean click inside a multi-selection, and close
    /// out the move if one happened.
    pub fn up(self, engine: &mut impl Engine, _input: &PointerInput) {
        let selected = engine.selected_pages();
        if selected.len() > 1 && !self.moved && !self.toggled && !self.took_subtree {
            engine.deselect_all();
            engine.select(self.page);
        }
        if self.moved {
            engine.finished_modifying(&selected);
        }
    }
}
