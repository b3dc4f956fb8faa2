// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard contexts: arrow-key nudging and delete.

use kurbo::Vec2;

use crate::engine::Engine;
use crate::input::{Key, KeyInput, Modifiers};

/// Distance of one arrow-key nudge.
const NUDGE: f64 = 1.0;
/// Distance of one arrow-key nudge with shift held.
const NUDGE_SHIFT: f64 = 10.0;

/// Keyboard context that moves the selection with the arrow keys.
///
/// Every arrow press (auto-repeats included) translates all selected pages
/// one unit along the key's axis, or ten with shift held. Releasing an
/// arrow ends the gesture.
#[derive(Copy, Clone, Debug, Default)]
pub struct KeyboardMove {
    nudged: bool,
}

impl KeyboardMove {
    /// Translate the selection for one arrow press.
    pub fn key_down(&mut self, engine: &mut impl Engine, input: &KeyInput) {
        let Some(direction) = arrow_vector(input.key) else {
            return;
        };
        let selected = engine.selected_pages();
        if selected.is_empty() {
            return;
        }
        let step = if input.modifiers.contains(Modifiers::SHIFT) {
            NUDGE_SHIFT
        } else {
            NUDGE
        };
        engine.translate_pages(&selected, direction * step);
        engine.modified(&selected);
        self.nudged = true;
    }

    /// An arrow release ends the gesture; other releases leave it alive.
    /// Returns `false` once the context is finished.
    #[must_use]
    pub fn key_up(&mut self, engine: &mut impl Engine, input: &KeyInput) -> bool {
        if !input.key.is_arrow() {
            return true;
        }
        if self.nudged {
            let selected = engine.selected_pages();
            if !selected.is_empty() {
                engine.finished_modifying(&selected);
            }
        }
        false
    }
}

/// Direction of one arrow key, or `None` for anything else.
fn arrow_vector(key: Key) -> Option<Vec2> {
    match key {
        Key::Left => Some(Vec2::new(-1.0, 0.0)),
        Key::Right => Some(Vec2::new(1.0, 0.0)),
        Key::Up => Some(Vec2::new(0.0, -1.0)),
        Key::Down => Some(Vec2::new(0.0, 1.0)),
        Key::Delete | Key::Backspace | Key::Other(_) => None,
    }
}

/// Keyboard context that asks the host to remove the selection.
///
/// Fires on the release of delete or backspace, and only if something is
/// selected. It never deletes pages itself; the host owns removal and its
/// undo story.
#[derive(Copy, Clone, Debug, Default)]
pub struct RemovePages;

impl RemovePages {
    /// Presses do nothing; removal is a release action.
    pub fn key_down(&mut self, _engine: &mut impl Engine, _input: &KeyInput) {}

    /// A delete/backspace release requests removal and ends the gesture.
    /// Returns `false` once the context is finished.
    #[must_use]
    pub fn key_up(&mut self, engine: &mut impl Engine, input: &KeyInput) -> bool {
        if !matches!(input.key, Key::Delete | Key::Backspace) {
            return true;
        }
        let selected = engine.selected_pages();
        if !selected.is_empty() {
            engine.remove_requested(&selected);
        }
        false
    }
}
