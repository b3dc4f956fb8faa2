// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input event payloads delivered by the host platform.
//!
//! The host translates its native pointer and keyboard events into these
//! types before handing them to the engine. Points are in canvas
//! coordinates; key codes the contexts do not recognize travel as
//! [`Key::Other`] and pass through untouched.

use bitflags::bitflags;
use kurbo::Point;

bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Shift: extends selections and scales keyboard nudges.
        const SHIFT = 1 << 0;
        /// Control.
        const CONTROL = 1 << 1;
        /// Alt / Option.
        const ALT = 1 << 2;
        /// Command / Windows / Super.
        const META = 1 << 3;
    }
}

/// One pointer event: a canvas-space point plus event metadata.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerInput {
    /// Pointer position in canvas coordinates.
    pub point: Point,
    /// Modifier keys held.
    pub modifiers: Modifiers,
    /// Consecutive-click count as reported by the host; `2` on the down
    /// event of a double-click.
    pub click_count: u8,
}

impl PointerInput {
    /// A plain single click or move at `point` with no modifiers.
    #[must_use]
    pub fn new(point: Point) -> Self {
        Self {
            point,
            modifiers: Modifiers::empty(),
            click_count: 1,
        }
    }

    /// The same event with `modifiers` held.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// The same event with the host's consecutive-click count.
    #[must_use]
    pub fn with_click_count(mut self, count: u8) -> Self {
        self.click_count = count;
        self
    }
}

/// Keys the keyboard contexts react to.
///
/// Hosts map their own key codes onto this; anything without a variant here
/// goes through [`Key::Other`] and is ignored by the built-in contexts.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Forward delete.
    Delete,
    /// Backspace / delete-backward.
    Backspace,
    /// Any other key, carrying the host's raw code.
    Other(u16),
}

impl Key {
    /// Whether this is one of the four arrow keys.
    #[must_use]
    pub const fn is_arrow(self) -> bool {
        matches!(self, Self::Left | Self::Right | Self::Up | Self::Down)
    }
}

/// One keyboard event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyInput {
    /// The key, as mapped by the host.
    pub key: Key,
    /// Modifier keys held.
    pub modifiers: Modifiers,
    /// Whether this is an auto-repeat of a held key.
    pub repeat: bool,
}

impl KeyInput {
    /// A non-repeating press of `key` with no modifiers.
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
            repeat: false,
        }
    }

    /// The same event with `modifiers` held.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// The same event marked as a key auto-repeat.
    #[must_use]
    pub fn repeated(mut self) -> Self {
        self.repeat = true;
        self
    }
}
