// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The context factory and per-input-class dispatch.
//!
//! Contexts are mutually exclusive: the engine holds at most one pointer
//! context between a press and its release, and at most one keyboard
//! context between a first recognized press and its release. All routing
//! decisions happen here at press time; a live context never turns into
//! another.

use trellis_page_tree::PageComponent;

use crate::engine::Engine;
use crate::input::{Key, KeyInput, PointerInput};
use crate::keyboard::{KeyboardMove, RemovePages};
use crate::link::CreateLink;
use crate::resize::Resize;
use crate::select_move::SelectAndMove;
use crate::select_rect::SelectionRect;

/// The pointer context active between a press and its release.
#[derive(Clone, Debug)]
pub enum PointerContext {
    /// Marquee selection on empty canvas.
    SelectionRect(SelectionRect),
    /// Select and drag pages.
    SelectAndMove(SelectAndMove),
    /// Resize one page by a handle.
    Resize(Resize),
    /// Draw a link between two pages.
    CreateLink(CreateLink),
}

impl PointerContext {
    /// Resolve a press into a context, applying its press-time effects.
    ///
    /// In priority order: link mode wins outright; a press on empty canvas
    /// starts a marquee; a press on a page resolves the component under
    /// the pointer and brings the page to the front, with the title bar
    /// and content starting a move and any handle starting a resize.
    /// Returns `None`, installing nothing, when the press lands on a
    /// page's pick region but on no component.
    pub fn begin(engine: &mut impl Engine, input: &PointerInput) -> Option<Self> {
        if engine.link_mode() {
            return Some(Self::CreateLink(CreateLink::begin(engine, input)));
        }
        let Some(page) = engine.page_at(input.point) else {
            return Some(Self::SelectionRect(SelectionRect::begin(engine, input)));
        };
        let component = engine.component_at(page, input.point)?;
        engine.bring_to_front(page);
        Some(match component {
            PageComponent::TitleBar | PageComponent::Content => {
                Self::SelectAndMove(SelectAndMove::begin(engine, page, input))
            }
            PageComponent::Handle(handle) => Self::Resize(Resize::begin(page, handle, input)),
        })
    }

    /// Forward a pointer move to the active gesture.
    pub fn dragged(&mut self, engine: &mut impl Engine, input: &PointerInput) {
        match self {
            Self::SelectionRect(ctx) => ctx.dragged(engine, input),
            Self::SelectAndMove(ctx) => ctx.dragged(engine, input),
            Self::Resize(ctx) => ctx.dragged(engine, input),
            Self::CreateLink(ctx) => ctx.dragged(engine, input),
        }
    }

    /// Finish the gesture on release. Consumes the context; a new press
    /// starts from the factory again.
    pub fn up(self, engine: &mut impl Engine, input: &PointerInput) {
        match self {
            Self::SelectionRect(ctx) => ctx.up(engine, input),
            Self::SelectAndMove(ctx) => ctx.up(engine, input),
            Self::Resize(ctx) => ctx.up(engine, input),
            Self::CreateLink(ctx) => ctx.up(engine, input),
        }
    }
}

/// The keyboard context active between a recognized press and its release.
#[derive(Copy, Clone, Debug)]
pub enum KeyContext {
    /// Arrow-key nudging.
    Move(KeyboardMove),
    /// Delete/backspace removal request.
    Remove(RemovePages),
}

impl KeyContext {
    /// Resolve a first key press into a context, or `None` for keys the
    /// engine does not handle (the host sees those as unconsumed).
    #[must_use]
    pub fn begin(input: &KeyInput) -> Option<Self> {
        match input.key {
            Key::Left | Key::Right | Key::Up | Key::Down => {
                Some(Self::Move(KeyboardMove::default()))
            }
            Key::Delete | Key::Backspace => Some(Self::Remove(RemovePages)),
            Key::Other(_) => None,
        }
    }

    /// Whether a key belongs to the canvas's vocabulary at all.
    ///
    /// Presses and releases of keys outside it are never consumed, live
    /// context or not, so the host can keep routing them elsewhere.
    #[must_use]
    pub fn recognizes(input: &KeyInput) -> bool {
        Self::begin(input).is_some()
    }

    /// Forward a key press (or auto-repeat) to the active context.
    pub fn key_down(&mut self, engine: &mut impl Engine, input: &KeyInput) {
        match self {
            Self::Move(ctx) => ctx.key_down(engine, input),
            Self::Remove(ctx) => ctx.key_down(engine, input),
        }
    }

    /// Forward a key release. Returns `false` once the context finished
    /// and should be dropped.
    #[must_use]
    pub fn key_up(&mut self, engine: &mut impl Engine, input: &KeyInput) -> bool {
        match self {
            Self::Move(ctx) => ctx.key_up(engine, input),
            Self::Remove(ctx) => ctx.key_up(engine, input),
        }
    }
}
