// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_interaction --heading-base-level=0

//! Trellis Interaction: modal gesture contexts for the canvas.
//!
//! Pointer and keyboard input on the canvas is interpreted by small,
//! mutually exclusive gesture handlers called contexts. A press resolves,
//! once, into the context that will own the whole gesture; the context
//! then receives every event up to the matching release and mutates page
//! geometry through a narrow [`Engine`] contract. Contexts never reach
//! into the page tree, persistence, or undo directly.
//!
//! - [`PointerContext::begin`] is the factory for presses: link mode wins,
//!   empty canvas starts a [`SelectionRect`] marquee, a page's title bar
//!   or content starts [`SelectAndMove`], and a handle starts [`Resize`].
//! - [`KeyContext::begin`] routes a first key press: arrows start
//!   [`KeyboardMove`], delete/backspace starts [`RemovePages`].
//!
//! One pointer context and one keyboard context can be live at the same
//! time, so an arrow nudge can land mid-drag; contexts therefore treat
//! page ids as fallible and shrug off pages that vanish under them.
//!
//! ## Event payloads
//!
//! Hosts hand events over as [`PointerInput`] and [`KeyInput`] values,
//! with points already in canvas coordinates:
//!
//! ```
//! use kurbo::Point;
//! use trellis_interaction::{Key, KeyInput, Modifiers, PointerInput};
//!
//! let press = PointerInput::new(Point::new(120.0, 80.0)).with_click_count(2);
//! assert_eq!(press.click_count, 2);
//!
//! let nudge = KeyInput::new(Key::Down).with_modifiers(Modifiers::SHIFT);
//! assert!(nudge.modifiers.contains(Modifiers::SHIFT));
//! ```
//!
//! The companion `trellis_canvas` crate implements [`Engine`] over a page
//! tree and owns the install/dispatch/teardown of the live contexts.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod context;
mod engine;
mod input;
mod keyboard;
mod link;
mod resize;
mod select_move;
mod select_rect;

pub use context::{KeyContext, PointerContext};
pub use engine::{Engine, ResizeLimits};
pub use input::{Key, KeyInput, Modifiers, PointerInput};
pub use keyboard::{KeyboardMove, RemovePages};
pub use link::CreateLink;
pub use resize::Resize;
pub use select_move::SelectAndMove;
pub use select_rect::SelectionRect;
