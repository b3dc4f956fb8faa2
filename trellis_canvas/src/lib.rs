// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_canvas --heading-base-level=0

//! Trellis Canvas: the assembled spatial engine for a note canvas.
//!
//! [`CanvasEngine`] ties the workspace together: it owns the
//! [`PageTree`][trellis_page_tree::PageTree], installs and dispatches the
//! gesture contexts from `trellis_interaction`, places newly linked pages
//! with `trellis_placement`, and keeps the snapshots of closed subtrees.
//! A host embeds one engine per canvas view, forwards raw pointer and key
//! events to it, and paints from the tree whenever
//! [`CanvasEngine::take_needs_redraw`] reports a change.
//!
//! Side effects the engine cannot resolve on its own, such as persisting
//! moved pages or creating a link in the document model, surface through
//! the [`CanvasDelegate`] the engine was built with.
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use trellis_canvas::CanvasEngine;
//! use trellis_interaction::{Engine, PointerInput};
//! use trellis_page_tree::{LayoutConfig, NoteId, PageContent};
//!
//! let mut engine = CanvasEngine::new(LayoutConfig::default(), Size::new(800.0, 600.0));
//! let page = engine.insert_page(
//!     NoteId::new(1),
//!     Rect::new(100.0, 100.0, 300.0, 250.0),
//!     &PageContent::sized(Size::new(200.0, 150.0)),
//! );
//!
//! // A press and release inside the page selects it.
//! let click = PointerInput::new(Point::new(200.0, 180.0));
//! engine.pointer_down(&click);
//! engine.pointer_up(&click);
//! assert_eq!(engine.selected_pages(), [page]);
//! assert!(engine.take_needs_redraw());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod delegate;
mod engine;

pub use delegate::CanvasDelegate;
pub use engine::CanvasEngine;
