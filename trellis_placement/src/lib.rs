// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_placement --heading-base-level=0

//! Trellis Placement: initial rectangles for newly linked pages.
//!
//! When a link is opened from an anchor page, the new page needs a position
//! the user never asked for. This crate computes one, and remembers the
//! geometry of closed subtrees so that reopening a link restores exactly
//! what was there before.
//!
//! - [`place_linked_page`] picks a non-overlapping rectangle next to the
//!   anchor: for a first child it scans candidate directions and rejects
//!   collisions; for later children it extends the row or column the
//!   family already grows in.
//! - [`SnapshotStore`] keeps one [`SubtreeSnapshot`] per
//!   `(anchor, note)` link. Closing captures ids, rectangles, and hierarchy
//!   before the subtree is deleted; reopening consumes the snapshot and
//!   rebuilds the exact former state, ids included.
//!
//! Placement reads the tree but never writes it; the snapshot store is the
//! only writer here, and only through [`PageTree`] operations.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use trellis_page_tree::{NoteId, PageContent, PageTree};
//! use trellis_placement::{DEFAULT_GAP, place_linked_page};
//!
//! let mut tree = PageTree::new();
//! let anchor = tree.insert(
//!     NoteId::new(1),
//!     Rect::new(0.0, 0.0, 200.0, 200.0),
//!     &PageContent::sized(Size::new(200.0, 200.0)),
//! );
//!
//! // Nothing else on the canvas: the first candidate direction wins.
//! let rect = place_linked_page(&tree, anchor, Size::new(200.0, 200.0), DEFAULT_GAP);
//! assert_eq!(rect, Some(Rect::new(220.0, 0.0, 420.0, 200.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod place;
mod snapshot;

pub use place::{DEFAULT_GAP, place_linked_page};
pub use snapshot::{SnapshotStore, SubtreeSnapshot, capture_subtree};
