// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-side delegate the engine reports into.

use trellis_page_tree::PageId;

/// Receives the engine's outbound notifications.
///
/// The delegate is where persistence and undo live. Gestures report
/// geometry changes here as they happen and again when they finish, so the
/// host can coalesce a whole drag into one undoable step; removal and link
/// requests arrive here as requests only, and the host decides whether and
/// how to act (typically by calling back into the engine inside its own
/// model transaction).
///
/// Every method has a no-op default, and `()` implements the trait, so an
/// engine without a host hookup just runs silently.
pub trait CanvasDelegate {
    /// Geometry of the listed pages changed mid-gesture.
    fn pages_modified(&mut self, _pages: &[PageId]) {}

    /// A gesture finished changing the listed pages.
    fn modification_finished(&mut self, _pages: &[PageId]) {}

    /// The user asked to remove the listed pages.
    fn remove_requested(&mut self, _pages: &[PageId]) {}

    /// The user drew a link from `source` to `target`.
    fn link_requested(&mut self, _source: PageId, _target: PageId) {}
}

impl CanvasDelegate for () {}
