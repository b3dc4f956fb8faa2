// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Link creation: press on one page, release on another.

use trellis_page_tree::PageId;

use crate::engine::Engine;
use crate::input::PointerInput;

/// Pointer context installed while the engine is in link mode.
///
/// The press records the page under the pointer as the link source; the
/// release resolves the target and, if both exist and differ, reports the
/// pair to the host. Link mode always ends with the press, made link or
/// not, so a stray click is enough to leave it.
#[derive(Copy, Clone, Debug)]
pub struct CreateLink {
    source: Option<PageId>,
}

impl CreateLink {
    /// Record the link source under the press point.
    #[must_use]
    pub fn begin(engine: &mut impl Engine, input: &PointerInput) -> Self {
        Self {
            source: engine.page_at(input.point),
        }
    }

    /// Movement needs no tracking; the release resolves the target fresh.
    pub fn dragged(&mut self, _engine: &mut impl Engine, _input: &PointerInput) {}

    /// Resolve the target and report the link, then leave link mode.
    pub fn up(self, engine: &mut impl Engine, input: &PointerInput) {
        let target = engine.page_at(input.point);
        if let (Some(source), Some(target)) = (self.source, target)
            && source != target
        {
            engine.link_requested(source, target);
        }
        engine.end_link_mode();
    }
}
