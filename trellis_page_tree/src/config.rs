// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout metrics shared by every frame derivation.

use kurbo::{Insets, Vec2};

/// Geometry the host supplies for page chrome.
///
/// The owning engine passes a reference into every frame-derivation call and
/// the tree caches nothing from it, so the host may change metrics between
/// events and the next derivation sees the new values.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Border thickness on the left, right, and bottom of the content.
    pub border: f64,
    /// Height of the title bar above the content, including its own border.
    pub title_height: f64,
    /// Offset of the drop shadow relative to the visual frame.
    pub shadow_offset: Vec2,
    /// Blur radius of the drop shadow.
    pub shadow_blur: f64,
    /// Side length of the square corner resize handles.
    pub corner_handle: f64,
    /// Thickness of the edge resize-handle strips.
    pub edge_handle: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            border: 1.0,
            title_height: 22.0,
            shadow_offset: Vec2::new(0.0, 2.0),
            shadow_blur: 4.0,
            corner_handle: 8.0,
            edge_handle: 6.0,
        }
    }
}

impl LayoutConfig {
    /// Margins that grow a content rectangle into its visual frame.
    #[must_use]
    pub fn frame_margins(&self) -> Insets {
        Insets::new(self.border, self.title_height, self.border, self.border)
    }

    /// Margins that grow a visual frame into its layout frame.
    ///
    /// Each side covers however far the blurred, offset shadow can reach
    /// past the frame on that side.
    #[must_use]
    pub fn shadow_margins(&self) -> Insets {
        let Vec2 { x, y } = self.shadow_offset;
        Insets::new(
            (self.shadow_blur - x).max(0.0),
            (self.shadow_blur - y).max(0.0),
            (self.shadow_blur + x).max(0.0),
            (self.shadow_blur + y).max(0.0),
        )
    }

    /// How far a resize handle can stick out past the visual frame.
    ///
    /// Handles are centered on the frame boundary, so half of the larger
    /// handle size hangs outside it. Pick regions grow by this amount.
    #[must_use]
    pub fn handle_overhang(&self) -> f64 {
        self.corner_handle.max(self.edge_handle) / 2.0
    }
}
