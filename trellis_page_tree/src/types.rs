// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the page tree: identifiers, edges, components, and
//! content descriptors.

use kurbo::Size;

/// Identifier for a page node on a canvas.
///
/// This is a small, copyable handle allocated by
/// [`PageTree::insert`](crate::PageTree::insert) from a monotonically
/// increasing counter.
///
/// ## Semantics
///
/// - Ids are unique for the lifetime of a tree and are never reused, even
///   after the node has been removed.
/// - Restoring a closed subtree reinstates its former ids. This is sound
///   precisely because ids are never reused: nothing else can have been
///   given them in the meantime.
///
/// ## Liveness
///
/// Use [`PageTree::contains`](crate::PageTree::contains) to check whether an
/// id still refers to a live node. Lookups with a stale id yield `None` or
/// empty results, never a different node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PageId(pub(crate) u64);

impl PageId {
    /// Reconstruct an id from its raw value.
    ///
    /// Intended for hosts that persist ids across sessions and for test
    /// fixtures; within one session, ids come from the tree.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value of this id.
    #[must_use]
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

/// Identity of the note a page node displays.
///
/// Assigned by the host's document model and opaque to this crate. Snapshot
/// keys pair an anchor node with the note its closed child displayed, so two
/// nodes showing the same note under different anchors keep separate
/// snapshots.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NoteId(u64);

impl NoteId {
    /// Wrap a host-assigned note identity.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value of this id.
    #[must_use]
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

/// Side of a parent's frame on which a child sits.
///
/// A child strictly left of its parent classifies as [`Edge::Left`], and so
/// on around the compass. See [`edge_between`](crate::edge_between) for the
/// full eight-region classification.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Edge {
    /// The child sits on the parent's left.
    Left,
    /// The child sits above the parent.
    Top,
    /// The child sits on the parent's right.
    Right,
    /// The child sits below the parent.
    Bottom,
}

impl Edge {
    /// The opposite side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }

    /// Whether this edge runs along the x axis (left or right).
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// One of the eight resize handles on a page's visual frame.
///
/// Corner handles control two edges at once; edge handles control one.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Handle {
    /// Top-left corner.
    TopLeft,
    /// Top edge.
    Top,
    /// Top-right corner.
    TopRight,
    /// Right edge.
    Right,
    /// Bottom-right corner.
    BottomRight,
    /// Bottom edge.
    Bottom,
    /// Bottom-left corner.
    BottomLeft,
    /// Left edge.
    Left,
}

impl Handle {
    /// All handles in hit-test priority order: corners before edges.
    pub const ALL: [Self; 8] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Left,
    ];

    /// Whether this handle moves the frame's left edge.
    #[must_use]
    pub const fn controls_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::Left | Self::BottomLeft)
    }

    /// Whether this handle moves the frame's right edge.
    #[must_use]
    pub const fn controls_right(self) -> bool {
        matches!(self, Self::TopRight | Self::Right | Self::BottomRight)
    }

    /// Whether this handle moves the frame's top edge.
    #[must_use]
    pub const fn controls_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::Top | Self::TopRight)
    }

    /// Whether this handle moves the frame's bottom edge.
    #[must_use]
    pub const fn controls_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::Bottom | Self::BottomRight)
    }

    /// Whether this is one of the four corner handles.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomRight | Self::BottomLeft
        )
    }
}

/// Part of a page the pointer can land on.
///
/// Returned by [`component_at`](crate::component_at); `None` there means the
/// point is inside the page's pick region but on none of these (for example
/// in the shadow, or in the notch between two handles).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PageComponent {
    /// One of the eight resize handles.
    Handle(Handle),
    /// The title-bar strip above the content.
    TitleBar,
    /// The content container.
    Content,
}

/// Creation-time description of the content a node displays.
///
/// Supplied by the host from the note's content type (text, image, and so
/// on); the tree only reads it. The aspect ratio is only ever set for
/// content with non-zero size, so ratio math never divides by zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PageContent {
    /// Size used when the node is first placed.
    pub natural_size: Size,
    /// Lower bound enforced on every content-rect write.
    pub min_size: Size,
    /// Width over height, for content whose proportions are fixed (a
    /// cropped image, for example). `None` leaves resizing unconstrained.
    pub locked_aspect_ratio: Option<f64>,
}

impl PageContent {
    /// Content with the given natural size, a zero minimum, and no aspect
    /// lock.
    #[must_use]
    pub const fn sized(natural_size: Size) -> Self {
        Self {
            natural_size,
            min_size: Size::ZERO,
            locked_aspect_ratio: None,
        }
    }

    /// Content that must keep `natural_size`'s width-over-height ratio.
    #[must_use]
    pub fn aspect_locked(natural_size: Size, min_size: Size) -> Self {
        Self {
            natural_size,
            min_size,
            locked_aspect_ratio: Some(natural_size.width / natural_size.height),
        }
    }
}
