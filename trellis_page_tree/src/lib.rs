// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_page_tree --heading-base-level=0

//! Trellis Page Tree: a Kurbo-native arena of rectangular page cards.
//!
//! Trellis Page Tree is the geometric core of a spatial note-taking canvas.
//! It owns the page nodes of one canvas, their parent/child links, and their
//! stacking order, and derives every visible rectangle from a single
//! authoritative `content_rect` per node.
//!
//! - The content rectangle is the only stored geometry; it is persisted in
//!   page-space and its size never drops below the node's minimum (writes
//!   clamp rather than fail).
//! - Layout, visual, title-bar, and content-container frames are pure
//!   functions of the content rectangle, the tree's canvas origin, and a
//!   [`LayoutConfig`] that is re-read on every call.
//! - The side of the parent a child sits on ([`Edge`]) is the one cached
//!   derived value, refreshed whenever either rectangle changes.
//!
//! ## Not an interaction engine
//!
//! This crate answers geometric questions (which page is under this point,
//! which component of it, which pages intersect this rectangle) and applies
//! geometric writes. Interpreting pointer and keyboard input is the job of
//! `trellis_interaction`, and orchestrating the two is the job of
//! `trellis_canvas`.
//!
//! ## API overview
//!
//! - [`PageTree`]: container owning the nodes of one canvas.
//! - [`PageId`]: stable handle of a node; never reused.
//! - [`NoteId`]: host-assigned identity of the note a node displays.
//! - [`PageContent`]: creation-time size and aspect constraints from the
//!   note's content type.
//! - [`PageComponent`] / [`Handle`]: what the pointer can land on.
//! - [`Edge`]: side classification used for link chrome and placement.
//!
//! Key operations:
//! - [`PageTree::insert`] → [`PageId`]; [`PageTree::remove`] drops a node
//!   and all of its descendants.
//! - [`PageTree::set_content_rect`] / [`PageTree::translate`] with
//!   minimum-size clamping.
//! - [`PageTree::set_parent`] rewires links and refreshes
//!   [`PageTree::edge_from_parent`].
//! - [`PageTree::page_at`] / [`PageTree::pages_in_rect`] /
//!   [`PageTree::component_at`] for picking.
//! - [`PageTree::bring_to_front`] and the back-to-front [`PageTree::pages`]
//!   iteration for painting.
//!
//! The free functions [`visual_frame_for`], [`layout_frame_for`],
//! [`title_bar_frame_for`], and [`content_container_for`] expose the frame
//! math for rectangles that are not (or not yet) nodes, such as drop
//! previews.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use trellis_page_tree::{LayoutConfig, NoteId, PageComponent, PageContent, PageTree};
//!
//! let config = LayoutConfig::default();
//! let mut tree = PageTree::new();
//! let content = PageContent::sized(Size::new(200.0, 150.0));
//! let page = tree.insert(NoteId::new(1), Rect::new(40.0, 40.0, 240.0, 190.0), &content);
//!
//! assert_eq!(tree.page_at(Point::new(100.0, 100.0), &config), Some(page));
//! assert_eq!(
//!     tree.component_at(page, Point::new(100.0, 100.0), &config),
//!     Some(PageComponent::Content),
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod frames;
mod tree;
mod types;

pub use config::LayoutConfig;
pub use frames::{
    component_at, content_container_for, edge_between, handle_rect, layout_frame_for,
    title_bar_frame_for, visual_frame_for,
};
pub use tree::PageTree;
pub use types::{Edge, Handle, NoteId, PageComponent, PageContent, PageId};
