// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure frame derivations.
//!
//! Everything here is a total function of a canvas-space content rectangle
//! and a [`LayoutConfig`]; nothing is cached. The tree wraps these for live
//! nodes, and hosts can call them directly for rectangles that are not (or
//! not yet) nodes, such as drop previews.

use kurbo::{Point, Rect, Size};

use crate::{Edge, Handle, LayoutConfig, PageComponent};

/// Visual frame of a content rectangle: border, title bar, and content.
#[must_use]
pub fn visual_frame_for(content: Rect, config: &LayoutConfig) -> Rect {
    content + config.frame_margins()
}

/// Layout frame: the visual frame grown by the shadow margin.
///
/// This is the full region a page occupies for damage purposes.
#[must_use]
pub fn layout_frame_for(content: Rect, config: &LayoutConfig) -> Rect {
    visual_frame_for(content, config) + config.shadow_margins()
}

/// Title-bar strip across the top of the visual frame.
#[must_use]
pub fn title_bar_frame_for(content: Rect, config: &LayoutConfig) -> Rect {
    let v = visual_frame_for(content, config);
    Rect::new(v.x0, v.y0, v.x1, (v.y0 + config.title_height).min(v.y1))
}

/// Content container inside the visual frame.
///
/// For a live node this is its content rectangle expressed in canvas space.
#[must_use]
pub fn content_container_for(content: Rect, config: &LayoutConfig) -> Rect {
    visual_frame_for(content, config) - config.frame_margins()
}

/// Rectangle of one resize handle, derived from the visual frame.
///
/// Corner handles are squares centered on the frame's corners; edge handles
/// are strips centered on the frame's edges, spanning between the corner
/// squares.
#[must_use]
pub fn handle_rect(visual: Rect, handle: Handle, config: &LayoutConfig) -> Rect {
    let c = config.corner_handle;
    let e = config.edge_handle;
    let square = Size::new(c, c);
    match handle {
        Handle::TopLeft => Rect::from_center_size(Point::new(visual.x0, visual.y0), square),
        Handle::TopRight => Rect::from_center_size(Point::new(visual.x1, visual.y0), square),
        Handle::BottomRight => Rect::from_center_size(Point::new(visual.x1, visual.y1), square),
        Handle::BottomLeft => Rect::from_center_size(Point::new(visual.x0, visual.y1), square),
        Handle::Top => Rect::new(
            visual.x0 + c / 2.0,
            visual.y0 - e / 2.0,
            visual.x1 - c / 2.0,
            visual.y0 + e / 2.0,
        ),
        Handle::Bottom => Rect::new(
            visual.x0 + c / 2.0,
            visual.y1 - e / 2.0,
            visual.x1 - c / 2.0,
            visual.y1 + e / 2.0,
        ),
        Handle::Left => Rect::new(
            visual.x0 - e / 2.0,
            visual.y0 + c / 2.0,
            visual.x0 + e / 2.0,
            visual.y1 - c / 2.0,
        ),
        Handle::Right => Rect::new(
            visual.x1 - e / 2.0,
            visual.y0 + c / 2.0,
            visual.x1 + e / 2.0,
            visual.y1 - c / 2.0,
        ),
    }
}

/// Resolve which component of a page a point lands on.
///
/// Tests the four corner handles, the four edge handles, the title bar, and
/// the content container, in that order; the first hit wins. Points inside
/// the page's pick region that land on none of these (the shadow area, or
/// the notch between two handles) yield `None`.
#[must_use]
pub fn component_at(content: Rect, point: Point, config: &LayoutConfig) -> Option<PageComponent> {
    let visual = visual_frame_for(content, config);
    for handle in Handle::ALL {
        if handle_rect(visual, handle, config).contains(point) {
            return Some(PageComponent::Handle(handle));
        }
    }
    if title_bar_frame_for(content, config).contains(point) {
        return Some(PageComponent::TitleBar);
    }
    if content_container_for(content, config).contains(point) {
        return Some(PageComponent::Content);
    }
    None
}

/// Classify on which side of a parent frame a midpoint lies.
///
/// `m` is the child's layout-frame midpoint and `p` the parent's layout
/// frame. The plane around `p` divides into eight regions: the frame
/// itself, four side bands, and four diagonal quadrants.
///
/// - Inside the frame, the point's side of the vertical center line picks
///   left or right.
/// - In a side band (one axis within the frame's span, inclusive), the
///   outside axis picks the edge.
/// - In a diagonal quadrant, the 45-degree line through the nearest corner
///   of `p` separates the two adjacent edges; on the line itself the
///   horizontal edge wins, matching the inside rule.
#[must_use]
pub fn edge_between(m: Point, p: Rect) -> Edge {
    if m.x >= p.x0 && m.x <= p.x1 && m.y >= p.y0 && m.y <= p.y1 {
        return if m.x < p.center().x {
            Edge::Left
        } else {
            Edge::Right
        };
    }
    if m.y >= p.y0 && m.y <= p.y1 {
        return if m.x < p.x0 { Edge::Left } else { Edge::Right };
    }
    if m.x >= p.x0 && m.x <= p.x1 {
        return if m.y < p.y0 { Edge::Top } else { Edge::Bottom };
    }
    let dx = if m.x < p.x0 { p.x0 - m.x } else { m.x - p.x1 };
    let dy = if m.y < p.y0 { p.y0 - m.y } else { m.y - p.y1 };
    if dy > dx {
        if m.y < p.y0 { Edge::Top } else { Edge::Bottom }
    } else if m.x < p.x0 {
        Edge::Left
    } else {
        Edge::Right
    }
}

/// Raise a rectangle's size to the given minimum, keeping its origin.
pub(crate) fn raise_to_min(rect: Rect, min: Size) -> Rect {
    let width = rect.width().max(min.width);
    let height = rect.height().max(min.height);
    Rect::new(rect.x0, rect.y0, rect.x0 + width, rect.y0 + height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LayoutConfig {
        LayoutConfig {
            border: 1.0,
            title_height: 22.0,
            shadow_offset: kurbo::Vec2::new(0.0, 2.0),
            shadow_blur: 4.0,
            corner_handle: 8.0,
            edge_handle: 6.0,
        }
    }

    #[test]
    fn container_round_trips_to_the_content_rect() {
        let content = Rect::new(0.0, 0.0, 100.0, 100.0);
        let config = config();
        assert_eq!(
            visual_frame_for(content, &config),
            Rect::new(-1.0, -22.0, 101.0, 101.0)
        );
        assert_eq!(content_container_for(content, &config), content);
    }

    #[test]
    fn title_bar_spans_the_visual_frame_width() {
        let content = Rect::new(0.0, 0.0, 100.0, 100.0);
        let title = title_bar_frame_for(content, &config());
        assert_eq!(title, Rect::new(-1.0, -22.0, 101.0, 0.0));
    }

    #[test]
    fn layout_frame_covers_the_offset_shadow() {
        let content = Rect::new(0.0, 0.0, 100.0, 100.0);
        let layout = layout_frame_for(content, &config());
        // Left/right/top by blur -/+ offset, bottom by blur + offset.
        assert_eq!(layout, Rect::new(-5.0, -24.0, 105.0, 107.0));
    }

    #[test]
    fn corner_handles_are_squares_on_the_corners() {
        let visual = Rect::new(0.0, 0.0, 100.0, 100.0);
        let config = config();
        assert_eq!(
            handle_rect(visual, Handle::TopLeft, &config),
            Rect::new(-4.0, -4.0, 4.0, 4.0)
        );
        assert_eq!(
            handle_rect(visual, Handle::BottomRight, &config),
            Rect::new(96.0, 96.0, 104.0, 104.0)
        );
    }

    #[test]
    fn edge_handles_span_between_the_corners() {
        let visual = Rect::new(0.0, 0.0, 100.0, 100.0);
        let top = handle_rect(visual, Handle::Top, &config());
        assert_eq!(top, Rect::new(4.0, -3.0, 96.0, 3.0));
        let left = handle_rect(visual, Handle::Left, &config());
        assert_eq!(left, Rect::new(-3.0, 4.0, 3.0, 96.0));
    }

    #[test]
    fn corners_win_over_edge_strips() {
        let content = Rect::new(0.0, 0.0, 100.0, 100.0);
        let config = config();
        // (-2, -23) sits in both the top-left corner square and, were the
        // square absent, nothing else; (-2, 50) sits in the left strip.
        assert_eq!(
            component_at(content, Point::new(-2.0, -23.0), &config),
            Some(PageComponent::Handle(Handle::TopLeft))
        );
        assert_eq!(
            component_at(content, Point::new(-2.0, 50.0), &config),
            Some(PageComponent::Handle(Handle::Left))
        );
    }

    #[test]
    fn title_then_content_then_none() {
        let content = Rect::new(0.0, 0.0, 100.0, 100.0);
        let config = config();
        assert_eq!(
            component_at(content, Point::new(50.0, -10.0), &config),
            Some(PageComponent::TitleBar)
        );
        assert_eq!(
            component_at(content, Point::new(50.0, 50.0), &config),
            Some(PageComponent::Content)
        );
        // Five units below the visual frame: past the bottom strip (three
        // units) but still inside the shadow (six units).
        assert_eq!(component_at(content, Point::new(50.0, 106.0), &config), None);
    }

    #[test]
    fn min_clamp_keeps_origin_and_raises_size() {
        let raised = raise_to_min(Rect::new(10.0, 10.0, 40.0, 40.0), Size::new(50.0, 20.0));
        assert_eq!(raised, Rect::new(10.0, 10.0, 60.0, 40.0));
    }

    // Edge classification over all eight regions of a 200x100 parent at
    // (100, 100), with boundary-adjacent points.
    fn parent() -> Rect {
        Rect::new(100.0, 100.0, 300.0, 200.0)
    }

    #[test]
    fn inside_splits_on_the_vertical_center_line() {
        assert_eq!(edge_between(Point::new(150.0, 150.0), parent()), Edge::Left);
        assert_eq!(edge_between(Point::new(250.0, 150.0), parent()), Edge::Right);
        // On the center line the right edge wins.
        assert_eq!(edge_between(Point::new(200.0, 150.0), parent()), Edge::Right);
    }

    #[test]
    fn side_bands_classify_by_the_outside_axis() {
        assert_eq!(edge_between(Point::new(50.0, 150.0), parent()), Edge::Left);
        assert_eq!(edge_between(Point::new(350.0, 150.0), parent()), Edge::Right);
        assert_eq!(edge_between(Point::new(200.0, 50.0), parent()), Edge::Top);
        assert_eq!(edge_between(Point::new(200.0, 250.0), parent()), Edge::Bottom);
    }

    #[test]
    fn side_band_spans_are_inclusive() {
        // Exactly level with the parent's top edge, strictly to its left.
        assert_eq!(edge_between(Point::new(50.0, 100.0), parent()), Edge::Left);
        assert_eq!(edge_between(Point::new(50.0, 200.0), parent()), Edge::Left);
        // Exactly level with the left edge, strictly above.
        assert_eq!(edge_between(Point::new(100.0, 50.0), parent()), Edge::Top);
        assert_eq!(edge_between(Point::new(300.0, 50.0), parent()), Edge::Top);
    }

    #[test]
    fn quadrants_split_along_the_diagonal() {
        // Top-left quadrant: one unit left, two up is past the diagonal.
        assert_eq!(edge_between(Point::new(99.0, 98.0), parent()), Edge::Top);
        // Two left, one up stays on the left side of it.
        assert_eq!(edge_between(Point::new(98.0, 99.0), parent()), Edge::Left);
        // On the diagonal itself the horizontal edge wins.
        assert_eq!(edge_between(Point::new(98.0, 98.0), parent()), Edge::Left);

        assert_eq!(edge_between(Point::new(301.0, 97.0), parent()), Edge::Top);
        assert_eq!(edge_between(Point::new(303.0, 99.0), parent()), Edge::Right);

        assert_eq!(edge_between(Point::new(99.0, 203.0), parent()), Edge::Bottom);
        assert_eq!(edge_between(Point::new(97.0, 201.0), parent()), Edge::Left);

        assert_eq!(edge_between(Point::new(302.0, 204.0), parent()), Edge::Bottom);
        assert_eq!(edge_between(Point::new(304.0, 202.0), parent()), Edge::Right);
    }
}
