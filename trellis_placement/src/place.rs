// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate construction and selection for newly linked pages.

use kurbo::{Point, Rect, Size, Vec2};
use smallvec::SmallVec;
use trellis_page_tree::{Edge, PageId, PageTree};

/// Distance kept between a new page and the rectangle it is placed against.
pub const DEFAULT_GAP: f64 = 20.0;

/// Compute the initial rectangle for a page newly linked from `anchor`.
///
/// With no children under the anchor yet, candidate directions are tried in
/// priority order: the opposite of the anchor's own edge first when the
/// anchor is itself linked, then right, left, below, above (skipping a
/// duplicate of the first). The first candidate that intersects no existing
/// page wins; when every direction collides, the right candidate is used
/// regardless.
///
/// With existing children, the new rectangle instead extends the family:
/// it goes past the combined frame of the children on the side the first
/// child established, keeping the gap.
///
/// Rectangles are page-space content rectangles throughout. Returns `None`
/// for a stale anchor id.
#[must_use]
pub fn place_linked_page(
    tree: &PageTree,
    anchor: PageId,
    natural_size: Size,
    gap: f64,
) -> Option<Rect> {
    let a = tree.content_rect(anchor)?;
    if tree.children(anchor).is_empty() {
        let preferred = tree.edge_from_parent(anchor).map(Edge::opposite);
        Some(place_first_child(tree, a, preferred, natural_size, gap))
    } else {
        place_beyond_siblings(tree, anchor, natural_size, gap)
    }
}

/// A candidate rectangle adjacent to `a` on the given side, separated by
/// `gap` and centered on the cross-axis.
fn candidate(a: Rect, side: Edge, size: Size, gap: f64) -> Rect {
    let origin = match side {
        Edge::Right => Point::new(a.x1 + gap, a.center().y - size.height / 2.0),
        Edge::Left => Point::new(a.x0 - gap - size.width, a.center().y - size.height / 2.0),
        Edge::Bottom => Point::new(a.center().x - size.width / 2.0, a.y1 + gap),
        Edge::Top => Point::new(a.center().x - size.width / 2.0, a.y0 - gap - size.height),
    };
    Rect::from_origin_size(origin, size)
}

fn overlaps_any(tree: &PageTree, rect: Rect) -> bool {
    tree.pages().any(|id| {
        tree.content_rect(id)
            .is_some_and(|r| r.intersect(rect).area() > 0.0)
    })
}

fn place_first_child(
    tree: &PageTree,
    a: Rect,
    preferred: Option<Edge>,
    size: Size,
    gap: f64,
) -> Rect {
    let mut sides: SmallVec<[Edge; 5]> = SmallVec::new();
    sides.extend(preferred);
    for side in [Edge::Right, Edge::Left, Edge::Bottom, Edge::Top] {
        if Some(side) != preferred {
            sides.push(side);
        }
    }
    for side in sides {
        let rect = candidate(a, side, size, gap);
        if !overlaps_any(tree, rect) {
            return rect;
        }
    }
    // Everything collides: give up and use the right candidate anyway.
    candidate(a, Edge::Right, size, gap)
}

/// Signed displacement becomes a direction: the larger axis wins and its
/// sign picks the side. Ties go to the horizontal axis.
fn direction_of(displacement: Vec2) -> Edge {
    if displacement.x.abs() >= displacement.y.abs() {
        if displacement.x < 0.0 {
            Edge::Left
        } else {
            Edge::Right
        }
    } else if displacement.y < 0.0 {
        Edge::Top
    } else {
        Edge::Bottom
    }
}

/// Distance along a side's axis, positive further out on that side.
fn outward_distance(side: Edge, displacement: Vec2) -> f64 {
    match side {
        Edge::Left => -displacement.x,
        Edge::Right => displacement.x,
        Edge::Top => -displacement.y,
        Edge::Bottom => displacement.y,
    }
}

fn place_beyond_siblings(
    tree: &PageTree,
    anchor: PageId,
    size: Size,
    gap: f64,
) -> Option<Rect> {
    let a = tree.content_rect(anchor)?;
    let children = tree.children(anchor);
    let first = *children.first()?;
    let first_rect = tree.content_rect(first)?;
    let side = direction_of(first_rect.center() - a.center());
    let threshold = outward_distance(side, first_rect.center() - a.center());

    // Combined frame: the first child plus every sibling at least as far
    // out on the same side. Children placed on other sides fall short of
    // the threshold and drop out.
    let mut combined = first_rect;
    for child in children.iter().copied() {
        let Some(rect) = tree.content_rect(child) else {
            continue;
        };
        if outward_distance(side, rect.center() - a.center()) >= threshold {
            combined = combined.union(rect);
        }
    }

    // Past the combined frame, away from the anchor. On the cross-axis the
    // new page goes flush with whichever combined-frame edge pulls it back
    // toward the anchor's midline.
    let origin = match side {
        Edge::Right | Edge::Left => {
            let x = if side == Edge::Right {
                combined.x1 + gap
            } else {
                combined.x0 - gap - size.width
            };
            let y = if combined.center().y < a.center().y {
                combined.y1 - size.height
            } else {
                combined.y0
            };
            Point::new(x, y)
        }
        Edge::Bottom | Edge::Top => {
            let y = if side == Edge::Bottom {
                combined.y1 + gap
            } else {
                combined.y0 - gap - size.height
            };
            let x = if combined.center().x < a.center().x {
                combined.x1 - size.width
            } else {
                combined.x0
            };
            Point::new(x, y)
        }
    };
    Some(Rect::from_origin_size(origin, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_sit_gap_away_and_centered() {
        let a = Rect::new(0.0, 0.0, 200.0, 200.0);
        let size = Size::new(100.0, 50.0);
        assert_eq!(
            candidate(a, Edge::Right, size, 20.0),
            Rect::new(220.0, 75.0, 320.0, 125.0)
        );
        assert_eq!(
            candidate(a, Edge::Left, size, 20.0),
            Rect::new(-120.0, 75.0, -20.0, 125.0)
        );
        assert_eq!(
            candidate(a, Edge::Bottom, size, 20.0),
            Rect::new(50.0, 220.0, 150.0, 270.0)
        );
        assert_eq!(
            candidate(a, Edge::Top, size, 20.0),
            Rect::new(50.0, -70.0, 150.0, -20.0)
        );
    }

    #[test]
    fn displacement_direction_prefers_the_larger_axis() {
        assert_eq!(direction_of(Vec2::new(10.0, 3.0)), Edge::Right);
        assert_eq!(direction_of(Vec2::new(-10.0, 3.0)), Edge::Left);
        assert_eq!(direction_of(Vec2::new(2.0, -30.0)), Edge::Top);
        assert_eq!(direction_of(Vec2::new(-2.0, 30.0)), Edge::Bottom);
        // Ties go horizontal.
        assert_eq!(direction_of(Vec2::new(5.0, 5.0)), Edge::Right);
        assert_eq!(direction_of(Vec2::new(-5.0, 5.0)), Edge::Left);
    }

    #[test]
    fn outward_distance_is_signed_per_side() {
        let d = Vec2::new(30.0, -40.0);
        assert_eq!(outward_distance(Edge::Right, d), 30.0);
        assert_eq!(outward_distance(Edge::Left, d), -30.0);
        assert_eq!(outward_distance(Edge::Top, d), 40.0);
        assert_eq!(outward_distance(Edge::Bottom, d), -40.0);
    }
}
