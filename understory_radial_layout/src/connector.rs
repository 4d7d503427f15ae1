// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connector geometry: softened links from the focus circle to each child.

use alloc::format;
use alloc::string::String;

use kurbo::{Line, Point, QuadBez, Vec2};
use understory_hierarchy::NodeId;

/// Curve linking the focus circle to one child circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
    /// Child at the far end of the curve.
    pub child: NodeId,
    /// The curve in scene coordinates.
    pub curve: QuadBez,
}

impl Connector {
    /// SVG path data for the curve, in the same `Mx,y Qx,y x,y` form as
    /// `kurbo::BezPath::to_svg`.
    #[must_use]
    pub fn svg_path(&self) -> String {
        let QuadBez { p0, p1, p2 } = self.curve;
        format!("M{},{} Q{},{} {},{}", p0.x, p0.y, p1.x, p1.y, p2.x, p2.y)
    }
}

/// Unit direction from `from` to `to`.
///
/// Coincident or non-finite inputs use a length of `1` in place of the real
/// one, so the result is zero rather than NaN.
#[must_use]
pub fn unit_direction(from: Point, to: Point) -> Vec2 {
    safe_normalize(to - from)
}

fn safe_normalize(v: Vec2) -> Vec2 {
    let len = v.hypot();
    let len = if len > 0.0 && len.is_finite() { len } else { 1.0 };
    v / len
}

/// Pulls both ends of `from → to` inward along the segment.
///
/// The start moves `start_inset` toward `to`; the end moves `end_inset`
/// toward `from`.
#[must_use]
pub fn shrink_segment(from: Point, to: Point, start_inset: f64, end_inset: f64) -> Line {
    let dir = unit_direction(from, to);
    Line::new(from + dir * start_inset, to - dir * end_inset)
}

/// Bows a straight segment into a quadratic curve.
///
/// The control point sits on the perpendicular through the midpoint, offset
/// by `bow × length` toward the left-hand normal `(-dy, dx)`.
#[must_use]
pub fn bowed_curve(segment: Line, bow: f64) -> QuadBez {
    let d = segment.p1 - segment.p0;
    let normal = safe_normalize(Vec2::new(-d.y, d.x));
    let control = segment.midpoint() + normal * (d.hypot() * bow);
    QuadBez::new(segment.p0, control, segment.p1)
}

#[cfg(test)]
mod tests {
    use kurbo::{BezPath, Line, Point, QuadBez, Vec2};
    use understory_hierarchy::{Hierarchy, NodeSpec};

    use super::{Connector, bowed_curve, shrink_segment, unit_direction};

    #[test]
    fn shrink_pulls_both_ends_inward() {
        let line = shrink_segment(Point::ORIGIN, Point::new(100.0, 0.0), 10.0, 20.0);
        assert_eq!(line.p0, Point::new(10.0, 0.0));
        assert_eq!(line.p1, Point::new(80.0, 0.0));
    }

    #[test]
    fn coincident_points_do_not_produce_nan() {
        let p = Point::new(5.0, 5.0);
        assert_eq!(unit_direction(p, p), Vec2::ZERO);
        let line = shrink_segment(p, p, 3.0, 3.0);
        assert_eq!(line.p0, p);
        assert_eq!(line.p1, p);
        let curve = bowed_curve(line, 0.14);
        assert!(curve.p1.x.is_finite() && curve.p1.y.is_finite());
        assert_eq!(curve.p1, p);
    }

    #[test]
    fn bow_offsets_control_point_perpendicular() {
        let curve = bowed_curve(Line::new(Point::ORIGIN, Point::new(100.0, 0.0)), 0.14);
        assert_eq!(curve.p0, Point::ORIGIN);
        assert_eq!(curve.p2, Point::new(100.0, 0.0));
        assert!((curve.p1.x - 50.0).abs() < 1e-9);
        // Left-hand normal of +x is +y.
        assert!((curve.p1.y - 14.0).abs() < 1e-9);
    }

    #[test]
    fn svg_path_matches_kurbo_serialization() {
        let h = Hierarchy::from_spec(NodeSpec::leaf("root")).unwrap();
        let curve = QuadBez::new((1.5, -2.0), (10.0, 4.25), (20.0, 0.0));
        let connector = Connector {
            child: h.root(),
            curve,
        };
        assert_eq!(connector.svg_path(), "M1.5,-2 Q10,4.25 20,0");

        let mut path = BezPath::new();
        path.move_to(curve.p0);
        path.quad_to(curve.p1, curve.p2);
        assert_eq!(BezPath::from_svg(&connector.svg_path()).unwrap(), path);
    }

    #[test]
    fn zero_bow_is_a_straight_curve() {
        let curve = bowed_curve(Line::new(Point::new(0.0, 10.0), Point::new(0.0, 50.0)), 0.0);
        assert_eq!(curve.p1, Point::new(0.0, 30.0));
    }
}
