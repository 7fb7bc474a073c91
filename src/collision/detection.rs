use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::shapes::Shape;

use super::manifold::CollisionManifold;

/// Overlap of the two bodies' projection intervals on `axis`, clamped to
/// zero when the intervals are disjoint.
pub fn penetration(axis: Vec2, body_a: &Body, body_b: &Body) -> f64 {
    let a = body_a.project(axis);
    let b = body_b.project(axis);
    let left = a.min.max(b.min);
    let right = a.max.min(b.max);
    if left <= right {
        right - left
    } else {
        0.0
    }
}

/// Pushes one outward normal per polygon edge, oriented so that each
/// normal satisfies `dot(normal, toward) >= 0`. The same `toward` vector
/// (normalized A-center to B-center) must be used for both bodies of a
/// pair so that every candidate axis points from A towards B.
fn push_polygon_axes(points: &[Vec2], toward: Vec2, axes: &mut Vec<Vec2>) {
    let n = points.len();
    for i in 0..n {
        let edge = points[(i + 1) % n] - points[i];
        let mut normal = edge.normalize().perpendicular();
        if normal.dot(toward) < 0.0 {
            normal = -normal;
        }
        axes.push(normal);
    }
}

/// Candidate separating axes for a body pair, all oriented from A's
/// center towards B's center.
///
/// Circle-circle: the single center line. Circle-polygon: one axis per
/// polygon point (point-to-circle-center direction, sign-corrected) plus
/// the polygon's edge normals, to catch point-nearest contacts the edge
/// normals alone would miss. Polygon-polygon: both bodies' edge normals.
fn candidate_axes(body_a: &Body, body_b: &Body) -> Vec<Vec2> {
    let mut axes = Vec::new();
    let toward = (body_b.center() - body_a.center()).normalize();

    match (&body_a.shape, &body_b.shape) {
        (Shape::Circle(_), Shape::Circle(_)) => {
            axes.push(toward);
        }
        (Shape::Circle(circle), Shape::Polygon(polygon)) => {
            for p in &polygon.points {
                axes.push((*p - circle.center).normalize());
            }
            push_polygon_axes(&polygon.points, toward, &mut axes);
        }
        (Shape::Polygon(polygon), Shape::Circle(circle)) => {
            for p in &polygon.points {
                axes.push((circle.center - *p).normalize());
            }
            push_polygon_axes(&polygon.points, toward, &mut axes);
        }
        (Shape::Polygon(poly_a), Shape::Polygon(poly_b)) => {
            push_polygon_axes(&poly_a.points, toward, &mut axes);
            push_polygon_axes(&poly_b.points, toward, &mut axes);
        }
    }
    axes
}

/// Full SAT test for a pair of bodies.
///
/// Zero penetration on any candidate axis proves separation and
/// short-circuits to `None` (strict comparison against 0.0, no epsilon).
/// Otherwise the first axis achieving the minimum positive penetration
/// wins and becomes the manifold axis. An empty axis list reports no
/// collision by convention.
pub fn check_collision(body_a: &Body, body_b: &Body) -> Option<CollisionManifold> {
    let axes = candidate_axes(body_a, body_b);
    if axes.is_empty() {
        return None;
    }

    let mut min_depth = f64::INFINITY;
    let mut min_axis = Vec2::ZERO;
    for axis in axes {
        let p = penetration(axis, body_a, body_b);
        if p == 0.0 {
            return None;
        }
        if p < min_depth {
            min_depth = p;
            min_axis = axis;
        }
    }

    Some(CollisionManifold {
        axis: min_axis,
        depth: min_depth,
    })
}
