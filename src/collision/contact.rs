use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::shapes::Shape;

use super::manifold::ContactSet;

/// Absolute tolerance when matching points against the extreme
/// projection, so that points of a genuinely shared edge survive
/// floating error.
const EDGE_TOLERANCE: f64 = 1e-3;

/// Extracts the contact point(s) for an overlapping pair, given the
/// minimum-penetration axis (oriented from A's center towards B's
/// center).
///
/// If either body is a circle the contact is the single point on the
/// circle's boundary along the axis. For polygon pairs the leading points
/// of A (maximum projection) are matched against the trailing points of B
/// (minimum projection): two points on each side means an edge-edge
/// contact clipped to the shared span, anything else collapses to a
/// single point on the side with fewer extreme points.
pub fn contact_points(body_a: &Body, body_b: &Body, axis: Vec2) -> ContactSet {
    match (&body_a.shape, &body_b.shape) {
        (Shape::Circle(circle), _) => ContactSet::single(circle.center + axis * circle.radius),
        (_, Shape::Circle(circle)) => ContactSet::single(circle.center - axis * circle.radius),
        (Shape::Polygon(poly_a), Shape::Polygon(poly_b)) => {
            let leading_a = extreme_points(&poly_a.points, axis, Extreme::Max);
            let trailing_b = extreme_points(&poly_b.points, axis, Extreme::Min);

            if leading_a.len() != 2 || trailing_b.len() != 2 {
                // Point contact: one side meets the axis in a single
                // point (or in a degenerate cluster); take it from the
                // side with fewer extreme points.
                let point = if leading_a.len() < trailing_b.len() {
                    leading_a[0]
                } else {
                    trailing_b[0]
                };
                return ContactSet::single(point);
            }

            clip_edges(&leading_a, &trailing_b, axis)
        }
    }
}

enum Extreme {
    Min,
    Max,
}

/// Points achieving the minimum or maximum projection onto `axis`,
/// within `EDGE_TOLERANCE` of the true extremum.
fn extreme_points(points: &[Vec2], axis: Vec2, extreme: Extreme) -> Vec<Vec2> {
    let projections: Vec<f64> = points.iter().map(|p| p.dot(axis)).collect();
    let target = match extreme {
        Extreme::Min => projections.iter().cloned().fold(f64::INFINITY, f64::min),
        Extreme::Max => projections
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max),
    };
    points
        .iter()
        .zip(&projections)
        .filter(|(_, d)| (**d - target).abs() < EDGE_TOLERANCE)
        .map(|(p, _)| *p)
        .collect()
}

/// Edge-edge contact: both edges are projected onto the perpendicular of
/// the axis, sorted along it, and clipped to their overlapping span. The
/// result is the pair of points bounding the shared interval.
fn clip_edges(edge_a: &[Vec2], edge_b: &[Vec2], axis: Vec2) -> ContactSet {
    let per = axis.perpendicular();
    let sort = |edge: &[Vec2]| -> [(Vec2, f64); 2] {
        let mut pts = [(edge[0], edge[0].dot(per)), (edge[1], edge[1].dot(per))];
        if pts[1].1 < pts[0].1 {
            pts.swap(0, 1);
        }
        pts
    };

    let mut first = sort(edge_a);
    let mut second = sort(edge_b);
    // Canonical order: `first` starts no later than `second` along the
    // perpendicular.
    if second[0].1 < first[0].1 {
        std::mem::swap(&mut first, &mut second);
    }

    let start = second[0].0;
    let end = if first[1].1 < second[1].1 {
        first[1].0
    } else {
        second[1].0
    };
    ContactSet::pair(start, end)
}
