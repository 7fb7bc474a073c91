use crate::math::vec2::{self, Vec2};
use crate::shapes::Projection;

/// Convex polygon defined by its points in world coordinates.
///
/// Point order is significant: edge `i` runs from `points[i]` to
/// `points[(i + 1) % n]`, and the reference winding is clockwise in
/// screen space (y down). Convexity is a caller contract, not validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Vec2>,
}

impl Polygon {
    /// Creates a polygon from a list of points.
    ///
    /// Panics if fewer than 3 points are provided.
    pub fn new(points: Vec<Vec2>) -> Self {
        assert!(points.len() >= 3, "Polygon must have at least 3 points");
        Self { points }
    }

    /// Axis-aligned rectangle from a center point and full extents,
    /// corners wound clockwise in screen space starting at the top-left.
    pub fn rect(center: Vec2, width: f64, height: f64) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self::new(vec![
            Vec2::new(center.x - hw, center.y - hh),
            Vec2::new(center.x + hw, center.y - hh),
            Vec2::new(center.x + hw, center.y + hh),
            Vec2::new(center.x - hw, center.y + hh),
        ])
    }

    /// Min/max of the point projections onto `axis`.
    pub fn project(&self, axis: Vec2) -> Projection {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for p in &self.points {
            let proj = axis.dot(*p);
            min = min.min(proj);
            max = max.max(proj);
        }
        Projection { min, max }
    }

    /// Arithmetic mean of the points.
    pub fn centroid(&self) -> Vec2 {
        vec2::centroid(&self.points)
    }

    pub fn translate(&mut self, delta: Vec2) {
        for p in &mut self.points {
            *p += delta;
        }
    }

    /// Rotates every point by `angle` radians about the current centroid.
    pub fn rotate(&mut self, angle: f64) {
        let center = self.centroid();
        for p in &mut self.points {
            *p = center + (*p - center).rotate(angle);
        }
    }

    /// Unit normal of each edge, in edge order. Orientation (which of the
    /// two perpendiculars) is not fixed here; the SAT detector orients
    /// normals against the center-to-center direction of the pair under
    /// test. A degenerate edge (coincident points) yields the zero vector.
    pub fn edge_normals(&self) -> Vec<Vec2> {
        let n = self.points.len();
        let mut normals = Vec::with_capacity(n);
        for i in 0..n {
            let edge = self.points[(i + 1) % n] - self.points[i];
            normals.push(edge.normalize().perpendicular());
        }
        normals
    }
}
