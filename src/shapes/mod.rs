pub mod circle;
pub mod polygon;

pub use circle::Circle;
pub use polygon::Polygon;

use crate::math::vec2::Vec2;

/// Signed projection interval of a shape onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub min: f64,
    pub max: f64,
}

/// Geometric shape of a body, in world coordinates.
///
/// A closed enumeration: collision code dispatches on the shape kind
/// rather than on a trait object.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    /// Projects the shape onto `axis` and returns the min/max interval.
    pub fn project(&self, axis: Vec2) -> Projection {
        match self {
            Shape::Circle(circle) => circle.project(axis),
            Shape::Polygon(polygon) => polygon.project(axis),
        }
    }

    /// Circle center, or polygon centroid (arithmetic mean of points).
    pub fn center(&self) -> Vec2 {
        match self {
            Shape::Circle(circle) => circle.center,
            Shape::Polygon(polygon) => polygon.centroid(),
        }
    }

    /// Moves the whole shape by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Circle(circle) => circle.translate(delta),
            Shape::Polygon(polygon) => polygon.translate(delta),
        }
    }
}
