use crate::math::vec2::Vec2;
use crate::shapes::{Projection, Shape};

/// A rigid body: world-space shape plus motion state.
///
/// `inv_mass == 0.0` encodes infinite mass; such a body never moves.
/// Velocities are expressed per simulation step (the tick source is an
/// external collaborator). Angular velocity only affects polygons;
/// circles carry the value but ignore it when advancing.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub shape: Shape,
    pub velocity: Vec2,
    /// Radians per step.
    pub angular_velocity: f64,
    /// 1 / mass; 0 means immovable.
    pub inv_mass: f64,
}

impl Body {
    pub fn new(shape: Shape, inv_mass: f64) -> Self {
        assert!(inv_mass >= 0.0, "inverse mass must be non-negative");
        Self {
            shape,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            inv_mass,
        }
    }

    /// Immovable body (infinite mass).
    pub fn fixed(shape: Shape) -> Self {
        Self::new(shape, 0.0)
    }

    pub fn is_fixed(&self) -> bool {
        self.inv_mass == 0.0
    }

    pub fn project(&self, axis: Vec2) -> Projection {
        self.shape.project(axis)
    }

    pub fn center(&self) -> Vec2 {
        self.shape.center()
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.shape.translate(delta);
    }

    /// Advances the body by one step: translate by the linear velocity,
    /// then rotate a polygon about its new centroid by the angular
    /// velocity. The order matters: the rotation center is the centroid
    /// after translation.
    pub fn advance(&mut self) {
        if self.is_fixed() {
            return;
        }
        let delta = self.velocity;
        self.translate(delta);
        if let Shape::Polygon(polygon) = &mut self.shape {
            if self.angular_velocity != 0.0 {
                polygon.rotate(self.angular_velocity);
            }
        }
    }
}
