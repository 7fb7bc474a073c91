use crate::math::vec2::Vec2;
use crate::shapes::Projection;

/// Circle in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vec2, radius: f64) -> Self {
        assert!(radius > 0.0, "Circle radius must be positive");
        Self { center, radius }
    }

    /// Projection onto `axis`: the center projection plus/minus the radius.
    pub fn project(&self, axis: Vec2) -> Projection {
        let mid = axis.dot(self.center);
        Projection {
            min: mid - self.radius,
            max: mid + self.radius,
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_circle_new() {
        let c = Circle::new(Vec2::new(1.0, 2.0), 5.0);
        assert_eq!(c.center, Vec2::new(1.0, 2.0));
        assert_eq!(c.radius, 5.0);
    }

    #[test]
    #[should_panic]
    fn test_circle_new_zero_radius() {
        Circle::new(Vec2::ZERO, 0.0);
    }

    #[test]
    fn test_circle_project() {
        let c = Circle::new(Vec2::new(3.0, 0.0), 2.0);
        let p = c.project(Vec2::new(1.0, 0.0));
        assert!((p.min - 1.0).abs() < EPSILON);
        assert!((p.max - 5.0).abs() < EPSILON);

        // Axis orthogonal to the offset: interval centered on zero.
        let p = c.project(Vec2::new(0.0, 1.0));
        assert!((p.min + 2.0).abs() < EPSILON);
        assert!((p.max - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_circle_translate() {
        let mut c = Circle::new(Vec2::new(1.0, 1.0), 1.0);
        c.translate(Vec2::new(2.0, -3.0));
        assert_eq!(c.center, Vec2::new(3.0, -2.0));
        assert_eq!(c.radius, 1.0);
    }
}
