use crate::math::vec2::Vec2;

/// Result of a pairwise SAT test: the axis of minimum positive
/// penetration and its depth. The axis is a unit vector oriented from
/// body A's center towards body B's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionManifold {
    pub axis: Vec2,
    pub depth: f64,
}

/// One or two contact points associated with a manifold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactSet {
    points: [Vec2; 2],
    count: usize,
}

impl ContactSet {
    pub fn single(point: Vec2) -> Self {
        Self {
            points: [point, Vec2::ZERO],
            count: 1,
        }
    }

    pub fn pair(start: Vec2, end: Vec2) -> Self {
        Self {
            points: [start, end],
            count: 2,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        false // a contact set always holds 1 or 2 points
    }

    pub fn as_slice(&self) -> &[Vec2] {
        &self.points[..self.count]
    }

    /// Midpoint of the two points, or the single point itself. This is
    /// the reference point the impulse resolver uses.
    pub fn average(&self) -> Vec2 {
        if self.count == 1 {
            self.points[0]
        } else {
            (self.points[0] + self.points[1]) * 0.5
        }
    }
}

/// A resolved touch reported by `World::step`: which pair overlapped,
/// along which axis and depth, where, and with what normal impulse
/// magnitude. `impulse == 0.0` means the pair was overlapping but
/// already separating, so no velocity change was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub body_a: usize,
    pub body_b: usize,
    pub axis: Vec2,
    pub depth: f64,
    pub points: ContactSet,
    pub impulse: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_set_single() {
        let set = ContactSet::single(Vec2::new(1.0, 2.0));
        assert_eq!(set.len(), 1);
        assert_eq!(set.as_slice(), &[Vec2::new(1.0, 2.0)]);
        assert_eq!(set.average(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_contact_set_pair() {
        let set = ContactSet::pair(Vec2::new(0.0, 0.0), Vec2::new(2.0, 4.0));
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice().len(), 2);
        assert_eq!(set.average(), Vec2::new(1.0, 2.0));
    }
}
