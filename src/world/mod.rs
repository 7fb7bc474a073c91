use log::{debug, trace};

use crate::collision::{check_collision, contact_points, Contact};
use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::solver;

/// Owns the body list and runs the per-tick simulation step. There are
/// no hidden singletons: the caller holds the `World` and drives it from
/// whatever tick source it has.
pub struct World {
    pub bodies: Vec<Body>,
    /// Velocity added to every movable body each step, before
    /// integration. Defaults to zero.
    pub gravity: Vec2,
    /// Contacts produced by the last `step`, kept for the caller to
    /// visualize.
    pub contacts: Vec<Contact>,
}

impl World {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            gravity: Vec2::ZERO,
            contacts: Vec::new(),
        }
    }

    /// Adds a body and returns its index.
    pub fn add_body(&mut self, body: Body) -> usize {
        let index = self.bodies.len();
        self.bodies.push(body);
        index
    }

    /// Advances the simulation by one step: integrate every body, then
    /// test all unordered pairs and resolve each overlap in sequence.
    ///
    /// Resolution of pair `(i, j)` is visible to every pair tested after
    /// it within the same step; there is no snapshot isolation, so
    /// multi-body contact clusters resolve order-dependently. Returns
    /// the contacts produced this step.
    pub fn step(&mut self) -> &[Contact] {
        for body in &mut self.bodies {
            if !body.is_fixed() {
                body.velocity += self.gravity;
            }
            body.advance();
        }

        self.contacts.clear();
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                // Split borrow: i < j, so body i lives in the left half.
                let (left, right) = self.bodies.split_at_mut(j);
                let body_a = &mut left[i];
                let body_b = &mut right[0];

                if body_a.is_fixed() && body_b.is_fixed() {
                    continue;
                }

                let Some(manifold) = check_collision(body_a, body_b) else {
                    continue;
                };
                debug!(
                    "contact pair=({}, {}) axis=({:.4}, {:.4}) depth={:.4}",
                    i, j, manifold.axis.x, manifold.axis.y, manifold.depth
                );

                let points = contact_points(body_a, body_b, manifold.axis);
                let impulse =
                    solver::resolve(body_a, body_b, manifold.axis, manifold.depth, &points);
                trace!(
                    "resolved pair=({}, {}) points={} impulse={:.4}",
                    i,
                    j,
                    points.len(),
                    impulse
                );

                self.contacts.push(Contact {
                    body_a: i,
                    body_b: j,
                    axis: manifold.axis,
                    depth: manifold.depth,
                    points,
                    impulse,
                });
            }
        }
        &self.contacts
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
