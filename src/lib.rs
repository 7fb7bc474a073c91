//! 2D rigid-body collision detection and impulse resolution for convex
//! shapes (circles and polygons, with rectangles as a polygon special
//! case).
//!
//! Per pair and per step: a separating-axis test finds the axis of
//! minimum penetration, the contact extractor turns it into 1 or 2
//! contact points, and the sequential impulse resolver applies
//! restitution, friction damping, angular response, and positional
//! correction. [`world::World`] orchestrates the brute-force all-pairs
//! step loop.

pub mod collision;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod solver;
pub mod world;

// Re-export key types for easier use
pub use collision::{check_collision, contact_points, CollisionManifold, Contact, ContactSet};
pub use math::vec2::Vec2;
pub use objects::body::Body;
pub use shapes::{Circle, Polygon, Shape};
pub use world::World;
