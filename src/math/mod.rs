pub mod vec2;

pub use vec2::{centroid, Vec2};
