pub mod contact;
pub mod detection;
pub mod manifold;

pub use contact::contact_points;
pub use detection::{check_collision, penetration};
pub use manifold::{CollisionManifold, Contact, ContactSet};
