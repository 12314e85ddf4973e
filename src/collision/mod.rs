mod collision_pair;
mod narrow_phase;

pub use self::collision_pair::{CollisionPair, CollisionState};
pub use self::narrow_phase::{detect, point_in_circle};
