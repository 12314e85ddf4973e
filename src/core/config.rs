use crate::math::{Aabb, Vector2};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for a physics world
///
/// Read once from level configuration at world creation; gravity remains
/// settable afterwards through the world.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct WorldConfig {
    /// The gravity acceleration applied to dynamic bodies
    pub gravity: Vector2,

    /// The bounds of the playable world
    pub world_bounds: Aabb,

    /// The bounds of the current camera view, drawable by a debug renderer
    pub view_bounds: Aabb,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vector2::new(0.0, -9.81),
            world_bounds: Aabb::new(Vector2::zero(), Vector2::new(1000.0, 1000.0)),
            view_bounds: Aabb::new(Vector2::zero(), Vector2::new(400.0, 300.0)),
        }
    }
}
