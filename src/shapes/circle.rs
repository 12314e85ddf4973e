use crate::error::PhysicsError;
use crate::math::{Aabb, Transform, Vector2};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A circular collision shape with a local-space center offset
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Circle {
    /// Center of the circle in the owning body's local space
    center: Vector2,

    /// Radius of the circle
    radius: f32,
}

impl Circle {
    /// Creates a new circle with the given local center offset and radius
    ///
    /// Returns an error if the radius is negative; malformed shape
    /// descriptions are fatal to level load.
    pub fn new(center: Vector2, radius: f32) -> Result<Self> {
        if radius < 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "circle radius must be non-negative, got {}",
                radius
            )));
        }
        Ok(Self { center, radius })
    }

    /// Returns the local-space center offset of the circle
    #[inline]
    pub fn center(&self) -> Vector2 {
        self.center
    }

    /// Returns the radius of the circle
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the world-space center given the owning body's transform
    #[inline]
    pub fn world_center(&self, transform: &Transform) -> Vector2 {
        transform.transform_point(self.center)
    }

    /// Returns the world-space bounding box given the owning body's transform
    pub fn bounding_box(&self, transform: &Transform) -> Aabb {
        Aabb::new(
            self.world_center(transform),
            Vector2::new(self.radius, self.radius),
        )
    }
}
