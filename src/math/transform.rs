use crate::math::{Angle, Vector2};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represents a body's placement in world space (position and rotation)
///
/// A transform is owned exclusively by its body: the simulation step mutates
/// it for dynamic bodies, gameplay code mutates it for kinematic bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Transform {
    /// Position in world space
    pub position: Vector2,

    /// Rotation about the position
    pub rotation: Angle,
}

impl Transform {
    /// Creates a new transform with the given position and rotation
    #[inline]
    pub fn new(position: Vector2, rotation: Angle) -> Self {
        Self { position, rotation }
    }

    /// Creates a new identity transform (no translation, no rotation)
    #[inline]
    pub fn identity() -> Self {
        Self {
            position: Vector2::zero(),
            rotation: Angle::ZERO,
        }
    }

    /// Creates a new transform from just a position
    #[inline]
    pub fn from_position(position: Vector2) -> Self {
        Self {
            position,
            rotation: Angle::ZERO,
        }
    }

    /// Transforms a local-space point into world space (rotate, then translate)
    #[inline]
    pub fn transform_point(&self, point: Vector2) -> Vector2 {
        self.rotation.rotate(point) + self.position
    }

    /// Transforms a world-space point into local space
    #[inline]
    pub fn inverse_transform_point(&self, point: Vector2) -> Vector2 {
        self.rotation.rotate_inverse(point - self.position)
    }

    /// Transforms a direction vector, ignoring translation
    #[inline]
    pub fn transform_direction(&self, direction: Vector2) -> Vector2 {
        self.rotation.rotate(direction)
    }
}

impl Default for Transform {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}
