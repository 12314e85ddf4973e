use crate::error::PhysicsError;
use crate::math::{Aabb, Transform, Vector2};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A rectangular collision shape stored as a local center offset and half
/// extents; the four corners are axis-aligned in local space
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Rectangle {
    /// Center of the rectangle in the owning body's local space
    center: Vector2,

    /// Half the width and height of the rectangle
    half_extents: Vector2,
}

impl Rectangle {
    /// Creates a new rectangle with the given local center offset and half extents
    ///
    /// Returns an error if either half extent is negative.
    pub fn new(center: Vector2, half_extents: Vector2) -> Result<Self> {
        if half_extents.x < 0.0 || half_extents.y < 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "rectangle half extents must be non-negative, got {}",
                half_extents
            )));
        }
        Ok(Self {
            center,
            half_extents,
        })
    }

    /// Returns the local-space center offset of the rectangle
    #[inline]
    pub fn center(&self) -> Vector2 {
        self.center
    }

    /// Returns the half extents of the rectangle
    #[inline]
    pub fn half_extents(&self) -> Vector2 {
        self.half_extents
    }

    /// Returns the four corners in the owning body's local space
    pub fn local_vertices(&self) -> [Vector2; 4] {
        let h = self.half_extents;
        [
            self.center + Vector2::new(-h.x, -h.y),
            self.center + Vector2::new(h.x, -h.y),
            self.center + Vector2::new(h.x, h.y),
            self.center + Vector2::new(-h.x, h.y),
        ]
    }

    /// Returns the four corners in world space, rotated and translated by
    /// the owning body's transform
    pub fn world_vertices(&self, transform: &Transform) -> [Vector2; 4] {
        let local = self.local_vertices();
        [
            transform.transform_point(local[0]),
            transform.transform_point(local[1]),
            transform.transform_point(local[2]),
            transform.transform_point(local[3]),
        ]
    }

    /// Returns the world-space bounding box given the owning body's transform
    ///
    /// The box encloses all four vertices after rotation, so it is correct
    /// for rotated rectangles, not just axis-aligned ones.
    pub fn bounding_box(&self, transform: &Transform) -> Aabb {
        let vertices = self.world_vertices(transform);
        // four vertices, never empty
        Aabb::from_points(&vertices).unwrap()
    }
}
