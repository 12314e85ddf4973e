use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box stored as a center and half extents
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Center of the box in world space
    pub position: Vector2,

    /// Half the width and height of the box
    pub half_extents: Vector2,
}

/// An axis-aligned rectangle in integer pixel units, for debug rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// X of the lower corner
    pub x: i32,

    /// Y of the lower corner
    pub y: i32,

    /// Width of the rectangle
    pub width: i32,

    /// Height of the rectangle
    pub height: i32,
}

impl Aabb {
    /// Creates a new AABB from a center position and half extents
    #[inline]
    pub fn new(position: Vector2, half_extents: Vector2) -> Self {
        Self {
            position,
            half_extents,
        }
    }

    /// Creates an AABB from two opposite corners
    #[inline]
    pub fn from_bounding_vertices(lower: Vector2, upper: Vector2) -> Self {
        let half_extents = (upper - lower) * 0.5;
        Self {
            position: lower + half_extents,
            half_extents,
        }
    }

    /// Creates an AABB enclosing a set of points
    pub fn from_points(points: &[Vector2]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut lower = points[0];
        let mut upper = points[0];

        for point in points.iter().skip(1) {
            lower = lower.component_min(point);
            upper = upper.component_max(point);
        }

        Some(Self::from_bounding_vertices(lower, upper))
    }

    /// Returns the lower corner of the AABB
    #[inline]
    pub fn min(&self) -> Vector2 {
        self.position - self.half_extents
    }

    /// Returns the upper corner of the AABB
    #[inline]
    pub fn max(&self) -> Vector2 {
        self.position + self.half_extents
    }

    /// Returns the full extents of the AABB in each dimension
    #[inline]
    pub fn extents(&self) -> Vector2 {
        self.half_extents * 2.0
    }

    /// Returns the area of the AABB
    #[inline]
    pub fn area(&self) -> f32 {
        let extents = self.extents();
        extents.x * extents.y
    }

    /// Returns the smallest AABB containing both this box and another
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        let lower = self.min().component_min(&other.min());
        let upper = self.max().component_max(&other.max());
        Self::from_bounding_vertices(lower, upper)
    }

    /// Checks if this AABB contains a point
    #[inline]
    pub fn contains_point(&self, point: Vector2) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Checks if this AABB fully contains another AABB
    #[inline]
    pub fn contains_aabb(&self, other: &Self) -> bool {
        let min = self.min();
        let max = self.max();
        let other_min = other.min();
        let other_max = other.max();
        min.x <= other_min.x && max.x >= other_max.x && min.y <= other_min.y && max.y >= other_max.y
    }

    /// Checks if this AABB intersects with another AABB
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        let min = self.min();
        let max = self.max();
        let other_min = other.min();
        let other_max = other.max();
        min.x <= other_max.x && max.x >= other_min.x && min.y <= other_max.y && max.y >= other_min.y
    }

    /// Returns the closest point on the AABB to a given point
    #[inline]
    pub fn closest_point(&self, point: Vector2) -> Vector2 {
        point.clamp(&self.min(), &self.max())
    }

    /// Converts the AABB to an integer rectangle for debug rendering
    ///
    /// The rectangle's corner is the lower corner of the box; width and
    /// height are rounded to whole units.
    #[inline]
    pub fn to_rectangle(&self) -> PixelRect {
        let min = self.min();
        let extents = self.extents();
        PixelRect {
            x: min.x.round() as i32,
            y: min.y.round() as i32,
            width: extents.x.round() as i32,
            height: extents.y.round() as i32,
        }
    }
}
