use crate::math::{Aabb, Transform, Vector2};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Classification of an edge for friction purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum EdgeKind {
    /// Vertical level geometry
    Wall,

    /// Horizontal level geometry the player can stand on
    Ground,
}

/// A one-sided line segment used for static level geometry
///
/// The outward normal is the start-to-end direction rotated 90 degrees
/// counter-clockwise; shapes approaching from the back side do not collide.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Edge {
    /// Start point in the owning body's local space
    start: Vector2,

    /// End point in the owning body's local space
    end: Vector2,

    /// Whether this edge is a wall or ground
    kind: EdgeKind,
}

impl Edge {
    /// Creates a new edge between two local-space endpoints
    pub fn new(start: Vector2, end: Vector2, kind: EdgeKind) -> Self {
        Self { start, end, kind }
    }

    /// Returns the local-space start point
    #[inline]
    pub fn start(&self) -> Vector2 {
        self.start
    }

    /// Returns the local-space end point
    #[inline]
    pub fn end(&self) -> Vector2 {
        self.end
    }

    /// Returns whether this edge is a wall or ground
    #[inline]
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// Returns the outward normal in local space
    #[inline]
    pub fn normal(&self) -> Vector2 {
        (self.end - self.start).perpendicular().normalize()
    }

    /// Returns the endpoints in world space
    pub fn world_endpoints(&self, transform: &Transform) -> (Vector2, Vector2) {
        (
            transform.transform_point(self.start),
            transform.transform_point(self.end),
        )
    }

    /// Returns the outward normal in world space
    #[inline]
    pub fn world_normal(&self, transform: &Transform) -> Vector2 {
        transform.transform_direction(self.normal())
    }

    /// Returns the world-space bounding box spanning the two endpoints
    pub fn bounding_box(&self, transform: &Transform) -> Aabb {
        let (start, end) = self.world_endpoints(transform);
        Aabb::from_bounding_vertices(start.component_min(&end), start.component_max(&end))
    }
}
