use crate::math::{Aabb, Transform};
use crate::shapes::{Circle, Edge, Rectangle};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The kind of a shape, used as the narrow-phase dispatch key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Edge,
}

/// A collision shape attached to a body
///
/// A closed sum type rather than a trait object: bounding-box computation
/// and narrow-phase dispatch match exhaustively over the variants, so
/// adding a variant is a compile-checked change everywhere it matters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Shape {
    /// A circle with a local center offset
    Circle(Circle),

    /// A rectangle with a local center offset and half extents
    Rectangle(Rectangle),

    /// A one-sided line segment for static level geometry
    Edge(Edge),
}

impl Shape {
    /// Returns the kind of this shape
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Edge(_) => ShapeKind::Edge,
        }
    }

    /// Returns the world-space bounding box of the shape given its owning
    /// body's transform
    ///
    /// Pure function of shape and transform; nothing is cached or mutated.
    pub fn bounding_box(&self, transform: &Transform) -> Aabb {
        match self {
            Shape::Circle(circle) => circle.bounding_box(transform),
            Shape::Rectangle(rectangle) => rectangle.bounding_box(transform),
            Shape::Edge(edge) => edge.bounding_box(transform),
        }
    }
}

impl From<Circle> for Shape {
    #[inline]
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    #[inline]
    fn from(rectangle: Rectangle) -> Self {
        Shape::Rectangle(rectangle)
    }
}

impl From<Edge> for Shape {
    #[inline]
    fn from(edge: Edge) -> Self {
        Shape::Edge(edge)
    }
}
