use crate::core::PhysicsWorld;
use crate::math::{Aabb, Vector2};
use crate::shapes::Shape;

/// One drawable primitive for an external debug renderer
///
/// The renderer enumerates these read-only; nothing here can mutate the
/// physics state.
#[derive(Debug, Clone, Copy)]
pub enum DebugPrimitive {
    /// A circle in world space
    Circle {
        /// Center of the circle
        center: Vector2,

        /// Radius of the circle
        radius: f32,
    },

    /// A rectangle's four corners in world space
    Polygon([Vector2; 4]),

    /// A line segment in world space
    Segment {
        /// Start of the segment
        start: Vector2,

        /// End of the segment
        end: Vector2,
    },

    /// An axis-aligned box, such as the view bounds
    Box(Aabb),
}

impl PhysicsWorld {
    /// Collects one drawable primitive per body part, plus the view bounds
    pub fn debug_primitives(&self) -> Vec<DebugPrimitive> {
        let mut primitives = Vec::new();

        for (_, body) in self.bodies() {
            let transform = body.transform();
            for part in body.parts() {
                primitives.push(match &part.shape {
                    Shape::Circle(circle) => DebugPrimitive::Circle {
                        center: circle.world_center(&transform),
                        radius: circle.radius(),
                    },
                    Shape::Rectangle(rectangle) => {
                        DebugPrimitive::Polygon(rectangle.world_vertices(&transform))
                    }
                    Shape::Edge(edge) => {
                        let (start, end) = edge.world_endpoints(&transform);
                        DebugPrimitive::Segment { start, end }
                    }
                });
            }
        }

        primitives.push(DebugPrimitive::Box(self.view_bounds()));
        primitives
    }
}
