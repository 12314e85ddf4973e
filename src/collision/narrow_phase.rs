use crate::math::{Transform, Vector2, EPSILON};
use crate::shapes::{Circle, Edge, Rectangle, Shape};

/// Tests two shapes for overlap, dispatching on the pair of shape kinds
///
/// Symmetric: `detect(a, b)` always equals `detect(b, a)`. Overlap is
/// strict throughout, so shapes that exactly touch are classified as not
/// colliding. The edge-edge pair has no test; it reports no collision and
/// flags the gap in debug logs (edges are static level geometry and are
/// never tested against each other in practice).
pub fn detect(shape_a: &Shape, transform_a: &Transform, shape_b: &Shape, transform_b: &Transform) -> bool {
    match (shape_a, shape_b) {
        (Shape::Circle(a), Shape::Circle(b)) => circle_circle(a, transform_a, b, transform_b),
        (Shape::Circle(circle), Shape::Rectangle(rectangle)) => {
            circle_rectangle(circle, transform_a, rectangle, transform_b)
        }
        (Shape::Rectangle(rectangle), Shape::Circle(circle)) => {
            circle_rectangle(circle, transform_b, rectangle, transform_a)
        }
        (Shape::Rectangle(a), Shape::Rectangle(b)) => {
            rectangle_rectangle(a, transform_a, b, transform_b)
        }
        (Shape::Circle(circle), Shape::Edge(edge)) => {
            circle_edge(circle, transform_a, edge, transform_b)
        }
        (Shape::Edge(edge), Shape::Circle(circle)) => {
            circle_edge(circle, transform_b, edge, transform_a)
        }
        (Shape::Rectangle(rectangle), Shape::Edge(edge)) => {
            rectangle_edge(rectangle, transform_a, edge, transform_b)
        }
        (Shape::Edge(edge), Shape::Rectangle(rectangle)) => {
            rectangle_edge(rectangle, transform_b, edge, transform_a)
        }
        (Shape::Edge(_), Shape::Edge(_)) => {
            log::debug!("edge-edge narrow phase has no test; reporting no collision");
            false
        }
    }
}

/// Tests whether a world-space point lies strictly inside a circle
///
/// Used by proximity triggers: a sensor reports another body when that
/// body's center is within the sensor circle's radius.
pub fn point_in_circle(circle: &Circle, transform: &Transform, point: Vector2) -> bool {
    let center = circle.world_center(transform);
    center.distance_squared(&point) < circle.radius() * circle.radius()
}

/// Circle-circle overlap: distance between world centers strictly less
/// than the sum of radii, so tangent circles do not collide
fn circle_circle(a: &Circle, transform_a: &Transform, b: &Circle, transform_b: &Transform) -> bool {
    let center_a = a.world_center(transform_a);
    let center_b = b.world_center(transform_b);
    let radii = a.radius() + b.radius();
    center_a.distance_squared(&center_b) < radii * radii
}

/// Circle-rectangle overlap via the closest point on the rectangle
///
/// The circle center is brought into the rectangle's local frame, clamped
/// to the half-extent box, and the clamped point is compared against the
/// radius.
fn circle_rectangle(
    circle: &Circle,
    circle_transform: &Transform,
    rectangle: &Rectangle,
    rectangle_transform: &Transform,
) -> bool {
    let center = circle.world_center(circle_transform);
    let local_center = rectangle_transform.inverse_transform_point(center) - rectangle.center();

    let h = rectangle.half_extents();
    let closest = local_center.clamp(&Vector2::new(-h.x, -h.y), &h);

    closest.distance_squared(&local_center) < circle.radius() * circle.radius()
}

/// Rectangle-rectangle overlap via the separating axis test
///
/// The candidate axes are the edge normals of both rotated rectangles (two
/// unique axes each). If the vertex projections are disjoint on any axis
/// the rectangles are separated; touching intervals count as separated.
fn rectangle_rectangle(
    a: &Rectangle,
    transform_a: &Transform,
    b: &Rectangle,
    transform_b: &Transform,
) -> bool {
    let vertices_a = a.world_vertices(transform_a);
    let vertices_b = b.world_vertices(transform_b);

    let axes = [
        transform_a.transform_direction(Vector2::unit_x()),
        transform_a.transform_direction(Vector2::unit_y()),
        transform_b.transform_direction(Vector2::unit_x()),
        transform_b.transform_direction(Vector2::unit_y()),
    ];

    for axis in &axes {
        let (min_a, max_a) = project(&vertices_a, axis);
        let (min_b, max_b) = project(&vertices_b, axis);
        if max_a <= min_b || max_b <= min_a {
            return false;
        }
    }

    true
}

/// Circle-edge overlap: point-to-segment distance combined with the edge's
/// one-sided outward normal
///
/// A circle whose center lies on the back side of the edge does not
/// collide, whatever the distance; edges are one-sided walls.
fn circle_edge(
    circle: &Circle,
    circle_transform: &Transform,
    edge: &Edge,
    edge_transform: &Transform,
) -> bool {
    let center = circle.world_center(circle_transform);
    let (start, end) = edge.world_endpoints(edge_transform);
    let normal = edge.world_normal(edge_transform);

    if (center - start).dot(&normal) <= 0.0 {
        return false;
    }

    let closest = closest_point_on_segment(start, end, center);
    closest.distance_squared(&center) < circle.radius() * circle.radius()
}

/// Rectangle-edge overlap: the edge segment is clipped against the
/// rectangle in the rectangle's local frame, gated by the edge's one-sided
/// normal
fn rectangle_edge(
    rectangle: &Rectangle,
    rectangle_transform: &Transform,
    edge: &Edge,
    edge_transform: &Transform,
) -> bool {
    let (start, end) = edge.world_endpoints(edge_transform);
    let normal = edge.world_normal(edge_transform);

    let rectangle_center = rectangle_transform.transform_point(rectangle.center());
    if (rectangle_center - start).dot(&normal) <= 0.0 {
        return false;
    }

    let local_start = rectangle_transform.inverse_transform_point(start) - rectangle.center();
    let local_end = rectangle_transform.inverse_transform_point(end) - rectangle.center();

    segment_intersects_box(local_start, local_end, rectangle.half_extents())
}

/// Returns the minimum and maximum projection of a set of vertices onto an axis
fn project(vertices: &[Vector2], axis: &Vector2) -> (f32, f32) {
    let mut min = vertices[0].dot(axis);
    let mut max = min;
    for vertex in vertices.iter().skip(1) {
        let projection = vertex.dot(axis);
        min = min.min(projection);
        max = max.max(projection);
    }
    (min, max)
}

/// Returns the closest point to `point` on the segment from `start` to `end`
fn closest_point_on_segment(start: Vector2, end: Vector2, point: Vector2) -> Vector2 {
    let direction = end - start;
    let length_squared = direction.length_squared();
    if length_squared < EPSILON {
        return start;
    }

    let t = crate::math::clamp((point - start).dot(&direction) / length_squared, 0.0, 1.0);
    start + direction * t
}

/// Slab test for a segment against the axis-aligned box `[-h, h]`
///
/// Strict like the rest of the narrow phase: a segment lying exactly on a
/// face, or grazing a corner with a degenerate clip span, does not overlap.
fn segment_intersects_box(start: Vector2, end: Vector2, h: Vector2) -> bool {
    let direction = end - start;
    let mut t_min: f32 = 0.0;
    let mut t_max: f32 = 1.0;

    for (p, d, extent) in [
        (start.x, direction.x, h.x),
        (start.y, direction.y, h.y),
    ] {
        if d.abs() < EPSILON {
            if p <= -extent || p >= extent {
                return false;
            }
        } else {
            let t0 = (-extent - p) / d;
            let t1 = (extent - p) / d;
            let (t0, t1) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min >= t_max {
                return false;
            }
        }
    }

    true
}
