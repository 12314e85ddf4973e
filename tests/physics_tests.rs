use approx::assert_relative_eq;
use phys2d::bodies::body_flags::BodyFlags;
use phys2d::collision;
use phys2d::core::{BodyEventType, CollisionEventType};
use phys2d::error::PhysicsError;
use phys2d::shapes::{Circle, Edge, EdgeKind, Rectangle, Shape};
use phys2d::{
    Angle, BodyDesc, BodyPartDesc, BodyType, OwnerId, PhysicsWorld, Transform, UserData, Vector2,
};
use std::f32::consts::PI;

fn circle_part(center: Vector2, radius: f32) -> BodyPartDesc {
    BodyPartDesc::new(
        Shape::Circle(Circle::new(center, radius).unwrap()),
        UserData(0),
    )
}

fn rectangle_shape(center: Vector2, half_extents: Vector2) -> Shape {
    Shape::Rectangle(Rectangle::new(center, half_extents).unwrap())
}

#[test]
fn test_body_creation() {
    let mut world = PhysicsWorld::new();

    let desc = BodyDesc::new(
        BodyType::Dynamic,
        Transform::from_position(Vector2::new(0.0, 10.0)),
    )
    .with_owner(OwnerId(7));
    let handle = world.create_body(&desc, &[circle_part(Vector2::zero(), 1.0)]);

    let body = world.get_body(handle).unwrap();
    assert_eq!(body.position(), Vector2::new(0.0, 10.0));
    assert_eq!(body.body_type(), BodyType::Dynamic);
    assert!(body.linear_velocity().is_zero());
    assert_eq!(body.owner(), Some(OwnerId(7)));
    assert_eq!(body.parts().len(), 1);
    assert_eq!(world.body_count(), 1);
}

#[test]
fn test_body_with_zero_parts_is_permitted() {
    let mut world = PhysicsWorld::new();
    let handle = world.create_body(
        &BodyDesc::new(BodyType::Static, Transform::identity()),
        &[],
    );

    let body = world.get_body(handle).unwrap();
    assert!(body.parts().is_empty());

    // But its bounding box is an invalid-state error
    match body.calculate_bounding_box() {
        Err(PhysicsError::InvalidState(_)) => {}
        other => panic!("expected InvalidState, got {:?}", other),
    }
}

#[test]
fn test_parts_can_be_attached_after_creation() {
    let mut world = PhysicsWorld::new();
    let handle = world.create_body(
        &BodyDesc::new(BodyType::Static, Transform::identity()),
        &[],
    );

    world
        .get_body_mut(handle)
        .unwrap()
        .add_part(circle_part(Vector2::new(1.0, 0.0), 2.0));

    let body = world.get_body(handle).unwrap();
    assert_eq!(body.parts().len(), 1);
    let bounds = body.calculate_bounding_box().unwrap();
    assert_eq!(bounds.position, Vector2::new(1.0, 0.0));
    assert_eq!(bounds.half_extents, Vector2::new(2.0, 2.0));
}

#[test]
fn test_invalid_shape_descriptions_fail() {
    assert!(Circle::new(Vector2::zero(), -1.0).is_err());
    assert!(Rectangle::new(Vector2::zero(), Vector2::new(-0.5, 1.0)).is_err());
    assert!(Circle::new(Vector2::zero(), 0.0).is_ok());
}

#[test]
fn test_body_bounding_box_unions_parts() {
    let mut world = PhysicsWorld::new();
    let handle = world.create_body(
        &BodyDesc::new(
            BodyType::Dynamic,
            Transform::from_position(Vector2::new(5.0, 5.0)),
        ),
        &[
            circle_part(Vector2::new(-2.0, 0.0), 1.0),
            circle_part(Vector2::new(3.0, 1.0), 0.5),
        ],
    );

    let body = world.get_body(handle).unwrap();
    let bounds = body.calculate_bounding_box().unwrap();

    let transform = body.transform();
    let expected = body.parts()[0]
        .shape
        .bounding_box(&transform)
        .union(&body.parts()[1].shape.bounding_box(&transform));

    // Exact equality: same union, same evaluation order
    assert_eq!(bounds.position, expected.position);
    assert_eq!(bounds.half_extents, expected.half_extents);
}

#[test]
fn test_rotated_rectangle_bounding_box() {
    let rectangle = Rectangle::new(Vector2::zero(), Vector2::new(2.0, 1.0)).unwrap();

    // Quarter turn swaps the extents
    let quarter = Transform::new(Vector2::new(10.0, 0.0), Angle::new(PI / 2.0));
    let bounds = rectangle.bounding_box(&quarter);
    assert_relative_eq!(bounds.half_extents.x, 1.0, epsilon = 1e-5);
    assert_relative_eq!(bounds.half_extents.y, 2.0, epsilon = 1e-5);
    assert_relative_eq!(bounds.position.x, 10.0, epsilon = 1e-5);

    // The box encloses every rotated vertex
    let eighth = Transform::new(Vector2::new(-3.0, 4.0), Angle::new(PI / 4.0));
    let bounds = rectangle.bounding_box(&eighth);
    for vertex in rectangle.world_vertices(&eighth) {
        assert!(bounds.contains_point(vertex));
    }
}

#[test]
fn test_circle_circle_collision() {
    let a = Shape::Circle(Circle::new(Vector2::zero(), 1.0).unwrap());
    let b = Shape::Circle(Circle::new(Vector2::zero(), 2.0).unwrap());

    let at = Transform::from_position(Vector2::new(0.0, 0.0));

    // Overlapping
    let bt = Transform::from_position(Vector2::new(2.9, 0.0));
    assert!(collision::detect(&a, &at, &b, &bt));

    // Separated
    let bt = Transform::from_position(Vector2::new(3.1, 0.0));
    assert!(!collision::detect(&a, &at, &b, &bt));
}

#[test]
fn test_circle_circle_tangent_is_not_colliding() {
    // Distance exactly equals the sum of radii: strictly not colliding
    let a = Shape::Circle(Circle::new(Vector2::zero(), 1.0).unwrap());
    let b = Shape::Circle(Circle::new(Vector2::zero(), 2.0).unwrap());

    let at = Transform::from_position(Vector2::zero());
    let bt = Transform::from_position(Vector2::new(3.0, 0.0));
    assert!(!collision::detect(&a, &at, &b, &bt));
}

#[test]
fn test_collision_detection_is_symmetric() {
    let shapes = [
        Shape::Circle(Circle::new(Vector2::new(0.5, 0.0), 1.0).unwrap()),
        rectangle_shape(Vector2::zero(), Vector2::new(1.0, 1.0)),
        Shape::Edge(Edge::new(
            Vector2::new(-4.0, 0.0),
            Vector2::new(4.0, 0.0),
            EdgeKind::Ground,
        )),
    ];

    let transforms = [
        Transform::from_position(Vector2::new(0.0, 0.5)),
        Transform::new(Vector2::new(1.5, 0.0), Angle::new(PI / 6.0)),
        Transform::from_position(Vector2::new(10.0, 10.0)),
    ];

    for shape_a in &shapes {
        for shape_b in &shapes {
            for ta in &transforms {
                for tb in &transforms {
                    assert_eq!(
                        collision::detect(shape_a, ta, shape_b, tb),
                        collision::detect(shape_b, tb, shape_a, ta),
                        "asymmetric result for {:?} vs {:?}",
                        shape_a.kind(),
                        shape_b.kind()
                    );
                }
            }
        }
    }
}

#[test]
fn test_rectangle_rectangle_collision() {
    let a = rectangle_shape(Vector2::zero(), Vector2::new(1.0, 1.0));
    let b = rectangle_shape(Vector2::zero(), Vector2::new(1.0, 1.0));
    let at = Transform::from_position(Vector2::zero());

    // Overlapping, axis-aligned
    assert!(collision::detect(
        &a,
        &at,
        &b,
        &Transform::from_position(Vector2::new(1.5, 0.5))
    ));

    // Separated, axis-aligned
    assert!(!collision::detect(
        &a,
        &at,
        &b,
        &Transform::from_position(Vector2::new(2.5, 0.0))
    ));

    // Rotated 45 degrees, corner reaching into the other rectangle
    let bt = Transform::new(Vector2::new(2.2, 0.0), Angle::new(PI / 4.0));
    assert!(collision::detect(&a, &at, &b, &bt));

    // Rotated 45 degrees, corner falling short
    let bt = Transform::new(Vector2::new(2.6, 0.0), Angle::new(PI / 4.0));
    assert!(!collision::detect(&a, &at, &b, &bt));
}

#[test]
fn test_circle_rectangle_collision() {
    let rectangle = rectangle_shape(Vector2::zero(), Vector2::new(1.0, 1.0));
    let rt = Transform::from_position(Vector2::zero());

    // Closest point on the face
    let circle = Shape::Circle(Circle::new(Vector2::zero(), 2.5).unwrap());
    let ct = Transform::from_position(Vector2::new(3.0, 0.0));
    assert!(collision::detect(&circle, &ct, &rectangle, &rt));

    let circle = Shape::Circle(Circle::new(Vector2::zero(), 1.5).unwrap());
    assert!(!collision::detect(&circle, &ct, &rectangle, &rt));

    // Closest point on the corner: distance from (2, 2) to (1, 1) is sqrt(2)
    let ct = Transform::from_position(Vector2::new(2.0, 2.0));
    let circle = Shape::Circle(Circle::new(Vector2::zero(), 1.45).unwrap());
    assert!(collision::detect(&circle, &ct, &rectangle, &rt));

    let circle = Shape::Circle(Circle::new(Vector2::zero(), 1.40).unwrap());
    assert!(!collision::detect(&circle, &ct, &rectangle, &rt));

    // Circle center inside the rectangle
    let circle = Shape::Circle(Circle::new(Vector2::zero(), 0.5).unwrap());
    let ct = Transform::from_position(Vector2::new(0.25, -0.25));
    assert!(collision::detect(&circle, &ct, &rectangle, &rt));
}

#[test]
fn test_circle_edge_is_one_sided() {
    // Edge from left to right; outward normal points up
    let edge = Shape::Edge(Edge::new(
        Vector2::new(-5.0, 0.0),
        Vector2::new(5.0, 0.0),
        EdgeKind::Ground,
    ));
    let et = Transform::identity();

    let circle = Shape::Circle(Circle::new(Vector2::zero(), 2.0).unwrap());

    // Above the edge, within the radius
    let ct = Transform::from_position(Vector2::new(0.0, 1.0));
    assert!(collision::detect(&circle, &ct, &edge, &et));

    // Below the edge: the back side never collides
    let ct = Transform::from_position(Vector2::new(0.0, -1.0));
    assert!(!collision::detect(&circle, &ct, &edge, &et));

    // Above the edge but out of range
    let ct = Transform::from_position(Vector2::new(0.0, 3.0));
    assert!(!collision::detect(&circle, &ct, &edge, &et));

    // Beyond the endpoint: distance is to the endpoint, not the infinite line
    let ct = Transform::from_position(Vector2::new(6.5, 1.0));
    assert!(!collision::detect(&circle, &ct, &edge, &et));
}

#[test]
fn test_rectangle_edge_collision() {
    let edge = Shape::Edge(Edge::new(
        Vector2::new(-5.0, 0.0),
        Vector2::new(5.0, 0.0),
        EdgeKind::Ground,
    ));
    let et = Transform::identity();
    let rectangle = rectangle_shape(Vector2::zero(), Vector2::new(1.0, 1.0));

    // Straddling the edge from the front side
    let rt = Transform::from_position(Vector2::new(0.0, 0.5));
    assert!(collision::detect(&rectangle, &rt, &edge, &et));

    // Fully above the edge
    let rt = Transform::from_position(Vector2::new(0.0, 3.0));
    assert!(!collision::detect(&rectangle, &rt, &edge, &et));

    // Centered on the back side: one-sided, no collision
    let rt = Transform::from_position(Vector2::new(0.0, -0.5));
    assert!(!collision::detect(&rectangle, &rt, &edge, &et));

    // Sideways past the endpoint
    let rt = Transform::from_position(Vector2::new(7.0, 0.5));
    assert!(!collision::detect(&rectangle, &rt, &edge, &et));
}

#[test]
fn test_rectangle_edge_tangent_is_not_colliding() {
    // Bottom face of the rectangle lies exactly on the edge line: touching,
    // so strictly not colliding, same as tangent circles
    let edge = Shape::Edge(Edge::new(
        Vector2::new(-5.0, 1.0),
        Vector2::new(5.0, 1.0),
        EdgeKind::Ground,
    ));
    let et = Transform::identity();
    let rectangle = rectangle_shape(Vector2::zero(), Vector2::new(1.0, 1.0));

    let rt = Transform::from_position(Vector2::new(0.0, 2.0));
    assert!(!collision::detect(&rectangle, &rt, &edge, &et));

    // Any actual penetration collides
    let rt = Transform::from_position(Vector2::new(0.0, 1.9));
    assert!(collision::detect(&rectangle, &rt, &edge, &et));
}

#[test]
fn test_edge_edge_reports_no_collision() {
    let a = Shape::Edge(Edge::new(
        Vector2::new(-1.0, 0.0),
        Vector2::new(1.0, 0.0),
        EdgeKind::Ground,
    ));
    let b = Shape::Edge(Edge::new(
        Vector2::new(0.0, -1.0),
        Vector2::new(0.0, 1.0),
        EdgeKind::Wall,
    ));

    // The crossing segments would overlap geometrically; the pair has no
    // test and reports false
    let t = Transform::identity();
    assert!(!collision::detect(&a, &t, &b, &t));
}

#[test]
fn test_single_step_integration() {
    let mut world = PhysicsWorld::new();
    world.set_gravity(Vector2::new(0.0, -9.81));

    let handle = world.create_body(
        &BodyDesc::new(
            BodyType::Dynamic,
            Transform::from_position(Vector2::new(0.0, 100.0)),
        ),
        &[circle_part(Vector2::zero(), 1.0)],
    );

    world.simulate(1.0);

    let body = world.get_body(handle).unwrap();
    assert_relative_eq!(body.linear_velocity().x, 0.0);
    assert_relative_eq!(body.linear_velocity().y, -9.81);
    assert_relative_eq!(body.position().y, 100.0 - 9.81, epsilon = 1e-4);
}

#[test]
fn test_three_step_integration() {
    let mut world = PhysicsWorld::new();
    world.set_gravity(Vector2::new(0.0, -10.0));

    let handle = world.create_body(
        &BodyDesc::new(
            BodyType::Dynamic,
            Transform::from_position(Vector2::new(0.0, 100.0)),
        )
        .with_owner(OwnerId(1)),
        &[circle_part(Vector2::zero(), 1.0)],
    );

    for _ in 0..3 {
        world.simulate(0.1);
    }

    // Velocity first, then position, each step: v = -1, -2, -3;
    // y = 100 - (0.1 + 0.2 + 0.3)
    let body = world.get_body(handle).unwrap();
    assert_relative_eq!(body.linear_velocity().y, -3.0, epsilon = 1e-5);
    assert_relative_eq!(body.position().y, 99.4, epsilon = 1e-4);
}

#[test]
fn test_integration_is_deterministic() {
    let run = || {
        let mut world = PhysicsWorld::new();
        world.set_gravity(Vector2::new(0.3, -9.81));
        let handle = world.create_body(
            &BodyDesc::new(
                BodyType::Dynamic,
                Transform::from_position(Vector2::new(1.0, 50.0)),
            ),
            &[circle_part(Vector2::zero(), 1.0)],
        );
        for _ in 0..120 {
            world.simulate(1.0 / 60.0);
        }
        world.get_body(handle).unwrap().position()
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
}

#[test]
fn test_static_and_kinematic_bodies() {
    let mut world = PhysicsWorld::new();
    world.set_gravity(Vector2::new(0.0, -10.0));

    let static_handle = world.create_body(
        &BodyDesc::new(
            BodyType::Static,
            Transform::from_position(Vector2::new(0.0, 5.0)),
        ),
        &[circle_part(Vector2::zero(), 1.0)],
    );

    let kinematic_handle = world.create_body(
        &BodyDesc::new(
            BodyType::Kinematic,
            Transform::from_position(Vector2::new(0.0, 5.0)),
        ),
        &[circle_part(Vector2::zero(), 1.0)],
    );
    world
        .get_body_mut(kinematic_handle)
        .unwrap()
        .set_linear_velocity(Vector2::new(2.0, 0.0));

    world.simulate(1.0);

    // Static bodies never move
    let body = world.get_body(static_handle).unwrap();
    assert_eq!(body.position(), Vector2::new(0.0, 5.0));

    // Kinematic bodies move by their set velocity but receive no gravity
    let body = world.get_body(kinematic_handle).unwrap();
    assert_eq!(body.position(), Vector2::new(2.0, 5.0));
    assert_eq!(body.linear_velocity(), Vector2::new(2.0, 0.0));
}

#[test]
fn test_body_removal() {
    let mut world = PhysicsWorld::new();
    let desc = BodyDesc::new(BodyType::Static, Transform::identity());

    let first = world.create_body(&desc, &[circle_part(Vector2::zero(), 1.0)]);
    let second = world.create_body(&desc, &[circle_part(Vector2::zero(), 1.0)]);
    assert_eq!(world.body_count(), 2);

    assert!(world.remove_body(first));
    assert_eq!(world.body_count(), 1);

    // Removing the same body again is a no-op
    assert!(!world.remove_body(first));
    assert_eq!(world.body_count(), 1);
    assert!(world.get_body(second).is_ok());
}

#[test]
fn test_stale_handles_do_not_resurrect() {
    let mut world = PhysicsWorld::new();
    let desc = BodyDesc::new(BodyType::Static, Transform::identity());

    let stale = world.create_body(&desc, &[]);
    assert!(world.remove_body(stale));

    match world.get_body(stale) {
        Err(PhysicsError::ResourceNotFound(_)) => {}
        other => panic!("expected ResourceNotFound, got {:?}", other),
    }

    // The freed slot may be reused, but the stale handle stays invalid
    let replacement = world.create_body(&desc, &[]);
    assert!(world.get_body(replacement).is_ok());
    assert!(world.get_body(stale).is_err());
    assert!(!world.remove_body(stale));
}

#[test]
fn test_collision_begin_and_end_events() {
    let mut world = PhysicsWorld::new();

    let ground = world.create_body(
        &BodyDesc::new(BodyType::Static, Transform::identity()),
        &[circle_part(Vector2::zero(), 1.0)],
    );

    // Kinematic body passing through the static circle
    let mover = world.create_body(
        &BodyDesc::new(
            BodyType::Kinematic,
            Transform::from_position(Vector2::new(0.0, 11.0)),
        ),
        &[circle_part(Vector2::zero(), 1.0)],
    );
    world
        .get_body_mut(mover)
        .unwrap()
        .set_linear_velocity(Vector2::new(0.0, -9.0));

    // After the first step the mover is at y = 2: tangent, not colliding
    world.simulate(1.0);
    assert!(!world.events().has_collision_events());

    // At y = -7 the bodies have passed each other entirely; no overlap
    // frame was ever observed, so no events at all
    world.simulate(1.0);
    assert!(!world.events().has_collision_events());

    // Slow down and come back up through the circle
    world
        .get_body_mut(mover)
        .unwrap()
        .set_linear_velocity(Vector2::new(0.0, 8.0));
    world.simulate(1.0);

    let events = world.events().collision_events_of_type(CollisionEventType::Begin);
    assert_eq!(events.len(), 1);
    assert!(events[0].body_a == ground || events[0].body_b == ground);

    // Leaving again produces the matching end event
    world.simulate(1.0);
    let events = world.events().collision_events_of_type(CollisionEventType::End);
    assert_eq!(events.len(), 1);
}

#[test]
fn test_proximity_sensor_tracks_body_center() {
    let mut world = PhysicsWorld::new();

    let sensor = world.create_body(
        &BodyDesc::new(BodyType::Static, Transform::identity()).with_flags(
            BodyFlags::SENSOR | BodyFlags::GENERATE_COLLISION_EVENTS,
        ),
        &[circle_part(Vector2::zero(), 5.0)],
    );

    let visitor = world.create_body(
        &BodyDesc::new(
            BodyType::Kinematic,
            Transform::from_position(Vector2::new(0.0, 10.0)),
        ),
        &[circle_part(Vector2::zero(), 0.5)],
    );
    world
        .get_body_mut(visitor)
        .unwrap()
        .set_linear_velocity(Vector2::new(0.0, -6.0));

    // y = 4: center inside the sensor radius
    world.simulate(1.0);
    let begins = world.events().collision_events_of_type(CollisionEventType::Begin);
    assert_eq!(begins.len(), 1);
    assert!(begins[0].body_a == sensor || begins[0].body_b == sensor);

    // y = -2: still inside, no new events
    world.simulate(1.0);
    assert!(!world.events().has_collision_events());

    // y = -8: left the radius
    world.simulate(1.0);
    let ends = world.events().collision_events_of_type(CollisionEventType::End);
    assert_eq!(ends.len(), 1);
}

#[test]
fn test_removed_body_produces_no_further_events() {
    let mut world = PhysicsWorld::new();

    let a = world.create_body(
        &BodyDesc::new(BodyType::Static, Transform::identity()),
        &[circle_part(Vector2::zero(), 1.0)],
    );
    let b = world.create_body(
        &BodyDesc::new(
            BodyType::Kinematic,
            Transform::from_position(Vector2::new(0.5, 0.0)),
        ),
        &[circle_part(Vector2::zero(), 1.0)],
    );

    world.simulate(1.0 / 60.0);
    assert_eq!(
        world
            .events()
            .collision_events_of_type(CollisionEventType::Begin)
            .len(),
        1
    );

    // Structural mutation between frames; the stale pair state goes too
    assert!(world.remove_body(b));
    world.simulate(1.0 / 60.0);
    assert!(!world.events().has_collision_events());
    let _ = a;
}

#[test]
fn test_body_events_survive_the_simulation_step() {
    let mut world = PhysicsWorld::new();
    let handle = world.create_body(
        &BodyDesc::new(BodyType::Dynamic, Transform::identity()),
        &[circle_part(Vector2::zero(), 1.0)],
    );

    // Structural mutation happens between frames; the step only discards
    // the previous step's collision events, so the Added event is still
    // there when the consumer drains after simulate
    world.simulate(1.0 / 60.0);

    let added = world.events().body_events_for_body(handle);
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].event_type, BodyEventType::Added);

    while world.events_mut().next_body_event().is_some() {}

    world
        .set_transform(handle, Transform::from_position(Vector2::new(1.0, 0.0)))
        .unwrap();
    assert!(world.remove_body(handle));
    world.simulate(1.0 / 60.0);

    let events: Vec<_> = std::iter::from_fn(|| world.events_mut().next_body_event()).collect();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_type, BodyEventType::TransformChanged);
    assert_eq!(events[0].body, handle);
    assert_eq!(events[1].event_type, BodyEventType::Removed);
    assert_eq!(events[1].body, handle);
}

#[test]
fn test_world_clear_tears_down_all_bodies() {
    let mut world = PhysicsWorld::new();
    let desc = BodyDesc::new(BodyType::Dynamic, Transform::identity());

    let handles: Vec<_> = (0..4)
        .map(|_| world.create_body(&desc, &[circle_part(Vector2::zero(), 1.0)]))
        .collect();
    world.simulate(1.0 / 60.0);

    world.clear();
    assert_eq!(world.body_count(), 0);
    assert_relative_eq!(world.time(), 0.0);
    for handle in handles {
        assert!(world.get_body(handle).is_err());
    }
}

#[test]
fn test_debug_primitives_cover_all_parts() {
    let mut world = PhysicsWorld::new();

    world.create_body(
        &BodyDesc::new(BodyType::Static, Transform::identity()),
        &[
            circle_part(Vector2::zero(), 1.0),
            BodyPartDesc::new(
                rectangle_shape(Vector2::new(2.0, 0.0), Vector2::new(1.0, 1.0)),
                UserData(1),
            ),
            BodyPartDesc::new(
                Shape::Edge(Edge::new(
                    Vector2::new(-3.0, 0.0),
                    Vector2::new(3.0, 0.0),
                    EdgeKind::Ground,
                )),
                UserData(2),
            ),
        ],
    );

    // One primitive per part, plus the view bounds box
    let primitives = world.debug_primitives();
    assert_eq!(primitives.len(), 4);
}
