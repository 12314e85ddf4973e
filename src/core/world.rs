use crate::bodies::{body_flags::BodyFlags, Body, BodyDesc, BodyPartDesc, BodyType};
use crate::collision::{self, CollisionPair, CollisionState};
use crate::core::{
    BodyArena, BodyEvent, BodyEventType, BodyHandle, CollisionEvent, CollisionEventType,
    EventQueue, WorldConfig,
};
use crate::math::{Aabb, Transform, Vector2};
use crate::shapes::Shape;
use crate::Result;

use std::collections::HashMap;

/// The main physics world that owns all bodies and advances the simulation
///
/// Single-threaded and frame-stepped: one owner calls `simulate(dt)` once
/// per logical frame, then reads the updated transforms and drains the
/// event queue. Structural mutation (adding and removing bodies) happens
/// between frames, never from inside the step.
pub struct PhysicsWorld {
    /// All bodies in the world
    bodies: BodyArena<Body>,

    /// Configuration for the simulation
    config: WorldConfig,

    /// Queue of physics events
    events: EventQueue,

    /// Per-pair overlap state, driving begin and end events
    collision_states: HashMap<CollisionPair, CollisionState>,

    /// The total elapsed simulation time
    time: f32,
}

impl PhysicsWorld {
    /// Creates a new physics world with default settings
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    /// Creates a new physics world with the given configuration
    pub fn with_config(config: WorldConfig) -> Self {
        Self {
            bodies: BodyArena::new(),
            config,
            events: EventQueue::new(),
            collision_states: HashMap::new(),
            time: 0.0,
        }
    }

    /// Returns the current simulation time
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Sets the gravity for the simulation
    pub fn set_gravity(&mut self, gravity: Vector2) {
        self.config.gravity = gravity;
    }

    /// Gets the current gravity
    pub fn gravity(&self) -> Vector2 {
        self.config.gravity
    }

    /// Returns a reference to the world configuration
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Returns a mutable reference to the world configuration
    pub fn config_mut(&mut self) -> &mut WorldConfig {
        &mut self.config
    }

    /// Returns the bounds of the current camera view
    pub fn view_bounds(&self) -> Aabb {
        self.config.view_bounds
    }

    /// Constructs a body from its description and registers it in the world
    ///
    /// Zero part descriptions is permitted (a body under construction);
    /// overlapping parts are not validated.
    pub fn create_body(&mut self, desc: &BodyDesc, part_descs: &[BodyPartDesc]) -> BodyHandle {
        let handle = self.bodies.add(Body::new(desc, part_descs));

        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::Added,
            body: handle,
        });

        handle
    }

    /// Removes a body from the world by identity
    ///
    /// Returns whether the body was present; a second call with the same
    /// handle returns false. Must not be called while `simulate` is
    /// running, which the exclusive borrow enforces.
    pub fn remove_body(&mut self, handle: BodyHandle) -> bool {
        if self.bodies.remove(handle).is_none() {
            return false;
        }

        self.collision_states
            .retain(|pair, _| !pair.contains(handle));

        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::Removed,
            body: handle,
        });

        true
    }

    /// Gets a reference to a body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&Body> {
        self.bodies.get_body(handle)
    }

    /// Gets a mutable reference to a body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut Body> {
        self.bodies.get_body_mut(handle)
    }

    /// Sets the transform of a body, as gameplay code does for kinematic bodies
    pub fn set_transform(&mut self, handle: BodyHandle, transform: Transform) -> Result<()> {
        let body = self.bodies.get_body_mut(handle)?;
        body.set_transform(transform);

        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::TransformChanged,
            body: handle,
        });

        Ok(())
    }

    /// Returns the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Returns an iterator over all bodies in insertion order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.bodies.iter()
    }

    /// Returns a reference to the event queue
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Returns a mutable reference to the event queue, for draining
    pub fn events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Advances the simulation by one frame
    ///
    /// Integrates every body by one explicit Euler step, in insertion
    /// order: dynamic bodies accelerate under gravity and move by their
    /// velocity, kinematic bodies move by their externally-set velocity,
    /// static bodies are untouched. A narrow-phase pass over all body
    /// pairs then updates overlap states and emits begin and end events.
    /// Fully deterministic for identical initial state and dt sequences.
    ///
    /// Collision events from the previous step are discarded here; body
    /// events (added, removed, transform changed) are kept until drained.
    pub fn simulate(&mut self, dt: f32) {
        self.events.clear_collision_events();

        let gravity = self.config.gravity;
        for (_, body) in self.bodies.iter_mut() {
            body.integrate(gravity, dt);
        }

        self.detect_collisions();

        self.time += dt;
    }

    /// Clears the world of all bodies, events, and collision state
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.collision_states.clear();
        self.events.clear();
        self.time = 0.0;
    }

    /// Runs the narrow phase over all body pairs and emits begin/end events
    fn detect_collisions(&mut self) {
        for state in self.collision_states.values_mut() {
            state.update();
        }

        let handles = self.bodies.handles();
        let mut overlapping: Vec<CollisionPair> = Vec::new();

        for (i, &handle_a) in handles.iter().enumerate() {
            for &handle_b in handles.iter().skip(i + 1) {
                let (Some(body_a), Some(body_b)) =
                    (self.bodies.get(handle_a), self.bodies.get(handle_b))
                else {
                    continue;
                };

                // Immovable geometry never generates events against itself
                if body_a.body_type() == BodyType::Static
                    && body_b.body_type() == BodyType::Static
                {
                    continue;
                }

                if !body_a
                    .flags()
                    .union(body_b.flags())
                    .contains(BodyFlags::GENERATE_COLLISION_EVENTS)
                {
                    continue;
                }

                if bodies_overlap(body_a, body_b) {
                    overlapping.push(CollisionPair::new(handle_a, handle_b));
                }
            }
        }

        for pair in overlapping {
            let state = self
                .collision_states
                .entry(pair)
                .or_insert_with(|| CollisionState::new(pair));
            state.is_colliding = true;
        }

        for state in self.collision_states.values() {
            if state.is_new_collision() {
                self.events.add_collision_event(CollisionEvent {
                    event_type: CollisionEventType::Begin,
                    body_a: state.pair.body_a,
                    body_b: state.pair.body_b,
                });
            } else if state.is_collision_end() {
                self.events.add_collision_event(CollisionEvent {
                    event_type: CollisionEventType::End,
                    body_a: state.pair.body_a,
                    body_b: state.pair.body_b,
                });
            }
        }

        // Drop pairs that have been apart for a full frame
        self.collision_states
            .retain(|_, state| state.is_colliding || state.was_colliding);
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Tests whether any parts of two bodies overlap
///
/// If either body is a sensor, the test is the proximity-trigger contract
/// instead: the sensor's circle parts report the other body when its
/// center lies strictly within the radius.
fn bodies_overlap(body_a: &Body, body_b: &Body) -> bool {
    if body_a.is_sensor() || body_b.is_sensor() {
        let (sensor, other) = if body_a.is_sensor() {
            (body_a, body_b)
        } else {
            (body_b, body_a)
        };

        let sensor_transform = sensor.transform();
        return sensor.parts().iter().any(|part| match &part.shape {
            Shape::Circle(circle) => {
                collision::point_in_circle(circle, &sensor_transform, other.position())
            }
            _ => false,
        });
    }

    let transform_a = body_a.transform();
    let transform_b = body_b.transform();

    for part_a in body_a.parts() {
        for part_b in body_b.parts() {
            if collision::detect(&part_a.shape, &transform_a, &part_b.shape, &transform_b) {
                return true;
            }
        }
    }

    false
}
