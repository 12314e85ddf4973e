use crate::bodies::{body_flags::BodyFlags, BodyType};
use crate::error::PhysicsError;
use crate::math::{Aabb, Transform, Vector2};
use crate::shapes::Shape;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// An opaque per-part classification tag
///
/// The engine never interprets the value; collision consumers use it to
/// classify parts (ground, wall, a game-object back-reference) without the
/// engine depending on gameplay types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct UserData(pub u64);

/// An opaque back-reference to the game entity controlling a body
///
/// Gameplay layers assign their own identifiers and resolve them through a
/// side table keyed by body handle; the engine only stores the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct OwnerId(pub u64);

/// One fixture attached to a body: a shape plus an opaque tag
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BodyPart {
    /// The collision shape of this part
    pub shape: Shape,

    /// Opaque classification tag for collision consumers
    pub user_data: UserData,
}

/// Description of a body to create, supplying its initial transform and type
#[derive(Debug, Clone, Copy)]
pub struct BodyDesc {
    /// The body's type (static, dynamic, or kinematic)
    pub body_type: BodyType,

    /// The body's initial transform
    pub transform: Transform,

    /// Optional back-reference to the controlling game entity
    pub owner: Option<OwnerId>,

    /// Behavior flags for the body
    pub flags: BodyFlags,
}

impl BodyDesc {
    /// Creates a description for a body of the given type at the given transform
    pub fn new(body_type: BodyType, transform: Transform) -> Self {
        Self {
            body_type,
            transform,
            owner: None,
            flags: BodyFlags::GENERATE_COLLISION_EVENTS,
        }
    }

    /// Sets the owner back-reference
    pub fn with_owner(mut self, owner: OwnerId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Sets the behavior flags
    pub fn with_flags(mut self, flags: BodyFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// Description of one part to attach to a body
#[derive(Debug, Clone, Copy)]
pub struct BodyPartDesc {
    /// The collision shape of the part
    pub shape: Shape,

    /// Opaque classification tag
    pub user_data: UserData,
}

impl BodyPartDesc {
    /// Creates a part description from a shape and a tag
    pub fn new(shape: Shape, user_data: UserData) -> Self {
        Self { shape, user_data }
    }
}

/// A rigid entity: a transform, a body type, an ordered collection of shape
/// parts, and velocity state
#[derive(Debug, Clone)]
pub struct Body {
    /// The body's transform in world space
    transform: Transform,

    /// The body's type (static, dynamic, or kinematic)
    body_type: BodyType,

    /// The body's fixtures, in attachment order
    parts: Vec<BodyPart>,

    /// The body's linear velocity
    linear_velocity: Vector2,

    /// Optional back-reference to the controlling game entity
    owner: Option<OwnerId>,

    /// The body's behavior flags
    flags: BodyFlags,
}

impl Body {
    /// Creates a new body from a description and its part descriptions
    ///
    /// Zero parts is permitted; such a body is under construction and has
    /// no bounding box until a part is attached.
    pub fn new(desc: &BodyDesc, part_descs: &[BodyPartDesc]) -> Self {
        Self {
            transform: desc.transform,
            body_type: desc.body_type,
            parts: part_descs
                .iter()
                .map(|part| BodyPart {
                    shape: part.shape,
                    user_data: part.user_data,
                })
                .collect(),
            linear_velocity: Vector2::zero(),
            owner: desc.owner,
            flags: desc.flags,
        }
    }

    /// Returns the body's transform
    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Returns a mutable reference to the body's transform
    ///
    /// Gameplay code uses this to place kinematic bodies; static bodies
    /// should not be moved after creation.
    #[inline]
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Sets the body's transform
    #[inline]
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Returns the body's position
    #[inline]
    pub fn position(&self) -> Vector2 {
        self.transform.position
    }

    /// Returns the body's type
    #[inline]
    pub fn body_type(&self) -> BodyType {
        self.body_type
    }

    /// Returns the body's linear velocity
    #[inline]
    pub fn linear_velocity(&self) -> Vector2 {
        self.linear_velocity
    }

    /// Sets the body's linear velocity
    ///
    /// Gameplay code drives kinematic motion through this.
    #[inline]
    pub fn set_linear_velocity(&mut self, velocity: Vector2) {
        self.linear_velocity = velocity;
    }

    /// Returns the body's owner back-reference, if any
    #[inline]
    pub fn owner(&self) -> Option<OwnerId> {
        self.owner
    }

    /// Sets the body's owner back-reference
    #[inline]
    pub fn set_owner(&mut self, owner: Option<OwnerId>) {
        self.owner = owner;
    }

    /// Returns the body's behavior flags
    #[inline]
    pub fn flags(&self) -> BodyFlags {
        self.flags
    }

    /// Returns whether the body's parts act as proximity triggers
    #[inline]
    pub fn is_sensor(&self) -> bool {
        self.flags.contains(BodyFlags::SENSOR)
    }

    /// Returns the body's parts in attachment order
    #[inline]
    pub fn parts(&self) -> &[BodyPart] {
        &self.parts
    }

    /// Attaches a new part to the body
    pub fn add_part(&mut self, part: BodyPartDesc) {
        self.parts.push(BodyPart {
            shape: part.shape,
            user_data: part.user_data,
        });
    }

    /// Computes the body's bounding box as the union of its parts' boxes,
    /// each evaluated against the body's current transform
    ///
    /// Fails with an invalid-state error if the body has no parts.
    pub fn calculate_bounding_box(&self) -> Result<Aabb> {
        let mut parts = self.parts.iter();
        let first = parts.next().ok_or_else(|| {
            PhysicsError::InvalidState("cannot compute bounding box of a body with no parts".into())
        })?;

        let mut bounds = first.shape.bounding_box(&self.transform);
        for part in parts {
            bounds = bounds.union(&part.shape.bounding_box(&self.transform));
        }
        Ok(bounds)
    }

    /// Advances the body by one explicit Euler step
    ///
    /// Dynamic bodies accelerate under gravity then move by their velocity;
    /// kinematic bodies move by their externally-set velocity only; static
    /// bodies are untouched.
    pub(crate) fn integrate(&mut self, gravity: Vector2, dt: f32) {
        match self.body_type {
            BodyType::Dynamic => {
                self.linear_velocity += gravity * dt;
                self.transform.position += self.linear_velocity * dt;
            }
            BodyType::Kinematic => {
                self.transform.position += self.linear_velocity * dt;
            }
            BodyType::Static => {}
        }
    }
}
