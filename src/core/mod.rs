pub mod world;
pub mod config;
pub mod storage;
pub mod events;
pub mod debug;

pub use self::config::WorldConfig;
pub use self::debug::DebugPrimitive;
pub use self::events::{BodyEvent, BodyEventType, CollisionEvent, CollisionEventType, EventQueue};
pub use self::storage::BodyArena;
pub use self::world::PhysicsWorld;

/// A unique identifier for a body in the physics world
///
/// Handles are index-based and generation-tagged: when a body is removed
/// its slot may be reused, but the generation advances, so handles to the
/// removed body are detectably stale rather than silently aliasing the new
/// occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}
