pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod collision;

/// Re-export common types for easier usage
pub use crate::core::{PhysicsWorld, WorldConfig, BodyHandle};
pub use crate::bodies::{Body, BodyDesc, BodyPart, BodyPartDesc, BodyType, OwnerId, UserData};
pub use crate::shapes::Shape;
pub use crate::math::{Vector2, Angle, Transform, Aabb};

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Invalid state: {0}")]
        InvalidState(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
