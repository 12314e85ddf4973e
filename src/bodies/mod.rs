mod body;
mod body_type;

pub use self::body::{Body, BodyDesc, BodyPart, BodyPartDesc, OwnerId, UserData};
pub use self::body_type::BodyType;

/// Flags for controlling body behavior
pub mod body_flags {
    use bitflags::bitflags;

    bitflags! {
        /// Flags for controlling the behavior of bodies
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct BodyFlags: u32 {
            /// Body generates begin/end collision events
            const GENERATE_COLLISION_EVENTS = 0x01;

            /// Body's circle parts act as proximity triggers: they report
            /// another body's center entering or leaving the radius
            const SENSOR = 0x02;
        }
    }
}
