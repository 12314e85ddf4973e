#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Type of body, determining how it behaves in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum BodyType {
    /// Dynamic bodies are integrated every step: gravity accelerates them
    /// and their velocity moves them
    Dynamic,

    /// Kinematic bodies are moved by their externally-set velocity but do
    /// not respond to gravity
    Kinematic,

    /// Static bodies never have their transform mutated by the simulation
    Static,
}
