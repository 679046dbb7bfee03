//! Companion system: archetypes, owned instances, and the equip roster.

pub mod data;
pub mod roster;
pub mod types;

pub use roster::*;
pub use types::*;
