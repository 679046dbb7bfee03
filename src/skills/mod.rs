//! Skill system: archetypes, owned instances, and the equip loadout.

pub mod data;
pub mod loadout;
pub mod types;

pub use loadout::*;
pub use types::*;
