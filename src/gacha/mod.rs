//! Gacha orchestrators: the quantum gate and the two summon machines.

pub mod gate;
pub mod summon;

pub use gate::*;
pub use summon::*;
