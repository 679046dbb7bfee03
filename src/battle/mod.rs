//! Combat: enemy scaling and the stage loop.

pub mod enemy;
pub mod stage;

pub use enemy::*;
pub use stage::*;
