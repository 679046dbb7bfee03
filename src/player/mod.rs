//! The player: classes, stat scaling, combat power, and equipped state.

pub mod class;
pub mod power;
pub mod state;
pub mod stats;

pub use class::*;
pub use power::*;
pub use state::*;
pub use stats::*;
