//! Core progression engines: XP ledgers, rarity resolution, the tick
//! orchestrator, and the shared constants and curves everything else
//! leans on.

#![allow(unused_imports)]

pub mod constants;
pub mod curves;
pub mod game_state;
pub mod rarity;
pub mod tick;
pub mod xp;

pub use constants::*;
pub use curves::*;
pub use game_state::*;
pub use rarity::*;
pub use tick::*;
pub use xp::*;
