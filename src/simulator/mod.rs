//! Headless balance simulator for Monte Carlo analysis.
//!
//! Run many seeded playthroughs to analyze:
//! - Stage and level pacing over a simulated day
//! - Currency drop income and gacha spend patterns
//! - Gate ladder climb rate against player level
//!
//! The simulator drives the real `run_tick()` loop, so results match
//! actual gameplay behavior.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::run_simulation;
