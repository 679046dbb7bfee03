//! Simulation configuration.

use crate::core::constants::MAX_STAGE;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Wall-clock seconds each tick advances the game by
    pub tick_seconds: f64,

    /// Maximum ticks per run before timeout
    pub max_ticks_per_run: u64,

    /// Stage that ends a run early when reached
    pub target_stage: u32,

    /// Whether the driver spends shards and tickets as they drop
    pub spend_currencies: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            tick_seconds: 1.0,
            // One simulated day per run.
            max_ticks_per_run: 86_400,
            target_stage: 100,
            spend_currencies: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking early-stage pacing
    pub fn stage_pacing_test(target_stage: u32) -> Self {
        Self {
            num_runs: 20,
            target_stage,
            max_ticks_per_run: 21_600,
            ..Default::default()
        }
    }

    /// Long-horizon config for gacha economy analysis
    pub fn economy_analysis(num_runs: u32) -> Self {
        Self {
            num_runs,
            target_stage: MAX_STAGE,
            // One simulated week.
            max_ticks_per_run: 604_800,
            ..Default::default()
        }
    }
}
