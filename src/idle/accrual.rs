//! Idle reward math.
//!
//! Offline time pays out XP and credits at fixed hourly rates, capped at
//! eight hours of full value; hours past the cap pay at half rate. The
//! online variant grants a small fixed bundle per minute of continuous
//! play with no cap at all.

use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// Hourly accrual rates for the two reward channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccrualRates {
    pub xp_per_hour: f64,
    pub credits_per_hour: f64,
}

impl Default for AccrualRates {
    fn default() -> Self {
        AccrualRates {
            xp_per_hour: OFFLINE_XP_PER_HOUR,
            credits_per_hour: OFFLINE_CREDITS_PER_HOUR,
        }
    }
}

/// What an accrual pays out, rounded once at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardBundle {
    pub xp: u64,
    pub credits: u64,
}

impl RewardBundle {
    pub fn is_empty(&self) -> bool {
        self.xp == 0 && self.credits == 0
    }
}

/// Offline rewards for an absence of `elapsed_hours`.
///
/// Negative elapsed time (clock rollback) earns nothing. Hours up to
/// `cap_hours` count in full; hours beyond it are scaled down by
/// `diminishing` before counting.
pub fn compute_offline(
    elapsed_hours: f64,
    rates: &AccrualRates,
    cap_hours: f64,
    diminishing: f64,
) -> RewardBundle {
    let elapsed = elapsed_hours.max(0.0);
    let effective = elapsed.min(cap_hours) + (elapsed - cap_hours).max(0.0) * (1.0 - diminishing);
    RewardBundle {
        xp: (rates.xp_per_hour * effective).round() as u64,
        credits: (rates.credits_per_hour * effective).round() as u64,
    }
}

/// Rewards for `minutes` of continuous online play.
pub fn online_rewards(minutes: u32) -> RewardBundle {
    RewardBundle {
        xp: (ONLINE_XP_PER_MINUTE * minutes as f64).round() as u64,
        credits: (ONLINE_CREDITS_PER_MINUTE * minutes as f64).round() as u64,
    }
}
