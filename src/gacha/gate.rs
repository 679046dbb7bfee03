//! The quantum gate: the gear gacha and its level ladder.
//!
//! Gate levels 1-28 are generated from constants rather than authored by
//! hand. Activating the gate costs one gate shard and produces a bundle
//! of gear pulls; the gate climbs to the next level on its own once the
//! player outlevels it.

use crate::core::constants::*;
use crate::core::curves::tier_ramp;
use crate::core::rarity::{build_for_level, TableParams, WeightTable};
use crate::core::xp::LevelUpReport;
use crate::economy::{Currency, Wallet};
use crate::items::generation::roll_gate_gear;
use crate::items::types::{GearPiece, GearRarity};
use crate::player::PlayerState;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One generated gate level: how many segments a run has, what each
/// segment costs, and any special entry requirements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateLevelConfig {
    pub level: u32,
    pub segment_count: u32,
    pub credit_cost_per_segment: u64,
    pub time_minutes_per_segment: f64,
    pub required_player_level: u32,
    pub required_launch_age_days: i64,
}

impl GateLevelConfig {
    pub fn total_credit_cost(&self) -> u64 {
        self.credit_cost_per_segment * self.segment_count as u64
    }

    pub fn total_time_minutes(&self) -> f64 {
        self.time_minutes_per_segment * self.segment_count as f64
    }
}

fn segment_count_for(level: u32) -> u32 {
    for (i, &range_end) in GATE_SEGMENT_RANGE_ENDS.iter().enumerate() {
        if level <= range_end {
            return GATE_SEGMENT_COUNTS[i];
        }
    }
    GATE_SEGMENT_COUNTS[GATE_SEGMENT_COUNTS.len() - 1]
}

/// Config for one gate level, or `None` for levels outside 1-28.
pub fn gate_config(level: u32) -> Option<GateLevelConfig> {
    if level < 1 || level > GATE_MAX_LEVEL {
        return None;
    }
    let (required_player_level, required_launch_age_days) = if level == GATE_MAX_LEVEL {
        (GATE_FINAL_PLAYER_LEVEL, GATE_FINAL_LAUNCH_AGE_DAYS)
    } else if level == GATE_PENULTIMATE_LEVEL {
        (GATE_PENULTIMATE_PLAYER_LEVEL, GATE_PENULTIMATE_LAUNCH_AGE_DAYS)
    } else {
        (0, 0)
    };
    Some(GateLevelConfig {
        level,
        segment_count: segment_count_for(level),
        credit_cost_per_segment: (GATE_CREDIT_COST_BASE
            * f64::powf(level as f64, GATE_CREDIT_COST_EXPONENT))
        .round() as u64,
        time_minutes_per_segment: GATE_TIME_COST_BASE_MINUTES
            * f64::powf(level as f64, GATE_TIME_COST_EXPONENT),
        required_player_level,
        required_launch_age_days,
    })
}

/// All 28 generated gate levels in order.
pub fn gate_configs() -> Vec<GateLevelConfig> {
    (1..=GATE_MAX_LEVEL).filter_map(gate_config).collect()
}

/// Whether the player may enter a gate level. Unknown levels are closed.
pub fn can_enter(level: u32, player_level: u32, launch_age_days: i64) -> bool {
    match gate_config(level) {
        Some(config) => {
            player_level >= config.required_player_level
                && launch_age_days >= config.required_launch_age_days
        }
        None => false,
    }
}

fn gate_table_params() -> TableParams {
    TableParams {
        top_multiplier: GATE_WEIGHT_LERP_TOP,
        floor: GATE_WEIGHT_FLOOR,
        exponent: GATE_WEIGHT_EXPONENT,
        max_level: GATE_MAX_LEVEL,
        top_tier_unlock_level: ETERNAL_UNLOCK_GATE_LEVEL,
    }
}

/// The rarity table a pull at this gate level rolls against. Late gates
/// stop dropping the low tiers entirely.
pub fn pull_table(gate_level: u32) -> WeightTable {
    let mut table = build_for_level(&GATE_BASE_WEIGHTS, gate_level, &gate_table_params());
    if gate_level >= GATE_MASK_LOW_THRESHOLD {
        table.mask_tiers(&[0, 1, 2]);
    }
    if gate_level >= GATE_MASK_MID_THRESHOLD {
        table.mask_tiers(&[3]);
    }
    if gate_level >= GATE_MASK_HIGH_THRESHOLD {
        table.mask_tiers(&[5]);
    }
    table.renormalize();
    table
}

/// Pulls granted per activation at a gate level.
pub fn pull_count(gate_level: u32) -> u32 {
    if gate_level >= 28 {
        20
    } else if gate_level >= 25 {
        15
    } else if gate_level >= 20 {
        10
    } else if gate_level >= 10 {
        5
    } else if gate_level >= 5 {
        3
    } else {
        1
    }
}

/// Player XP for one pull, scaled by gate level and the pulled tier.
pub fn pull_xp(gate_level: u32, tier: usize) -> u64 {
    let rarity_bonus = tier_ramp(tier, GATE_BASE_WEIGHTS.len() - 1, RARITY_XP_BONUS_PEAK);
    (GATE_PULL_XP_BASE * (1.0 + gate_level as f64 * GATE_PULL_XP_GATE_FACTOR) * rarity_bonus)
        .round() as u64
}

#[derive(Debug, Clone)]
pub struct GatePull {
    pub piece: GearPiece,
    pub xp_granted: u64,
    pub level_up: LevelUpReport,
}

#[derive(Debug, Clone)]
pub struct GateActivation {
    /// Gate level the bundle was pulled at.
    pub gate_level: u32,
    pub pulls: Vec<GatePull>,
    /// Set when the gate climbed a level after the bundle.
    pub unlocked: Option<u32>,
}

impl GateActivation {
    pub fn leveled_player(&self) -> bool {
        self.pulls.iter().any(|pull| pull.level_up.leveled())
    }
}

/// Where the player currently stands on the gate ladder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateState {
    pub current_level: u32,
}

impl GateState {
    pub fn new() -> Self {
        GateState { current_level: 1 }
    }

    /// Climbs to the next gate level if the player has outleveled the
    /// current one and meets the next level's entry requirements.
    pub fn try_unlock_next(&mut self, player_level: u32, launch_age_days: i64) -> Option<u32> {
        let next = self.current_level + 1;
        if next > GATE_MAX_LEVEL {
            return None;
        }
        if player_level < next * PLAYER_LEVELS_PER_GATE {
            return None;
        }
        if !can_enter(next, player_level, launch_age_days) {
            return None;
        }
        self.current_level = next;
        Some(next)
    }
}

impl Default for GateState {
    fn default() -> Self {
        Self::new()
    }
}

/// Spends one gate shard and resolves a full pull bundle at the current
/// gate level. Returns `None` without touching anything when the shard
/// is missing. Pulls resolve strictly in order; each pull's gear and XP
/// grant land before the next pull rolls.
pub fn activate(
    gate: &mut GateState,
    player: &mut PlayerState,
    wallet: &mut Wallet,
    launch_age_days: i64,
    rng: &mut impl Rng,
) -> Option<GateActivation> {
    if !wallet.spend(Currency::GateShard, 1) {
        return None;
    }

    let gate_level = gate.current_level;
    let table = pull_table(gate_level);
    let count = pull_count(gate_level);

    let mut pulls = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let tier = table.draw(rng);
        let rarity = GearRarity::from_index(tier);
        let piece = roll_gate_gear(gate_level, rarity, rng);
        let xp_granted = pull_xp(gate_level, tier);
        let level_up = player.add_xp(xp_granted);
        pulls.push(GatePull {
            piece,
            xp_granted,
            level_up,
        });
    }

    let unlocked = gate.try_unlock_next(player.level(), launch_age_days);

    Some(GateActivation {
        gate_level,
        pulls,
        unlocked,
    })
}
