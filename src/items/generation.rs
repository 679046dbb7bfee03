#![allow(dead_code)]
use super::types::{GearPiece, GearRarity};
use crate::core::constants::*;
use rand::Rng;

/// Rolls one piece of gear for a quantum gate pull.
///
/// Gear level lands uniformly between `gate * 2` and `gate * 3 + 5`
/// (capped at 500 and 600 respectively); stat bonuses roll in fixed bands
/// scaled by rarity and gate level.
pub fn roll_gate_gear(gate_level: u32, rarity: GearRarity, rng: &mut impl Rng) -> GearPiece {
    let min_level = (gate_level * GATE_GEAR_LEVEL_MIN_FACTOR).clamp(1, GATE_GEAR_MIN_LEVEL_CAP);
    let max_level = (gate_level * GATE_GEAR_LEVEL_MAX_FACTOR + GATE_GEAR_LEVEL_MAX_OFFSET)
        .clamp(min_level, GATE_GEAR_MAX_LEVEL_CAP);
    let gear_level = rng.gen_range(min_level..=max_level);

    let rarity_mult = rarity.multiplier();
    let gate = gate_level as f64;

    let power_bonus = (rng.gen_range(GATE_PULL_POWER_ROLL.0..GATE_PULL_POWER_ROLL.1) as f64
        * rarity_mult
        * (1.0 + gate * GATE_PULL_POWER_GATE_FACTOR))
        .round() as u32;
    let health_bonus = (rng.gen_range(GATE_PULL_HEALTH_ROLL.0..GATE_PULL_HEALTH_ROLL.1) as f64
        * rarity_mult
        * (1.0 + gate * GATE_PULL_HEALTH_GATE_FACTOR))
        .round() as u32;
    let speed_bonus = (rng.gen_range(GATE_PULL_SPEED_ROLL.0..GATE_PULL_SPEED_ROLL.1) as f64
        * rarity_mult
        * GATE_PULL_SPEED_RARITY_FACTOR)
        .round() as u32;

    GearPiece::new(rarity, gear_level, power_bonus, health_bonus, speed_bonus)
}
