use crate::core::constants::*;
use crate::player::class::{class_multiplier, PlayerClass};
use crate::player::stats::PlayerStats;

/// Weighted stat sum times the class multiplier. Companion combat power
/// is added on top by whoever owns the roster.
pub fn player_combat_power(stats: &PlayerStats, player_class: Option<PlayerClass>) -> u64 {
    let weighted = stats.power as f64 * CP_POWER_WEIGHT
        + stats.health as f64 * CP_HEALTH_WEIGHT
        + stats.speed as f64 * CP_SPEED_WEIGHT;
    let mult = class_multiplier(player_class, stats.power, stats.health, stats.speed);
    (weighted * mult).round() as u64
}
