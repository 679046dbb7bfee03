use crate::core::constants::*;
use crate::core::curves::smooth_ease;
use crate::items::Equipment;
use crate::player::class::{self, PlayerClass, StatKind};
use crate::skills::{SkillEffect, SkillLoadout};
use serde::{Deserialize, Serialize};

/// Scaled stat totals. Rebuilt from scratch on every recalculation;
/// nothing in here accumulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub power: u32,
    pub health: u32,
    pub speed: u32,
}

impl PlayerStats {
    pub fn zero() -> Self {
        PlayerStats {
            power: 0,
            health: 0,
            speed: 0,
        }
    }

    /// Rebuilds stat totals from base values, gear, the active class
    /// upgrade, and equipped skills.
    pub fn recalculate(
        level: u32,
        player_class: Option<PlayerClass>,
        gate_level: u32,
        equipment: &Equipment,
        skills: &SkillLoadout,
    ) -> Self {
        // Base stat = intrinsic base + active class upgrade bonus.
        let mut base_power = BASE_POWER;
        let mut base_health = BASE_HEALTH;
        let mut base_speed = BASE_SPEED;
        if let Some(upgrade) = class::active_upgrade(player_class, level, gate_level) {
            match upgrade.stat {
                StatKind::Power => base_power += upgrade.bonus,
                StatKind::Health => base_health += upgrade.bonus,
                StatKind::Speed => base_speed += upgrade.bonus,
            }
        }

        // Gear contributes its scaled stats on top of base.
        let mut power_total = base_power;
        let mut health_total = base_health;
        let mut speed_total = base_speed;
        for piece in equipment.iter_equipped() {
            power_total += piece.final_power() as f64;
            health_total += piece.final_health() as f64;
            speed_total += piece.final_speed() as f64;
        }

        // Each total rides its own level curve.
        let mut power =
            (power_total * smooth_ease(level, STAT_CURVE_MAX_LEVEL, POWER_CURVE_PEAK)).round();
        let mut health =
            (health_total * smooth_ease(level, STAT_CURVE_MAX_LEVEL, HEALTH_CURVE_PEAK)).round();
        let mut speed =
            (speed_total * smooth_ease(level, STAT_CURVE_MAX_LEVEL, SPEED_CURVE_PEAK)).round();

        // Skills mutate the scaled totals: flats land first, then
        // percents compound on the flat-adjusted values, each phase in
        // equip order.
        let effects = skills.equipped_effects();
        for &(effect, value) in &effects {
            match effect {
                SkillEffect::FlatPower => power += value.round(),
                SkillEffect::FlatHealth => health += value.round(),
                SkillEffect::FlatSpeed => speed += value.round(),
                _ => {}
            }
        }
        for &(effect, value) in &effects {
            match effect {
                SkillEffect::PercentPower => power = (power * (1.0 + value / 100.0)).round(),
                SkillEffect::PercentHealth => health = (health * (1.0 + value / 100.0)).round(),
                _ => {}
            }
        }

        PlayerStats {
            power: power as u32,
            health: health as u32,
            speed: speed as u32,
        }
    }
}
