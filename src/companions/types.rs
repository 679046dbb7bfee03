#![allow(dead_code)]
use crate::core::constants::*;
use crate::core::curves::smooth_ease;
use crate::core::rarity::Rarity;
use crate::core::xp::{apply_xp, LevelUpReport, XpKind, XpState};
use serde::{Deserialize, Serialize};

/// Static companion definition from the content pool.
#[derive(Debug, Clone)]
pub struct CompanionArchetype {
    /// Stable identifier used for dupe detection and saves.
    pub id: &'static str,
    pub name: &'static str,
    pub rarity: Rarity,
    pub base_power: u32,
    pub base_health: u32,
    /// Percent boost to the player's combat power while equipped
    /// (0.05 = +5%).
    pub passive_cp_bonus: f64,
}

/// Level multiplier for companion power, easing 1x -> 5x over levels 1-100.
pub fn power_growth(level: u32) -> f64 {
    smooth_ease(level, STAT_CURVE_MAX_LEVEL, COMPANION_POWER_CURVE_PEAK)
}

/// Level multiplier for companion health, easing 1x -> 8x over levels 1-100.
pub fn health_growth(level: u32) -> f64 {
    smooth_ease(level, STAT_CURVE_MAX_LEVEL, COMPANION_HEALTH_CURVE_PEAK)
}

/// An owned companion: archetype snapshot plus its own XP ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanionInstance {
    pub archetype_id: String,
    pub name: String,
    pub rarity: Rarity,
    pub base_power: u32,
    pub base_health: u32,
    pub passive_cp_bonus: f64,
    pub xp: XpState,
}

impl CompanionInstance {
    pub fn from_archetype(archetype: &CompanionArchetype) -> Self {
        CompanionInstance {
            archetype_id: archetype.id.to_string(),
            name: archetype.name.to_string(),
            rarity: archetype.rarity,
            base_power: archetype.base_power,
            base_health: archetype.base_health,
            passive_cp_bonus: archetype.passive_cp_bonus,
            xp: XpState::new(XpKind::Growth),
        }
    }

    pub fn level(&self) -> u32 {
        self.xp.level
    }

    pub fn power(&self) -> u32 {
        let rarity_mult = COMPANION_RARITY_MULTIPLIERS[self.rarity.index()];
        (self.base_power as f64 * rarity_mult * power_growth(self.level())).round() as u32
    }

    pub fn health(&self) -> u32 {
        let rarity_mult = COMPANION_RARITY_MULTIPLIERS[self.rarity.index()];
        (self.base_health as f64 * rarity_mult * health_growth(self.level())).round() as u32
    }

    /// Contribution added to the player's cached combat power while this
    /// companion is equipped.
    pub fn combat_power(&self) -> u64 {
        (self.power() as f64 * COMPANION_CP_POWER_WEIGHT
            + self.health() as f64 * COMPANION_CP_HEALTH_WEIGHT)
            .round() as u64
    }

    pub fn add_xp(&mut self, amount: u64) -> LevelUpReport {
        apply_xp(&mut self.xp, XpKind::Growth, amount)
    }
}
