#![allow(dead_code)]
use crate::core::constants::*;
use crate::core::curves::linear_ramp;
use crate::core::rarity::Rarity;
use crate::core::xp::{apply_xp, LevelUpReport, XpKind, XpState};
use serde::{Deserialize, Serialize};

/// What an equipped skill does to the player.
///
/// Flat and percent effects mutate stat totals during recalculation;
/// the two gain effects are summed by loadout accessors and applied to
/// stage rewards instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillEffect {
    FlatPower,
    FlatHealth,
    FlatSpeed,
    PercentPower,
    PercentHealth,
    PercentCreditsGain,
    PercentXpGain,
}

impl SkillEffect {
    pub fn is_flat(&self) -> bool {
        matches!(
            self,
            SkillEffect::FlatPower | SkillEffect::FlatHealth | SkillEffect::FlatSpeed
        )
    }

    pub fn is_stat_percent(&self) -> bool {
        matches!(self, SkillEffect::PercentPower | SkillEffect::PercentHealth)
    }
}

/// Static skill definition from the content pool.
#[derive(Debug, Clone)]
pub struct SkillArchetype {
    /// Stable identifier used for dupe detection and saves.
    pub id: &'static str,
    pub name: &'static str,
    pub rarity: Rarity,
    pub effect: SkillEffect,
    pub base_value: f64,
}

/// Level multiplier on a skill's effect: `1 + (level/100)^1.25`, unclamped.
pub fn level_multiplier(level: u32) -> f64 {
    1.0 + f64::powf(
        level as f64 / SKILL_LEVEL_MULT_DIVISOR,
        SKILL_LEVEL_MULT_EXPONENT,
    )
}

/// An owned skill: archetype snapshot plus its own XP ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillInstance {
    pub archetype_id: String,
    pub name: String,
    pub rarity: Rarity,
    pub effect: SkillEffect,
    pub base_value: f64,
    pub xp: XpState,
}

impl SkillInstance {
    pub fn from_archetype(archetype: &SkillArchetype) -> Self {
        SkillInstance {
            archetype_id: archetype.id.to_string(),
            name: archetype.name.to_string(),
            rarity: archetype.rarity,
            effect: archetype.effect,
            base_value: archetype.base_value,
            xp: XpState::new(XpKind::Growth),
        }
    }

    pub fn level(&self) -> u32 {
        self.xp.level
    }

    /// Current strength of the skill's effect. Rarity is applied here and
    /// nowhere else; the slow level multiplier stacks with a linear growth
    /// ramp that tops out at level 50.
    pub fn effective_value(&self) -> f64 {
        let rarity_mult = SKILL_RARITY_MULTIPLIERS[self.rarity.index()];
        let growth = linear_ramp(self.level(), SKILL_GROWTH_MAX_LEVEL, SKILL_GROWTH_PEAK);
        self.base_value * rarity_mult * level_multiplier(self.level()) * growth
    }

    pub fn add_xp(&mut self, amount: u64) -> LevelUpReport {
        apply_xp(&mut self.xp, XpKind::Growth, amount)
    }
}
