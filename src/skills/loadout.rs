#![allow(dead_code)]
use super::types::{SkillArchetype, SkillEffect, SkillInstance};
use crate::core::constants::MAX_EQUIPPED_SKILLS;
use crate::core::xp::{dupe_xp, XpKind};
use serde::{Deserialize, Serialize};

/// Result of feeding a summon pull into the loadout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillAcquireOutcome {
    New {
        archetype_id: String,
    },
    Dupe {
        archetype_id: String,
        xp_granted: u64,
        new_level: u32,
    },
}

/// Owned and equipped skills. Dupes merge into the owned instance, so each
/// archetype appears at most once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillLoadout {
    pub owned: Vec<SkillInstance>,
    /// Archetype IDs in equip order, at most [`MAX_EQUIPPED_SKILLS`].
    pub equipped: Vec<String>,
}

impl SkillLoadout {
    pub fn new() -> Self {
        SkillLoadout::default()
    }

    pub fn find_owned(&self, archetype_id: &str) -> Option<&SkillInstance> {
        self.owned.iter().find(|s| s.archetype_id == archetype_id)
    }

    pub fn find_owned_mut(&mut self, archetype_id: &str) -> Option<&mut SkillInstance> {
        self.owned
            .iter_mut()
            .find(|s| s.archetype_id == archetype_id)
    }

    /// Adds a pulled skill: first copy joins at level 1, repeats convert to
    /// XP on the owned instance.
    pub fn acquire(&mut self, archetype: &SkillArchetype) -> SkillAcquireOutcome {
        if let Some(owned) = self.find_owned_mut(archetype.id) {
            let xp = dupe_xp(
                XpKind::Growth,
                archetype.rarity.dupe_factor(),
                owned.level(),
            );
            let report = owned.add_xp(xp);
            return SkillAcquireOutcome::Dupe {
                archetype_id: archetype.id.to_string(),
                xp_granted: xp,
                new_level: report.new_level,
            };
        }

        self.owned.push(SkillInstance::from_archetype(archetype));
        SkillAcquireOutcome::New {
            archetype_id: archetype.id.to_string(),
        }
    }

    /// Equips an owned skill. Returns false when the loadout is full, the
    /// skill is not owned, or it is already equipped.
    pub fn equip(&mut self, archetype_id: &str) -> bool {
        if self.equipped.iter().any(|id| id == archetype_id) {
            return false;
        }
        if self.equipped.len() >= MAX_EQUIPPED_SKILLS {
            return false;
        }
        if self.find_owned(archetype_id).is_none() {
            return false;
        }
        self.equipped.push(archetype_id.to_string());
        true
    }

    pub fn unequip(&mut self, archetype_id: &str) -> bool {
        let before = self.equipped.len();
        self.equipped.retain(|id| id != archetype_id);
        self.equipped.len() != before
    }

    /// Equipped instances in equip order.
    pub fn equipped_instances(&self) -> Vec<&SkillInstance> {
        self.equipped
            .iter()
            .filter_map(|id| self.find_owned(id))
            .collect()
    }

    /// Effect kind and current strength of each equipped skill, in equip
    /// order. Stat recalculation consumes this, flats before percents.
    pub fn equipped_effects(&self) -> Vec<(SkillEffect, f64)> {
        self.equipped_instances()
            .iter()
            .map(|s| (s.effect, s.effective_value()))
            .collect()
    }

    /// Summed percent bonus to stage XP rewards.
    pub fn xp_bonus_percent(&self) -> f64 {
        self.sum_effect(SkillEffect::PercentXpGain)
    }

    /// Summed percent bonus to stage credit rewards.
    pub fn credit_bonus_percent(&self) -> f64 {
        self.sum_effect(SkillEffect::PercentCreditsGain)
    }

    fn sum_effect(&self, effect: SkillEffect) -> f64 {
        self.equipped_instances()
            .iter()
            .filter(|s| s.effect == effect)
            .map(|s| s.effective_value())
            .sum()
    }
}
