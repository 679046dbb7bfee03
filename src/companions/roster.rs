#![allow(dead_code)]
use super::types::{CompanionArchetype, CompanionInstance};
use crate::core::constants::MAX_EQUIPPED_COMPANIONS;
use crate::core::xp::{dupe_xp, LevelUpReport, XpKind};
use serde::{Deserialize, Serialize};

/// Result of feeding a summon pull into the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquireOutcome {
    New {
        archetype_id: String,
    },
    Dupe {
        archetype_id: String,
        xp_granted: u64,
        new_level: u32,
    },
}

/// Owned and equipped companions. Dupes merge into the owned instance, so
/// each archetype appears at most once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanionRoster {
    pub owned: Vec<CompanionInstance>,
    /// Archetype IDs in equip order, at most [`MAX_EQUIPPED_COMPANIONS`].
    pub equipped: Vec<String>,
}

impl CompanionRoster {
    pub fn new() -> Self {
        CompanionRoster::default()
    }

    pub fn find_owned(&self, archetype_id: &str) -> Option<&CompanionInstance> {
        self.owned.iter().find(|c| c.archetype_id == archetype_id)
    }

    pub fn find_owned_mut(&mut self, archetype_id: &str) -> Option<&mut CompanionInstance> {
        self.owned
            .iter_mut()
            .find(|c| c.archetype_id == archetype_id)
    }

    /// Adds a pulled companion: first copy joins the roster at level 1,
    /// repeats convert to XP on the owned instance.
    pub fn acquire(&mut self, archetype: &CompanionArchetype) -> AcquireOutcome {
        if let Some(owned) = self.find_owned_mut(archetype.id) {
            let xp = dupe_xp(
                XpKind::Growth,
                archetype.rarity.dupe_factor(),
                owned.level(),
            );
            let report = owned.add_xp(xp);
            return AcquireOutcome::Dupe {
                archetype_id: archetype.id.to_string(),
                xp_granted: xp,
                new_level: report.new_level,
            };
        }

        self.owned.push(CompanionInstance::from_archetype(archetype));
        AcquireOutcome::New {
            archetype_id: archetype.id.to_string(),
        }
    }

    /// Equips an owned companion. Returns false when the bench is full, the
    /// companion is not owned, or it is already equipped.
    pub fn equip(&mut self, archetype_id: &str) -> bool {
        if self.equipped.len() >= MAX_EQUIPPED_COMPANIONS {
            return false;
        }
        if self.find_owned(archetype_id).is_none() {
            return false;
        }
        if self.equipped.iter().any(|id| id == archetype_id) {
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
    pub fn equipped_instances(&self) -> Vec<&CompanionInstance> {
        self.equipped
            .iter()
            .filter_map(|id| self.find_owned(id))
            .collect()
    }

    /// Sum of equipped companions' combat power, added onto the player's
    /// cached combat power.
    pub fn total_equipped_cp(&self) -> u64 {
        self.equipped_instances()
            .iter()
            .map(|c| c.combat_power())
            .sum()
    }

    /// Sum of equipped companions' raw passive CP bonus percents.
    pub fn total_passive_bonus(&self) -> f64 {
        self.equipped_instances()
            .iter()
            .map(|c| c.passive_cp_bonus)
            .sum()
    }

    /// Grants the same XP amount to every equipped companion (kill shares).
    pub fn grant_equipped_xp(&mut self, amount: u64) -> Vec<(String, LevelUpReport)> {
        let ids: Vec<String> = self.equipped.clone();
        let mut reports = Vec::new();
        for id in ids {
            if let Some(inst) = self.find_owned_mut(&id) {
                let report = inst.add_xp(amount);
                reports.push((id, report));
            }
        }
        reports
    }
}
