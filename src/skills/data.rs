//! Skill content pool.

#![allow(dead_code)]

use super::types::{SkillArchetype, SkillEffect};
use crate::core::rarity::Rarity;

/// Returns every summonable skill.
pub fn skill_pool() -> Vec<SkillArchetype> {
    vec![
        // Common
        SkillArchetype {
            id: "iron-grip",
            name: "Iron Grip",
            rarity: Rarity::Common,
            effect: SkillEffect::FlatPower,
            base_value: 10.0,
        },
        SkillArchetype {
            id: "field-rations",
            name: "Field Rations",
            rarity: Rarity::Common,
            effect: SkillEffect::FlatHealth,
            base_value: 40.0,
        },
        SkillArchetype {
            id: "light-boots",
            name: "Light Boots",
            rarity: Rarity::Common,
            effect: SkillEffect::FlatSpeed,
            base_value: 4.0,
        },
        // Rare
        SkillArchetype {
            id: "overcharge",
            name: "Overcharge",
            rarity: Rarity::Rare,
            effect: SkillEffect::FlatPower,
            base_value: 18.0,
        },
        SkillArchetype {
            id: "plated-vest",
            name: "Plated Vest",
            rarity: Rarity::Rare,
            effect: SkillEffect::FlatHealth,
            base_value: 80.0,
        },
        SkillArchetype {
            id: "scavengers-eye",
            name: "Scavenger's Eye",
            rarity: Rarity::Rare,
            effect: SkillEffect::PercentCreditsGain,
            base_value: 5.0,
        },
        // Epic
        SkillArchetype {
            id: "focus-matrix",
            name: "Focus Matrix",
            rarity: Rarity::Epic,
            effect: SkillEffect::PercentPower,
            base_value: 6.0,
        },
        SkillArchetype {
            id: "reinforced-frame",
            name: "Reinforced Frame",
            rarity: Rarity::Epic,
            effect: SkillEffect::PercentHealth,
            base_value: 8.0,
        },
        SkillArchetype {
            id: "data-siphon",
            name: "Data Siphon",
            rarity: Rarity::Epic,
            effect: SkillEffect::PercentXpGain,
            base_value: 6.0,
        },
        // Legendary
        SkillArchetype {
            id: "quantum-edge",
            name: "Quantum Edge",
            rarity: Rarity::Legendary,
            effect: SkillEffect::PercentPower,
            base_value: 10.0,
        },
        SkillArchetype {
            id: "bulwark-protocol",
            name: "Bulwark Protocol",
            rarity: Rarity::Legendary,
            effect: SkillEffect::PercentHealth,
            base_value: 12.0,
        },
        SkillArchetype {
            id: "credit-harvester",
            name: "Credit Harvester",
            rarity: Rarity::Legendary,
            effect: SkillEffect::PercentCreditsGain,
            base_value: 12.0,
        },
        // Mythic
        SkillArchetype {
            id: "singularity-core",
            name: "Singularity Core",
            rarity: Rarity::Mythic,
            effect: SkillEffect::PercentPower,
            base_value: 15.0,
        },
        SkillArchetype {
            id: "ascendant-sync",
            name: "Ascendant Sync",
            rarity: Rarity::Mythic,
            effect: SkillEffect::PercentXpGain,
            base_value: 15.0,
        },
    ]
}

/// Looks up one skill by its stable ID.
pub fn get_skill(id: &str) -> Option<SkillArchetype> {
    skill_pool().into_iter().find(|s| s.id == id)
}

/// All pool entries of the given rarity.
pub fn skills_of_rarity(rarity: Rarity) -> Vec<SkillArchetype> {
    skill_pool()
        .into_iter()
        .filter(|s| s.rarity == rarity)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_covers_every_rarity() {
        for rarity in Rarity::ALL {
            assert!(
                !skills_of_rarity(rarity).is_empty(),
                "no skills at {:?}",
                rarity
            );
        }
    }

    #[test]
    fn test_pool_covers_every_effect() {
        let pool = skill_pool();
        for effect in [
            SkillEffect::FlatPower,
            SkillEffect::FlatHealth,
            SkillEffect::FlatSpeed,
            SkillEffect::PercentPower,
            SkillEffect::PercentHealth,
            SkillEffect::PercentCreditsGain,
            SkillEffect::PercentXpGain,
        ] {
            assert!(
                pool.iter().any(|s| s.effect == effect),
                "no skill with {:?}",
                effect
            );
        }
    }

    #[test]
    fn test_pool_ids_are_unique() {
        let pool = skill_pool();
        for (i, a) in pool.iter().enumerate() {
            for b in &pool[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
