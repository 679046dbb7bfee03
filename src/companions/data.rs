//! Companion content pool.

#![allow(dead_code)]

use super::types::CompanionArchetype;
use crate::core::rarity::Rarity;

/// Returns every summonable companion.
pub fn companion_pool() -> Vec<CompanionArchetype> {
    vec![
        // Common
        CompanionArchetype {
            id: "scout-drone",
            name: "Scout Drone",
            rarity: Rarity::Common,
            base_power: 45,
            base_health: 180,
            passive_cp_bonus: 0.02,
        },
        CompanionArchetype {
            id: "salvage-bot",
            name: "Salvage Bot",
            rarity: Rarity::Common,
            base_power: 50,
            base_health: 200,
            passive_cp_bonus: 0.02,
        },
        CompanionArchetype {
            id: "mess-hall-cat",
            name: "Mess Hall Cat",
            rarity: Rarity::Common,
            base_power: 40,
            base_health: 160,
            passive_cp_bonus: 0.03,
        },
        // Rare
        CompanionArchetype {
            id: "k9-unit",
            name: "K9 Unit",
            rarity: Rarity::Rare,
            base_power: 60,
            base_health: 240,
            passive_cp_bonus: 0.04,
        },
        CompanionArchetype {
            id: "riot-drone",
            name: "Riot Shield Drone",
            rarity: Rarity::Rare,
            base_power: 55,
            base_health: 300,
            passive_cp_bonus: 0.04,
        },
        CompanionArchetype {
            id: "combat-medic",
            name: "Combat Medic",
            rarity: Rarity::Rare,
            base_power: 50,
            base_health: 260,
            passive_cp_bonus: 0.05,
        },
        // Epic
        CompanionArchetype {
            id: "plasma-wisp",
            name: "Plasma Wisp",
            rarity: Rarity::Epic,
            base_power: 75,
            base_health: 280,
            passive_cp_bonus: 0.06,
        },
        CompanionArchetype {
            id: "railgun-turret",
            name: "Railgun Turret",
            rarity: Rarity::Epic,
            base_power: 90,
            base_health: 220,
            passive_cp_bonus: 0.06,
        },
        CompanionArchetype {
            id: "aegis-sentinel",
            name: "Aegis Sentinel",
            rarity: Rarity::Epic,
            base_power: 70,
            base_health: 360,
            passive_cp_bonus: 0.07,
        },
        // Legendary
        CompanionArchetype {
            id: "storm-valkyrie",
            name: "Storm Valkyrie",
            rarity: Rarity::Legendary,
            base_power: 110,
            base_health: 400,
            passive_cp_bonus: 0.09,
        },
        CompanionArchetype {
            id: "phase-panther",
            name: "Phase Panther",
            rarity: Rarity::Legendary,
            base_power: 120,
            base_health: 340,
            passive_cp_bonus: 0.08,
        },
        CompanionArchetype {
            id: "siege-mantis",
            name: "Siege Mantis",
            rarity: Rarity::Legendary,
            base_power: 100,
            base_health: 450,
            passive_cp_bonus: 0.09,
        },
        // Mythic
        CompanionArchetype {
            id: "nova-phoenix",
            name: "Nova Phoenix",
            rarity: Rarity::Mythic,
            base_power: 150,
            base_health: 520,
            passive_cp_bonus: 0.12,
        },
        CompanionArchetype {
            id: "void-leviathan",
            name: "Void Leviathan",
            rarity: Rarity::Mythic,
            base_power: 140,
            base_health: 600,
            passive_cp_bonus: 0.12,
        },
    ]
}

/// Looks up one companion by its stable ID.
pub fn get_companion(id: &str) -> Option<CompanionArchetype> {
    companion_pool().into_iter().find(|c| c.id == id)
}

/// All pool entries of the given rarity.
pub fn companions_of_rarity(rarity: Rarity) -> Vec<CompanionArchetype> {
    companion_pool()
        .into_iter()
        .filter(|c| c.rarity == rarity)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_covers_every_rarity() {
        for rarity in Rarity::ALL {
            assert!(
                !companions_of_rarity(rarity).is_empty(),
                "no companions at {:?}",
                rarity
            );
        }
    }

    #[test]
    fn test_pool_ids_are_unique() {
        let pool = companion_pool();
        for (i, a) in pool.iter().enumerate() {
            for b in &pool[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_lookup_by_id() {
        assert!(get_companion("scout-drone").is_some());
        assert!(get_companion("does-not-exist").is_none());
    }
}
