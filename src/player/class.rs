//! Player classes: combat power multipliers and upgrade tracks.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerClass {
    PistolSpecialist,
    RifleOperative,
    MeleeSpecialist,
}

impl PlayerClass {
    pub const ALL: [PlayerClass; 3] = [
        PlayerClass::PistolSpecialist,
        PlayerClass::RifleOperative,
        PlayerClass::MeleeSpecialist,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PlayerClass::PistolSpecialist => "Pistol Specialist",
            PlayerClass::RifleOperative => "Rifle Operative",
            PlayerClass::MeleeSpecialist => "Melee Specialist",
        }
    }
}

/// Combat power multiplier from the already-scaled stat totals. An
/// unclassed player always gets 1.0.
pub fn class_multiplier(class: Option<PlayerClass>, power: u32, health: u32, speed: u32) -> f64 {
    let power = power as f64;
    let health = health as f64;
    let speed = speed as f64;
    match class {
        Some(PlayerClass::PistolSpecialist) => 1.0 + speed * 0.0012 + power * 0.0006,
        Some(PlayerClass::RifleOperative) => 1.0 + power * 0.0010 + speed * 0.0008,
        Some(PlayerClass::MeleeSpecialist) => 1.0 + health * 0.0009 + power * 0.0007,
        None => 1.0,
    }
}

/// Which base stat a class upgrade feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatKind {
    Power,
    Health,
    Speed,
}

/// One tier in a class's upgrade track. The bonus is a flat addition to
/// one base stat, applied before level-curve scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassUpgrade {
    pub name: &'static str,
    pub player_level_req: u32,
    pub gate_level_req: u32,
    pub stat: StatKind,
    pub bonus: f64,
}

const PISTOL_TRACK: [ClassUpgrade; 5] = [
    ClassUpgrade {
        name: "Sidearm Basics",
        player_level_req: 0,
        gate_level_req: 0,
        stat: StatKind::Power,
        bonus: 0.0,
    },
    ClassUpgrade {
        name: "Tactical Draw",
        player_level_req: 20,
        gate_level_req: 5,
        stat: StatKind::Speed,
        bonus: 2.0,
    },
    ClassUpgrade {
        name: "Twin Fangs",
        player_level_req: 40,
        gate_level_req: 10,
        stat: StatKind::Power,
        bonus: 8.0,
    },
    ClassUpgrade {
        name: "Adrenal Loop",
        player_level_req: 60,
        gate_level_req: 15,
        stat: StatKind::Speed,
        bonus: 5.0,
    },
    ClassUpgrade {
        name: "Gunslinger Protocol",
        player_level_req: 80,
        gate_level_req: 20,
        stat: StatKind::Power,
        bonus: 18.0,
    },
];

const RIFLE_TRACK: [ClassUpgrade; 5] = [
    ClassUpgrade {
        name: "Marksman Basics",
        player_level_req: 0,
        gate_level_req: 0,
        stat: StatKind::Power,
        bonus: 0.0,
    },
    ClassUpgrade {
        name: "Stabilized Stock",
        player_level_req: 20,
        gate_level_req: 5,
        stat: StatKind::Power,
        bonus: 4.0,
    },
    ClassUpgrade {
        name: "Piercing Rounds",
        player_level_req: 40,
        gate_level_req: 10,
        stat: StatKind::Power,
        bonus: 9.0,
    },
    ClassUpgrade {
        name: "Recon Optics",
        player_level_req: 60,
        gate_level_req: 15,
        stat: StatKind::Speed,
        bonus: 4.0,
    },
    ClassUpgrade {
        name: "Longshot Doctrine",
        player_level_req: 80,
        gate_level_req: 20,
        stat: StatKind::Power,
        bonus: 20.0,
    },
];

const MELEE_TRACK: [ClassUpgrade; 5] = [
    ClassUpgrade {
        name: "Close Quarters Basics",
        player_level_req: 0,
        gate_level_req: 0,
        stat: StatKind::Power,
        bonus: 0.0,
    },
    ClassUpgrade {
        name: "Hardened Plating",
        player_level_req: 20,
        gate_level_req: 5,
        stat: StatKind::Health,
        bonus: 35.0,
    },
    ClassUpgrade {
        name: "Crushing Blows",
        player_level_req: 40,
        gate_level_req: 10,
        stat: StatKind::Power,
        bonus: 7.0,
    },
    ClassUpgrade {
        name: "Juggernaut Frame",
        player_level_req: 60,
        gate_level_req: 15,
        stat: StatKind::Health,
        bonus: 90.0,
    },
    ClassUpgrade {
        name: "Warborn Fury",
        player_level_req: 80,
        gate_level_req: 20,
        stat: StatKind::Power,
        bonus: 16.0,
    },
];

/// Full upgrade track for a class, starter tier first.
pub fn upgrade_track(class: PlayerClass) -> &'static [ClassUpgrade; 5] {
    match class {
        PlayerClass::PistolSpecialist => &PISTOL_TRACK,
        PlayerClass::RifleOperative => &RIFLE_TRACK,
        PlayerClass::MeleeSpecialist => &MELEE_TRACK,
    }
}

/// Highest tier whose requirements are met, scanning in order and
/// stopping at the first unmet one. Only this single tier's bonus
/// applies; earlier tiers do not stack.
pub fn active_upgrade(
    class: Option<PlayerClass>,
    player_level: u32,
    gate_level: u32,
) -> Option<ClassUpgrade> {
    let track = upgrade_track(class?);
    let mut active = None;
    for upgrade in track {
        if player_level >= upgrade.player_level_req && gate_level >= upgrade.gate_level_req {
            active = Some(*upgrade);
        } else {
            break;
        }
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_multiplier_formulas() {
        let pistol = class_multiplier(Some(PlayerClass::PistolSpecialist), 100, 500, 50);
        assert!((pistol - (1.0 + 50.0 * 0.0012 + 100.0 * 0.0006)).abs() < 1e-9);

        let rifle = class_multiplier(Some(PlayerClass::RifleOperative), 100, 500, 50);
        assert!((rifle - (1.0 + 100.0 * 0.0010 + 50.0 * 0.0008)).abs() < 1e-9);

        let melee = class_multiplier(Some(PlayerClass::MeleeSpecialist), 100, 500, 50);
        assert!((melee - (1.0 + 500.0 * 0.0009 + 100.0 * 0.0007)).abs() < 1e-9);
    }

    #[test]
    fn test_unclassed_multiplier_is_one() {
        assert!((class_multiplier(None, 9999, 9999, 9999) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_starter_tier_is_always_active() {
        let active = active_upgrade(Some(PlayerClass::PistolSpecialist), 1, 0);
        assert_eq!(active.map(|u| u.name), Some("Sidearm Basics"));
        assert!((active.map(|u| u.bonus).unwrap_or(1.0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_class_has_no_active_upgrade() {
        assert!(active_upgrade(None, 300, 28).is_none());
    }

    #[test]
    fn test_scan_stops_at_first_unmet_tier() {
        // Level 80 with no gate progress: tier 2 needs gate 5, so the
        // scan never reaches the later tiers even though their player
        // level requirement is met.
        let active = active_upgrade(Some(PlayerClass::RifleOperative), 80, 0);
        assert_eq!(active.map(|u| u.name), Some("Marksman Basics"));

        let active = active_upgrade(Some(PlayerClass::RifleOperative), 80, 12);
        assert_eq!(active.map(|u| u.name), Some("Piercing Rounds"));
    }

    #[test]
    fn test_final_tier_unlocks_at_track_end() {
        let active = active_upgrade(Some(PlayerClass::MeleeSpecialist), 80, 20);
        assert_eq!(active.map(|u| u.name), Some("Warborn Fury"));
        assert_eq!(active.map(|u| u.stat), Some(StatKind::Power));
    }

    #[test]
    fn test_every_track_has_starter_and_four_upgrades() {
        for class in PlayerClass::ALL {
            let track = upgrade_track(class);
            assert_eq!(track.len(), 5);
            assert_eq!(track[0].player_level_req, 0);
            assert_eq!(track[0].gate_level_req, 0);
            for pair in track.windows(2) {
                assert!(pair[1].player_level_req > pair[0].player_level_req);
                assert!(pair[1].gate_level_req > pair[0].gate_level_req);
            }
        }
    }
}
