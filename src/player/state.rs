use crate::companions::CompanionRoster;
use crate::core::xp::{apply_xp, LevelUpReport, XpKind, XpState};
use crate::items::{Equipment, GearPiece, GearSlot};
use crate::player::class::PlayerClass;
use crate::player::power::player_combat_power;
use crate::player::stats::PlayerStats;
use crate::skills::SkillLoadout;
use serde::{Deserialize, Serialize};

/// The player: XP ledger, class, gear, and cached stat totals.
///
/// `stats` and `combat_power` are caches. Anything that changes level,
/// gear, class, skills, or equipped companions goes through the game
/// state, which calls [`PlayerState::recalculate`] afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub xp: XpState,
    pub class: Option<PlayerClass>,
    pub equipment: Equipment,
    pub stats: PlayerStats,
    pub combat_power: u64,
}

impl PlayerState {
    pub fn new() -> Self {
        let mut player = PlayerState {
            xp: XpState::new(XpKind::Player),
            class: Some(PlayerClass::PistolSpecialist),
            equipment: Equipment::new(),
            stats: PlayerStats::zero(),
            combat_power: 0,
        };
        player.recalculate(0, &SkillLoadout::new(), &CompanionRoster::new());
        player
    }

    pub fn level(&self) -> u32 {
        self.xp.level
    }

    pub fn add_xp(&mut self, amount: u64) -> LevelUpReport {
        apply_xp(&mut self.xp, XpKind::Player, amount)
    }

    /// Rebuilds the cached stats and combat power.
    pub fn recalculate(
        &mut self,
        gate_level: u32,
        skills: &SkillLoadout,
        roster: &CompanionRoster,
    ) {
        self.stats = PlayerStats::recalculate(
            self.level(),
            self.class,
            gate_level,
            &self.equipment,
            skills,
        );
        self.combat_power =
            player_combat_power(&self.stats, self.class) + roster.total_equipped_cp();
    }

    /// Swaps a piece into a slot, returning whatever it displaced.
    pub fn equip_gear(&mut self, slot: GearSlot, piece: GearPiece) -> Option<GearPiece> {
        self.equipment.replace(slot, Some(piece))
    }

    pub fn unequip_gear(&mut self, slot: GearSlot) -> Option<GearPiece> {
        self.equipment.replace(slot, None)
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}
