use crate::battle::StageLoop;
use crate::companions::CompanionRoster;
use crate::core::constants::*;
use crate::core::xp::LevelUpReport;
use crate::economy::Wallet;
use crate::gacha::GateState;
use crate::idle::{compute_offline, AccrualRates, RewardBundle, SessionTracker};
use crate::items::{GearPiece, GearSlot};
use crate::player::PlayerState;
use crate::skills::SkillLoadout;
use serde::{Deserialize, Serialize};

/// Report of one consumed offline checkpoint.
#[derive(Debug, Clone)]
pub struct OfflineGrant {
    pub elapsed_hours: f64,
    pub rewards: RewardBundle,
    pub level_up: LevelUpReport,
}

/// Main game state containing all progression systems.
///
/// Everything cross-cutting goes through here: equip operations bump the
/// player's cached stats, suspend/resume drives the offline checkpoint,
/// and the tick orchestrator borrows the subsystems it composes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub save_id: String,
    /// UTC seconds when this save was created; gate launch-age
    /// requirements count days from here.
    pub created_utc: i64,
    pub player: PlayerState,
    pub wallet: Wallet,
    pub roster: CompanionRoster,
    pub skills: SkillLoadout,
    pub gate: GateState,
    pub stage: StageLoop,
    pub session: SessionTracker,
    pub paused: bool,
    pub play_time_seconds: f64,
}

impl GameState {
    pub fn new(now_utc: i64) -> Self {
        use uuid::Uuid;

        let mut state = Self {
            save_id: Uuid::new_v4().to_string(),
            created_utc: now_utc,
            player: PlayerState::new(),
            wallet: Wallet::new(),
            roster: CompanionRoster::new(),
            skills: SkillLoadout::new(),
            gate: GateState::new(),
            stage: StageLoop::new(),
            session: SessionTracker::new(),
            paused: false,
            play_time_seconds: 0.0,
        };
        state.recalculate_player();
        state
    }

    /// Whole days since the save was created. Rollback clamps to zero.
    pub fn launch_age_days(&self, now_utc: i64) -> i64 {
        (now_utc - self.created_utc).max(0) / 86_400
    }

    /// Rebuilds the player's cached stats and combat power from the
    /// current gate level, skills, and companions.
    pub fn recalculate_player(&mut self) {
        self.player
            .recalculate(self.gate.current_level, &self.skills, &self.roster);
    }

    /// Equips a piece and returns whatever it displaced. Stats update
    /// immediately.
    pub fn equip_gear(&mut self, slot: GearSlot, piece: GearPiece) -> Option<GearPiece> {
        let displaced = self.player.equip_gear(slot, piece);
        self.recalculate_player();
        displaced
    }

    pub fn unequip_gear(&mut self, slot: GearSlot) -> Option<GearPiece> {
        let removed = self.player.unequip_gear(slot);
        self.recalculate_player();
        removed
    }

    /// Converts a piece into credits at its sell value.
    pub fn sell_gear(&mut self, piece: GearPiece) -> u64 {
        let value = piece.sell_value();
        self.wallet.add_credits(value as f64);
        value
    }

    pub fn equip_companion(&mut self, archetype_id: &str) -> bool {
        if self.roster.equip(archetype_id) {
            self.recalculate_player();
            return true;
        }
        false
    }

    pub fn unequip_companion(&mut self, archetype_id: &str) -> bool {
        if self.roster.unequip(archetype_id) {
            self.recalculate_player();
            return true;
        }
        false
    }

    pub fn equip_skill(&mut self, archetype_id: &str) -> bool {
        if self.skills.equip(archetype_id) {
            self.recalculate_player();
            return true;
        }
        false
    }

    pub fn unequip_skill(&mut self, archetype_id: &str) -> bool {
        if self.skills.unequip(archetype_id) {
            self.recalculate_player();
            return true;
        }
        false
    }

    /// Records the suspend checkpoint.
    pub fn suspend(&mut self, now_utc: i64) {
        self.session.suspend(now_utc);
    }

    /// Consumes the offline checkpoint and pays out accrued rewards.
    /// Returns `None` on the first run, after a rollback, or when the
    /// gap was too short to grant anything.
    pub fn resume(&mut self, now_utc: i64) -> Option<OfflineGrant> {
        let elapsed_hours = self.session.take_offline_hours(now_utc)?;
        let rewards = compute_offline(
            elapsed_hours,
            &AccrualRates::default(),
            OFFLINE_CAP_HOURS,
            OFFLINE_DIMINISHED_RATE,
        );

        let level_up = self.player.add_xp(rewards.xp);
        self.wallet.add_credits(rewards.credits as f64);
        if level_up.leveled() {
            self.recalculate_player();
        }

        Some(OfflineGrant {
            elapsed_hours,
            rewards,
            level_up,
        })
    }
}
