//! The stage loop: fixed-interval kills, stage advancement, and kill
//! rewards.
//!
//! Time accumulates in a timer; every elapsed interval defeats one enemy
//! and pays out XP, credits, and currency drops. Ten kills clear a normal
//! stage, one kill clears a boss stage, and the spawn interval tightens a
//! little with every stage climbed.

use crate::battle::enemy::{enemies_in_stage, spawn_enemy, stage_enemy_kind, EnemyKind};
use crate::companions::CompanionRoster;
use crate::core::constants::*;
use crate::core::xp::LevelUpReport;
use crate::economy::{roll_kill_drops, Currency, Wallet};
use crate::player::PlayerState;
use crate::skills::SkillLoadout;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Seconds between kills at a stage. Starts at 2.5 and shrinks 1.5% per
/// stage climbed, floored at 1.25.
pub fn interval_for_stage(stage: u32) -> f64 {
    let decayed = BASE_SECONDS_PER_ENEMY
        * f64::powf(ENEMY_INTERVAL_DECAY_PER_STAGE, stage.saturating_sub(1) as f64);
    decayed.max(MIN_SECONDS_PER_ENEMY)
}

/// Everything one kill produced.
#[derive(Debug, Clone)]
pub struct KillOutcome {
    pub stage: u32,
    pub kind: EnemyKind,
    pub xp: u64,
    pub credits: u64,
    pub drops: Vec<Currency>,
    pub level_up: LevelUpReport,
    pub companion_reports: Vec<(String, LevelUpReport)>,
    /// Stage entered when this kill cleared the current one.
    pub stage_cleared: Option<u32>,
}

/// Wave progress: the current stage, kills into it, and the spawn timer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageLoop {
    pub current_stage: u32,
    pub kills_this_stage: u32,
    pub timer_seconds: f64,
}

impl StageLoop {
    pub fn new() -> Self {
        StageLoop {
            current_stage: 1,
            kills_this_stage: 0,
            timer_seconds: 0.0,
        }
    }

    /// Accumulates `dt_seconds` and resolves every kill that fits.
    /// A paused loop accumulates nothing.
    #[allow(clippy::too_many_arguments)]
    pub fn advance(
        &mut self,
        dt_seconds: f64,
        paused: bool,
        player: &mut PlayerState,
        wallet: &mut Wallet,
        roster: &mut CompanionRoster,
        skills: &SkillLoadout,
        rng: &mut impl Rng,
    ) -> Vec<KillOutcome> {
        if paused || dt_seconds <= 0.0 {
            return Vec::new();
        }

        self.timer_seconds += dt_seconds;

        let mut outcomes = Vec::new();
        while self.timer_seconds >= interval_for_stage(self.current_stage) {
            self.timer_seconds -= interval_for_stage(self.current_stage);
            outcomes.push(self.resolve_kill(player, wallet, roster, skills, rng));
        }
        outcomes
    }

    fn resolve_kill(
        &mut self,
        player: &mut PlayerState,
        wallet: &mut Wallet,
        roster: &mut CompanionRoster,
        skills: &SkillLoadout,
        rng: &mut impl Rng,
    ) -> KillOutcome {
        let stage = self.current_stage;
        let kind = stage_enemy_kind(stage);
        let enemy = spawn_enemy(kind, stage, player.combat_power);
        let is_boss = kind == EnemyKind::Boss;

        let xp_mult = 1.0 + skills.xp_bonus_percent() / 100.0;
        let credit_mult = 1.0 + skills.credit_bonus_percent() / 100.0;
        let passive_mult = 1.0 + roster.total_passive_bonus() * COMPANION_PASSIVE_FACTOR;
        let boss_mult = if is_boss { BOSS_REWARD_MULTIPLIER } else { 1.0 };

        let xp = (enemy.xp_reward as f64 * xp_mult * passive_mult * boss_mult).round() as u64;
        let credits =
            (enemy.credit_reward as f64 * credit_mult * passive_mult * boss_mult).round() as u64;

        let level_up = player.add_xp(xp);
        wallet.add_credits(credits as f64);

        let share = (xp as f64 * COMPANION_XP_SHARE).round() as u64;
        let companion_reports = roster.grant_equipped_xp(share);

        let drops = roll_kill_drops(is_boss, rng);
        for &currency in &drops {
            wallet.add(currency, 1);
        }

        self.kills_this_stage += 1;
        let stage_cleared = if self.kills_this_stage >= enemies_in_stage(stage) {
            self.kills_this_stage = 0;
            if self.current_stage < MAX_STAGE {
                self.current_stage += 1;
                Some(self.current_stage)
            } else {
                None
            }
        } else {
            None
        };

        KillOutcome {
            stage,
            kind,
            xp,
            credits,
            drops,
            level_up,
            companion_reports,
            stage_cleared,
        }
    }
}

impl Default for StageLoop {
    fn default() -> Self {
        Self::new()
    }
}
