//! Per-tick orchestration.
//!
//! `run_tick()` advances every live system by one slice of wall time and
//! returns a [`TickResult`] describing what happened, so the caller can
//! render or count outcomes without the progression layer knowing about
//! either.

use crate::battle::EnemyKind;
use crate::core::game_state::GameState;
use crate::economy::Currency;
use crate::idle::online_rewards;
use rand::Rng;

/// A single event produced by a tick, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    // ── Stage loop ──────────────────────────────────────────────
    /// An enemy fell in the stage loop.
    Kill {
        stage: u32,
        kind: EnemyKind,
        xp: u64,
        credits: u64,
    },

    /// Player reached a new level, from kills or online rewards.
    PlayerLevelUp { new_level: u32 },

    /// An equipped companion leveled from its kill share.
    CompanionLevelUp {
        archetype_id: String,
        new_level: u32,
    },

    /// A premium currency dropped from a kill.
    CurrencyDrop { currency: Currency },

    /// The stage loop cleared its stage and entered a new one.
    StageCleared { new_stage: u32 },

    // ── Idle rewards ────────────────────────────────────────────
    /// One or more full online-reward minutes elapsed.
    OnlineReward { minutes: u32, xp: u64, credits: u64 },

    // ── Gate ladder ─────────────────────────────────────────────
    /// The gate ladder auto-unlocked its next level.
    GateUnlocked { new_level: u32 },
}

/// Result of processing a single tick.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Events produced during this tick, in chronological order.
    pub events: Vec<TickEvent>,

    /// True when the player's cached stats were rebuilt this tick.
    /// Level-ups and gate unlocks trigger exactly one rebuild, after
    /// all of the tick's rewards have landed.
    pub recalculated: bool,
}

/// Advances the whole game by `dt_seconds`.
///
/// A paused game ignores the tick entirely: no play time, no stage
/// progress, no online-reward minutes. `now_utc` feeds the gate
/// ladder's launch-age requirements; pass a seeded
/// `rand_chacha::ChaCha8Rng` for deterministic runs.
pub fn run_tick<R: Rng>(
    state: &mut GameState,
    dt_seconds: f64,
    now_utc: i64,
    rng: &mut R,
) -> TickResult {
    let mut result = TickResult::default();
    if state.paused || dt_seconds <= 0.0 {
        return result;
    }

    state.play_time_seconds += dt_seconds;
    let mut needs_recalc = false;

    // ── 1. Stage loop ───────────────────────────────────────────
    let kills = state.stage.advance(
        dt_seconds,
        state.paused,
        &mut state.player,
        &mut state.wallet,
        &mut state.roster,
        &state.skills,
        rng,
    );
    for kill in kills {
        result.events.push(TickEvent::Kill {
            stage: kill.stage,
            kind: kill.kind,
            xp: kill.xp,
            credits: kill.credits,
        });
        if kill.level_up.leveled() {
            needs_recalc = true;
            result.events.push(TickEvent::PlayerLevelUp {
                new_level: kill.level_up.new_level,
            });
        }
        for (archetype_id, report) in kill.companion_reports {
            if report.leveled() {
                needs_recalc = true;
                result.events.push(TickEvent::CompanionLevelUp {
                    archetype_id,
                    new_level: report.new_level,
                });
            }
        }
        for currency in kill.drops {
            result.events.push(TickEvent::CurrencyDrop { currency });
        }
        if let Some(new_stage) = kill.stage_cleared {
            result.events.push(TickEvent::StageCleared { new_stage });
        }
    }

    // ── 2. Online accrual ───────────────────────────────────────
    let minutes = state.session.tick_online(dt_seconds);
    if minutes > 0 {
        let rewards = online_rewards(minutes);
        let report = state.player.add_xp(rewards.xp);
        state.wallet.add_credits(rewards.credits as f64);
        result.events.push(TickEvent::OnlineReward {
            minutes,
            xp: rewards.xp,
            credits: rewards.credits,
        });
        if report.leveled() {
            needs_recalc = true;
            result.events.push(TickEvent::PlayerLevelUp {
                new_level: report.new_level,
            });
        }
    }

    // ── 3. Gate auto-unlock ─────────────────────────────────────
    let launch_age = state.launch_age_days(now_utc);
    if let Some(new_level) = state.gate.try_unlock_next(state.player.level(), launch_age) {
        needs_recalc = true;
        result.events.push(TickEvent::GateUnlocked { new_level });
    }

    // ── 4. Stat cache refresh ───────────────────────────────────
    if needs_recalc {
        state.recalculate_player();
        result.recalculated = true;
    }

    result
}
