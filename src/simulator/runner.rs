//! Main simulation runner driving the real tick loop.
//!
//! Each run plays a fresh save through `run_tick()`, with a driver that
//! spends shards and tickets the way an attentive player would.
//! Statistics are tracked externally from `TickEvent`s, so the numbers
//! measure exactly what the game does.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::battle::EnemyKind;
use crate::core::constants::{
    MAX_EQUIPPED_COMPANIONS, MAX_EQUIPPED_SKILLS, MAX_STAGE, PLAYER_MAX_LEVEL,
};
use crate::core::game_state::GameState;
use crate::core::tick::{run_tick, TickEvent};
use crate::economy::Currency;
use crate::gacha::{activate, summon_companions, summon_skills, SummonBundle};
use crate::items::{GearPiece, GearSlot};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Epoch for simulated saves. Launch-age gate requirements count days of
/// simulated time from here.
const SIM_EPOCH_UTC: i64 = 1_700_000_000;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Stage {}, Level {}, CP {}, Gate {}, Kills {}",
                run_idx + 1,
                config.num_runs,
                run_stats.final_stage,
                run_stats.final_level,
                run_stats.final_combat_power,
                run_stats.final_gate_level,
                run_stats.total_kills,
            );
        }
        all_runs.push(run_stats);
    }

    SimReport::from_runs(all_runs, config.target_stage, config.max_ticks_per_run)
}

/// Tracks statistics during a simulation run, accumulated from tick
/// events and driver decisions.
struct SimStats {
    total_kills: u64,
    total_boss_kills: u64,
    companion_level_ups: u64,
    online_minutes: u64,

    gate_shard_drops: u64,
    companion_shard_drops: u64,
    companion_ticket_drops: u64,
    skill_ticket_drops: u64,

    gate_activations: u64,
    gear_pulled: u64,
    gear_equipped: u64,
    gear_sold: u64,
    companion_summons: u64,
    companion_pulls_new: u64,
    companion_pulls_dupe: u64,
    skill_summons: u64,
    skill_pulls_new: u64,
    skill_pulls_dupe: u64,

    level_up_ticks: Vec<u64>,
    stage_entry_ticks: Vec<u64>,
}

impl SimStats {
    fn new() -> Self {
        Self {
            total_kills: 0,
            total_boss_kills: 0,
            companion_level_ups: 0,
            online_minutes: 0,
            gate_shard_drops: 0,
            companion_shard_drops: 0,
            companion_ticket_drops: 0,
            skill_ticket_drops: 0,
            gate_activations: 0,
            gear_pulled: 0,
            gear_equipped: 0,
            gear_sold: 0,
            companion_summons: 0,
            companion_pulls_new: 0,
            companion_pulls_dupe: 0,
            skill_summons: 0,
            skill_pulls_new: 0,
            skill_pulls_dupe: 0,
            level_up_ticks: vec![0; PLAYER_MAX_LEVEL as usize + 1],
            stage_entry_ticks: vec![0; MAX_STAGE as usize + 1],
        }
    }

    /// Process one tick's events.
    fn process_events(&mut self, events: &[TickEvent], tick: u64) {
        for event in events {
            match event {
                TickEvent::Kill { kind, .. } => {
                    self.total_kills += 1;
                    if *kind == EnemyKind::Boss {
                        self.total_boss_kills += 1;
                    }
                }
                TickEvent::PlayerLevelUp { new_level } => {
                    if let Some(slot) = self.level_up_ticks.get_mut(*new_level as usize) {
                        *slot = tick;
                    }
                }
                TickEvent::CompanionLevelUp { .. } => {
                    self.companion_level_ups += 1;
                }
                TickEvent::CurrencyDrop { currency } => match currency {
                    Currency::GateShard => self.gate_shard_drops += 1,
                    Currency::CompanionShard => self.companion_shard_drops += 1,
                    Currency::CompanionTicket => self.companion_ticket_drops += 1,
                    Currency::SkillTicket => self.skill_ticket_drops += 1,
                    Currency::Gems => {}
                },
                TickEvent::StageCleared { new_stage } => {
                    if let Some(slot) = self.stage_entry_ticks.get_mut(*new_stage as usize) {
                        *slot = tick;
                    }
                }
                TickEvent::OnlineReward { minutes, .. } => {
                    self.online_minutes += *minutes as u64;
                }
                TickEvent::GateUnlocked { .. } => {}
            }
        }
    }
}

/// Simulate a single run from a fresh save to the target stage or the
/// tick budget, whichever comes first.
fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let mut state = GameState::new(SIM_EPOCH_UTC);
    let mut stats = SimStats::new();
    let mut ticks: u64 = 0;

    while ticks < config.max_ticks_per_run && state.stage.current_stage < config.target_stage {
        let now_utc = SIM_EPOCH_UTC + (ticks as f64 * config.tick_seconds) as i64;

        let result = run_tick(&mut state, config.tick_seconds, now_utc, rng);
        stats.process_events(&result.events, ticks);

        if config.spend_currencies {
            drive_spending(&mut state, now_utc, &mut stats, rng);
        }

        ticks += 1;
    }

    RunStats {
        final_level: state.player.level(),
        final_stage: state.stage.current_stage,
        final_gate_level: state.gate.current_level,
        final_combat_power: state.player.combat_power,
        final_credits: state.wallet.credits,
        total_ticks: ticks,
        reached_target: state.stage.current_stage >= config.target_stage,
        total_kills: stats.total_kills,
        total_boss_kills: stats.total_boss_kills,
        companion_level_ups: stats.companion_level_ups,
        online_minutes: stats.online_minutes,
        gate_shard_drops: stats.gate_shard_drops,
        companion_shard_drops: stats.companion_shard_drops,
        companion_ticket_drops: stats.companion_ticket_drops,
        skill_ticket_drops: stats.skill_ticket_drops,
        gate_activations: stats.gate_activations,
        gear_pulled: stats.gear_pulled,
        gear_equipped: stats.gear_equipped,
        gear_sold: stats.gear_sold,
        companion_summons: stats.companion_summons,
        companion_pulls_new: stats.companion_pulls_new,
        companion_pulls_dupe: stats.companion_pulls_dupe,
        skill_summons: stats.skill_summons,
        skill_pulls_new: stats.skill_pulls_new,
        skill_pulls_dupe: stats.skill_pulls_dupe,
        companions_owned: state.roster.owned.len() as u64,
        skills_owned: state.skills.owned.len() as u64,
        level_up_ticks: stats.level_up_ticks,
        stage_entry_ticks: stats.stage_entry_ticks,
    }
}

/// Spends whatever the wallet can afford: gate shards first, then the
/// biggest affordable summon bundles.
fn drive_spending(
    state: &mut GameState,
    now_utc: i64,
    stats: &mut SimStats,
    rng: &mut ChaCha8Rng,
) {
    while state.wallet.gate_shards > 0 {
        let launch_age = state.launch_age_days(now_utc);
        let activation = match activate(
            &mut state.gate,
            &mut state.player,
            &mut state.wallet,
            launch_age,
            rng,
        ) {
            Some(a) => a,
            None => break,
        };
        stats.gate_activations += 1;
        let leveled = activation.leveled_player();
        for pull in activation.pulls {
            equip_or_sell(state, pull.piece, stats);
        }
        if leveled {
            state.recalculate_player();
        }
    }

    while state.wallet.companion_tickets >= SummonBundle::Small.ticket_cost() {
        let bundle = pick_bundle(state.wallet.companion_tickets);
        let result = match summon_companions(
            bundle,
            &mut state.roster,
            &mut state.player,
            &mut state.wallet,
            rng,
        ) {
            Some(r) => r,
            None => break,
        };
        stats.companion_summons += 1;
        stats.companion_pulls_new += result.new_count() as u64;
        stats.companion_pulls_dupe += result.dupe_count() as u64;
        refresh_companion_bench(state);
    }

    while state.wallet.skill_tickets >= SummonBundle::Small.ticket_cost() {
        let bundle = pick_bundle(state.wallet.skill_tickets);
        let result = match summon_skills(
            bundle,
            &mut state.skills,
            &mut state.player,
            &mut state.wallet,
            rng,
        ) {
            Some(r) => r,
            None => break,
        };
        stats.skill_summons += 1;
        stats.skill_pulls_new += result.new_count() as u64;
        stats.skill_pulls_dupe += result.dupe_count() as u64;
        refresh_skill_loadout(state);
    }
}

fn pick_bundle(tickets: u64) -> SummonBundle {
    if tickets >= SummonBundle::Large.ticket_cost() {
        SummonBundle::Large
    } else {
        SummonBundle::Small
    }
}

/// The score the driver ranks gear by.
fn gear_score(piece: &GearPiece) -> u64 {
    piece.final_power() as u64 + piece.final_health() as u64 + piece.final_speed() as u64
}

/// Equips a pulled piece when it beats the weakest equipped slot;
/// whichever piece ends up loose is sold.
fn equip_or_sell(state: &mut GameState, piece: GearPiece, stats: &mut SimStats) {
    stats.gear_pulled += 1;

    if let Some(slot) = state.player.equipment.first_empty_slot() {
        state.equip_gear(slot, piece);
        stats.gear_equipped += 1;
        return;
    }

    let weakest = GearSlot::ALL.into_iter().min_by_key(|&slot| {
        state
            .player
            .equipment
            .get(slot)
            .as_ref()
            .map(gear_score)
            .unwrap_or(0)
    });
    let slot = match weakest {
        Some(slot) => slot,
        None => return,
    };
    let incumbent = state
        .player
        .equipment
        .get(slot)
        .as_ref()
        .map(gear_score)
        .unwrap_or(0);

    if gear_score(&piece) > incumbent {
        stats.gear_equipped += 1;
        if let Some(displaced) = state.equip_gear(slot, piece) {
            state.sell_gear(displaced);
            stats.gear_sold += 1;
        }
    } else {
        state.sell_gear(piece);
        stats.gear_sold += 1;
    }
}

/// Keeps the three highest-CP owned companions on the bench.
fn refresh_companion_bench(state: &mut GameState) {
    let mut ranked: Vec<(String, u64)> = state
        .roster
        .owned
        .iter()
        .map(|c| (c.archetype_id.clone(), c.combat_power()))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let want: Vec<String> = ranked
        .into_iter()
        .take(MAX_EQUIPPED_COMPANIONS)
        .map(|(id, _)| id)
        .collect();
    if state.roster.equipped == want {
        return;
    }

    state.roster.equipped.clear();
    for id in &want {
        state.roster.equip(id);
    }
    state.recalculate_player();
}

/// Fills empty skill slots in owned order.
fn refresh_skill_loadout(state: &mut GameState) {
    if state.skills.equipped.len() >= MAX_EQUIPPED_SKILLS {
        return;
    }

    let owned: Vec<String> = state
        .skills
        .owned
        .iter()
        .map(|s| s.archetype_id.clone())
        .collect();
    let mut changed = false;
    for id in owned {
        if state.skills.equipped.len() >= MAX_EQUIPPED_SKILLS {
            break;
        }
        if state.skills.equip(&id) {
            changed = true;
        }
    }
    if changed {
        state.recalculate_player();
    }
}
