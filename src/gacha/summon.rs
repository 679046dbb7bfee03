//! Companion and skill summon machines.
//!
//! Both machines share one shape: spend tickets up front, then resolve a
//! bundle of pulls against a fixed rarity table. A pull picks uniformly
//! inside the rarity's pool bucket and feeds the result to the roster or
//! loadout, which merges duplicates by stable ID.

use crate::companions::data::{companion_pool, companions_of_rarity};
use crate::companions::{AcquireOutcome, CompanionArchetype, CompanionRoster};
use crate::core::constants::*;
use crate::core::rarity::{Rarity, WeightTable};
use crate::core::xp::LevelUpReport;
use crate::economy::{Currency, Wallet};
use crate::player::PlayerState;
use crate::skills::data::{skill_pool, skills_of_rarity};
use crate::skills::{SkillAcquireOutcome, SkillArchetype, SkillLoadout};
use rand::Rng;

/// Ticket bundles offered by both machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummonBundle {
    Small,
    Large,
}

impl SummonBundle {
    pub fn pulls(&self) -> u32 {
        match self {
            SummonBundle::Small => SUMMON_SMALL_BUNDLE_PULLS,
            SummonBundle::Large => SUMMON_LARGE_BUNDLE_PULLS,
        }
    }

    pub fn ticket_cost(&self) -> u64 {
        match self {
            SummonBundle::Small => SUMMON_SMALL_BUNDLE_COST,
            SummonBundle::Large => SUMMON_LARGE_BUNDLE_COST,
        }
    }
}

pub fn companion_summon_table() -> WeightTable {
    let mut table = WeightTable::from_slice(&COMPANION_SUMMON_WEIGHTS);
    table.renormalize();
    table
}

pub fn skill_summon_table() -> WeightTable {
    let mut table = WeightTable::from_slice(&SKILL_SUMMON_WEIGHTS);
    table.renormalize();
    table
}

pub fn companion_pull_xp(player_level: u32) -> u64 {
    (COMPANION_SUMMON_XP_BASE
        * (1.0 + player_level as f64 * COMPANION_SUMMON_XP_LEVEL_FACTOR))
        .round() as u64
}

pub fn skill_pull_xp(player_level: u32) -> u64 {
    (SKILL_SUMMON_XP_BASE * (1.0 + player_level as f64 * SKILL_SUMMON_XP_LEVEL_FACTOR)).round()
        as u64
}

fn pick_companion(rarity: Rarity, rng: &mut impl Rng) -> CompanionArchetype {
    let bucket = companions_of_rarity(rarity);
    let pool = if bucket.is_empty() {
        companion_pool()
    } else {
        bucket
    };
    pool[rng.gen_range(0..pool.len())].clone()
}

fn pick_skill(rarity: Rarity, rng: &mut impl Rng) -> SkillArchetype {
    let bucket = skills_of_rarity(rarity);
    let pool = if bucket.is_empty() { skill_pool() } else { bucket };
    pool[rng.gen_range(0..pool.len())].clone()
}

#[derive(Debug, Clone)]
pub struct CompanionSummonPull {
    pub rarity: Rarity,
    pub outcome: AcquireOutcome,
    pub xp_granted: u64,
    pub level_up: LevelUpReport,
}

#[derive(Debug, Clone)]
pub struct CompanionSummonResult {
    pub pulls: Vec<CompanionSummonPull>,
}

impl CompanionSummonResult {
    pub fn new_count(&self) -> usize {
        self.pulls
            .iter()
            .filter(|p| matches!(p.outcome, AcquireOutcome::New { .. }))
            .count()
    }

    pub fn dupe_count(&self) -> usize {
        self.pulls.len() - self.new_count()
    }

    pub fn leveled_player(&self) -> bool {
        self.pulls.iter().any(|pull| pull.level_up.leveled())
    }
}

/// Runs a companion bundle. Returns `None` without spending anything when
/// the wallet cannot cover the full ticket cost. Pulls resolve strictly
/// in order; each pull's dupe-vs-new branch and XP grant land before the
/// next pull rolls.
pub fn summon_companions(
    bundle: SummonBundle,
    roster: &mut CompanionRoster,
    player: &mut PlayerState,
    wallet: &mut Wallet,
    rng: &mut impl Rng,
) -> Option<CompanionSummonResult> {
    if !wallet.spend(Currency::CompanionTicket, bundle.ticket_cost()) {
        return None;
    }

    let table = companion_summon_table();
    let mut pulls = Vec::with_capacity(bundle.pulls() as usize);
    for _ in 0..bundle.pulls() {
        let tier = table.draw(rng);
        let archetype = pick_companion(Rarity::from_index(tier), rng);
        let rarity = archetype.rarity;
        let outcome = roster.acquire(&archetype);
        let xp_granted = companion_pull_xp(player.level());
        let level_up = player.add_xp(xp_granted);
        pulls.push(CompanionSummonPull {
            rarity,
            outcome,
            xp_granted,
            level_up,
        });
    }

    Some(CompanionSummonResult { pulls })
}

#[derive(Debug, Clone)]
pub struct SkillSummonPull {
    pub rarity: Rarity,
    pub outcome: SkillAcquireOutcome,
    pub xp_granted: u64,
    pub level_up: LevelUpReport,
}

#[derive(Debug, Clone)]
pub struct SkillSummonResult {
    pub pulls: Vec<SkillSummonPull>,
}

impl SkillSummonResult {
    pub fn new_count(&self) -> usize {
        self.pulls
            .iter()
            .filter(|p| matches!(p.outcome, SkillAcquireOutcome::New { .. }))
            .count()
    }

    pub fn dupe_count(&self) -> usize {
        self.pulls.len() - self.new_count()
    }

    pub fn leveled_player(&self) -> bool {
        self.pulls.iter().any(|pull| pull.level_up.leveled())
    }
}

/// Skill-machine twin of [`summon_companions`].
pub fn summon_skills(
    bundle: SummonBundle,
    loadout: &mut SkillLoadout,
    player: &mut PlayerState,
    wallet: &mut Wallet,
    rng: &mut impl Rng,
) -> Option<SkillSummonResult> {
    if !wallet.spend(Currency::SkillTicket, bundle.ticket_cost()) {
        return None;
    }

    let table = skill_summon_table();
    let mut pulls = Vec::with_capacity(bundle.pulls() as usize);
    for _ in 0..bundle.pulls() {
        let tier = table.draw(rng);
        let archetype = pick_skill(Rarity::from_index(tier), rng);
        let rarity = archetype.rarity;
        let outcome = loadout.acquire(&archetype);
        let xp_granted = skill_pull_xp(player.level());
        let level_up = player.add_xp(xp_granted);
        pulls.push(SkillSummonPull {
            rarity,
            outcome,
            xp_granted,
            level_up,
        });
    }

    Some(SkillSummonResult { pulls })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_bundle_shapes() {
        assert_eq!(SummonBundle::Small.pulls(), 15);
        assert_eq!(SummonBundle::Small.ticket_cost(), 15);
        assert_eq!(SummonBundle::Large.pulls(), 35);
        assert_eq!(SummonBundle::Large.ticket_cost(), 30);
    }

    #[test]
    fn test_summon_tables_are_normalized() {
        for table in [companion_summon_table(), skill_summon_table()] {
            let sum: f64 = table.weights().iter().sum();
            assert!((sum - 1.0).abs() < 1e-9);
            assert_eq!(table.len(), 5);
        }
    }

    #[test]
    fn test_summon_without_tickets_is_a_noop() {
        let mut roster = CompanionRoster::new();
        let mut player = PlayerState::new();
        let mut wallet = Wallet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let result = summon_companions(
            SummonBundle::Small,
            &mut roster,
            &mut player,
            &mut wallet,
            &mut rng,
        );
        assert!(result.is_none());
        assert!(roster.owned.is_empty());
        assert_eq!(player.xp.current_xp, 0);
    }

    #[test]
    fn test_insufficient_tickets_spend_nothing() {
        let mut loadout = SkillLoadout::new();
        let mut player = PlayerState::new();
        let mut wallet = Wallet::new();
        wallet.add(Currency::SkillTicket, 29);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let result = summon_skills(
            SummonBundle::Large,
            &mut loadout,
            &mut player,
            &mut wallet,
            &mut rng,
        );
        assert!(result.is_none());
        assert_eq!(wallet.balance(Currency::SkillTicket), 29);
    }

    #[test]
    fn test_small_bundle_spends_and_pulls() {
        let mut roster = CompanionRoster::new();
        let mut player = PlayerState::new();
        let mut wallet = Wallet::new();
        wallet.add(Currency::CompanionTicket, 20);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let result = summon_companions(
            SummonBundle::Small,
            &mut roster,
            &mut player,
            &mut wallet,
            &mut rng,
        )
        .expect("tickets were available");

        assert_eq!(wallet.balance(Currency::CompanionTicket), 5);
        assert_eq!(result.pulls.len(), 15);
        assert!(!roster.owned.is_empty());
        assert!(player.xp.level > 1 || player.xp.current_xp > 0);
    }

    #[test]
    fn test_dupes_merge_by_stable_id() {
        let mut roster = CompanionRoster::new();
        let mut player = PlayerState::new();
        let mut wallet = Wallet::new();
        wallet.add(Currency::CompanionTicket, 30);
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let result = summon_companions(
            SummonBundle::Large,
            &mut roster,
            &mut player,
            &mut wallet,
            &mut rng,
        )
        .expect("tickets were available");

        // 35 pulls over a 14-entry pool: dupes are guaranteed, and every
        // owned instance is unique.
        assert_eq!(result.new_count() + result.dupe_count(), 35);
        assert_eq!(result.new_count(), roster.owned.len());
        assert!(roster.owned.len() <= companion_pool().len());
        for (i, a) in roster.owned.iter().enumerate() {
            for b in roster.owned.iter().skip(i + 1) {
                assert_ne!(a.archetype_id, b.archetype_id);
            }
        }
        assert!(result.dupe_count() > 0);
    }

    #[test]
    fn test_pull_xp_scales_with_player_level() {
        assert_eq!(companion_pull_xp(2), 55);
        assert_eq!(skill_pull_xp(1), 31);
        assert_eq!(skill_pull_xp(2), 32);
        assert!(companion_pull_xp(50) > companion_pull_xp(2));
    }

    #[test]
    fn test_skill_bundle_fills_the_loadout() {
        let mut loadout = SkillLoadout::new();
        let mut player = PlayerState::new();
        let mut wallet = Wallet::new();
        wallet.add(Currency::SkillTicket, 15);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let result = summon_skills(
            SummonBundle::Small,
            &mut loadout,
            &mut player,
            &mut wallet,
            &mut rng,
        )
        .expect("tickets were available");

        assert_eq!(wallet.balance(Currency::SkillTicket), 0);
        assert_eq!(result.pulls.len(), 15);
        assert!(!loadout.owned.is_empty());
        assert!(loadout.owned.len() <= skill_pool().len());
    }
}
