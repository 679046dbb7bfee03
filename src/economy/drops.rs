#![allow(dead_code)]
use super::wallet::Currency;
use crate::core::constants::*;
use rand::Rng;

/// Rolls the per-kill currency drops. Each currency rolls independently;
/// boss kills scale every chance by 2.5x. Returns the currencies that
/// dropped, one unit each, in fixed roll order.
pub fn roll_kill_drops(is_boss: bool, rng: &mut impl Rng) -> Vec<Currency> {
    let boss_mult = if is_boss {
        BOSS_DROP_CHANCE_MULTIPLIER
    } else {
        1.0
    };

    let chances = [
        (Currency::GateShard, DROP_CHANCE_GATE_SHARD),
        (Currency::CompanionShard, DROP_CHANCE_COMPANION_SHARD),
        (Currency::SkillTicket, DROP_CHANCE_SKILL_TICKET),
        (Currency::CompanionTicket, DROP_CHANCE_COMPANION_TICKET),
    ];

    let mut drops = Vec::new();
    for (currency, chance) in chances {
        if rng.gen::<f64>() <= chance * boss_mult {
            drops.push(currency);
        }
    }
    drops
}
