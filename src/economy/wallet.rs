#![allow(dead_code)]
use serde::{Deserialize, Serialize};

/// Integer-denominated currencies. Credits are tracked separately as a
/// fractional balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    GateShard,
    CompanionShard,
    CompanionTicket,
    SkillTicket,
    Gems,
}

impl Currency {
    pub fn name(&self) -> &'static str {
        match self {
            Currency::GateShard => "Gate Shard",
            Currency::CompanionShard => "Companion Shard",
            Currency::CompanionTicket => "Companion Ticket",
            Currency::SkillTicket => "Skill Ticket",
            Currency::Gems => "Gems",
        }
    }
}

/// All player balances. Adds always succeed; spends return false and leave
/// the balance untouched when funds are short.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wallet {
    pub credits: f64,
    pub gate_shards: u64,
    pub companion_shards: u64,
    pub companion_tickets: u64,
    pub skill_tickets: u64,
    pub gems: u64,
}

impl Wallet {
    pub fn new() -> Self {
        Wallet::default()
    }

    pub fn add_credits(&mut self, amount: f64) {
        self.credits += amount;
    }

    pub fn spend_credits(&mut self, amount: f64) -> bool {
        if self.credits < amount {
            return false;
        }
        self.credits -= amount;
        true
    }

    pub fn balance(&self, currency: Currency) -> u64 {
        match currency {
            Currency::GateShard => self.gate_shards,
            Currency::CompanionShard => self.companion_shards,
            Currency::CompanionTicket => self.companion_tickets,
            Currency::SkillTicket => self.skill_tickets,
            Currency::Gems => self.gems,
        }
    }

    fn slot_mut(&mut self, currency: Currency) -> &mut u64 {
        match currency {
            Currency::GateShard => &mut self.gate_shards,
            Currency::CompanionShard => &mut self.companion_shards,
            Currency::CompanionTicket => &mut self.companion_tickets,
            Currency::SkillTicket => &mut self.skill_tickets,
            Currency::Gems => &mut self.gems,
        }
    }

    pub fn add(&mut self, currency: Currency, amount: u64) {
        *self.slot_mut(currency) += amount;
    }

    pub fn spend(&mut self, currency: Currency, amount: u64) -> bool {
        let slot = self.slot_mut(currency);
        if *slot < amount {
            return false;
        }
        *slot -= amount;
        true
    }
}
