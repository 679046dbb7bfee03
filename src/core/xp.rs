//! Experience ledger shared by the player, companions, and skills.
//!
//! One curve family per entity kind, one apply operation. Level-ups are
//! reported back to the caller so stat recalculation stays outside the
//! ledger.

use super::constants::*;
use serde::{Deserialize, Serialize};

/// Which XP curve an entity levels on.
///
/// `Player` is the steep exponential the account levels on; `Growth` is the
/// friendlier polynomial shared by companion and skill instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum XpKind {
    Player,
    Growth,
}

impl XpKind {
    pub fn max_level(self) -> u32 {
        match self {
            XpKind::Player => PLAYER_MAX_LEVEL,
            XpKind::Growth => GROWTH_MAX_LEVEL,
        }
    }
}

/// XP required to advance from `level` to `level + 1`.
///
/// Pure and monotonically increasing in `level` for each kind.
pub fn required_xp(kind: XpKind, level: u32) -> u64 {
    match kind {
        XpKind::Player => {
            let level = level.max(1);
            let raw = level as f64
                + PLAYER_XP_CURVE_BASE * f64::powf(2.0, level as f64 / PLAYER_XP_CURVE_DIVISOR);
            let mut xp = (raw / PLAYER_XP_CURVE_SCALE).floor();
            if level >= PLAYER_XP_LATE_LEVEL {
                xp = (xp * PLAYER_XP_LATE_MULTIPLIER).floor();
            } else if level >= PLAYER_XP_MID_LEVEL {
                xp = (xp * PLAYER_XP_MID_MULTIPLIER).floor();
            }
            xp as u64
        }
        XpKind::Growth => {
            let level = level.clamp(1, GROWTH_MAX_LEVEL);
            let xp = GROWTH_XP_CURVE_BASE * f64::powf(level as f64, GROWTH_XP_CURVE_EXPONENT);
            xp.round() as u64
        }
    }
}

/// Total XP needed to reach `level` from level 1.
pub fn total_xp_to_reach(kind: XpKind, level: u32) -> u64 {
    (1..level).map(|l| required_xp(kind, l)).sum()
}

/// XP granted when a duplicate of an already-owned entity is pulled.
///
/// `rarity_factor` comes from [`DUPE_XP_FACTORS`], indexed by the pull's
/// rarity tier. Scales with the owned instance's current level.
pub fn dupe_xp(kind: XpKind, rarity_factor: f64, current_level: u32) -> u64 {
    let needed = required_xp(kind, current_level.max(1));
    (needed as f64 * rarity_factor).round() as u64
}

/// Level and XP progress for one leveling entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XpState {
    pub level: u32,
    pub current_xp: u64,
    pub xp_to_next_level: u64,
}

impl XpState {
    pub fn new(kind: XpKind) -> Self {
        XpState {
            level: 1,
            current_xp: 0,
            xp_to_next_level: required_xp(kind, 1),
        }
    }

    pub fn at_cap(&self, kind: XpKind) -> bool {
        self.level >= kind.max_level()
    }
}

/// Outcome of one XP grant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelUpReport {
    pub levels_gained: u32,
    pub new_level: u32,
}

impl LevelUpReport {
    pub fn leveled(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Adds `amount` XP to `state`, consuming level-ups until the remainder no
/// longer fills a level. Handles grants spanning many levels in one call.
/// At the level cap, excess XP is discarded and `current_xp` pinned to 0.
pub fn apply_xp(state: &mut XpState, kind: XpKind, amount: u64) -> LevelUpReport {
    let max_level = kind.max_level();
    if state.level >= max_level {
        state.current_xp = 0;
        return LevelUpReport {
            levels_gained: 0,
            new_level: state.level,
        };
    }

    state.current_xp += amount;

    let mut levels_gained = 0;
    while state.current_xp >= state.xp_to_next_level && state.level < max_level {
        state.current_xp -= state.xp_to_next_level;
        state.level += 1;
        levels_gained += 1;
        state.xp_to_next_level = required_xp(kind, state.level);
    }

    if state.level >= max_level {
        state.current_xp = 0;
    }

    LevelUpReport {
        levels_gained,
        new_level: state.level,
    }
}
