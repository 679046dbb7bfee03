use crate::core::constants::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Normal,
    Elite,
    Boss,
}

impl EnemyKind {
    pub fn name(&self) -> &'static str {
        match self {
            EnemyKind::Normal => "Normal",
            EnemyKind::Elite => "Elite",
            EnemyKind::Boss => "Boss",
        }
    }

    pub fn stat_multiplier(&self) -> f64 {
        match self {
            EnemyKind::Normal => 1.0,
            EnemyKind::Elite => ELITE_STAT_MULTIPLIER,
            EnemyKind::Boss => BOSS_STAT_MULTIPLIER,
        }
    }
}

/// What a stage spawns: bosses every 10th stage, elites every 5th
/// non-boss stage, plain enemies otherwise.
pub fn stage_enemy_kind(stage: u32) -> EnemyKind {
    if stage % BOSS_STAGE_INTERVAL == 0 {
        EnemyKind::Boss
    } else if stage % ELITE_STAGE_INTERVAL == 0 {
        EnemyKind::Elite
    } else {
        EnemyKind::Normal
    }
}

/// Boss stages are a single fight; everything else is a ten-enemy wave.
pub fn enemies_in_stage(stage: u32) -> u32 {
    if stage_enemy_kind(stage) == EnemyKind::Boss {
        1
    } else {
        ENEMIES_PER_STAGE
    }
}

/// One spawned enemy with its rewards precomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub stage: u32,
    pub power: u64,
    pub health: u64,
    pub xp_reward: u64,
    pub credit_reward: u64,
}

/// Spawns an enemy scaled to the stage and the player's combat power.
/// Enemy power chases the player; health only follows the stage.
pub fn spawn_enemy(kind: EnemyKind, stage: u32, player_cp: u64) -> Enemy {
    let stage = stage.max(1);
    let mult = kind.stat_multiplier();
    let power = (player_cp as f64
        * ENEMY_POWER_CP_FACTOR
        * f64::powf(ENEMY_POWER_STAGE_GROWTH, stage as f64)
        * mult)
        .round() as u64;
    let health =
        (ENEMY_HEALTH_BASE * f64::powf(stage as f64, ENEMY_HEALTH_STAGE_EXPONENT) * mult).round()
            as u64;
    Enemy {
        kind,
        stage,
        power,
        health,
        xp_reward: (power as f64 * ENEMY_XP_FACTOR).round() as u64,
        credit_reward: (power as f64 * ENEMY_CREDIT_FACTOR).round() as u64,
    }
}
