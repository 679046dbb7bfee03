// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const ONLINE_REWARD_INTERVAL_SECONDS: f64 = 60.0;
pub const BASE_SECONDS_PER_ENEMY: f64 = 2.5;
pub const ENEMY_INTERVAL_DECAY_PER_STAGE: f64 = 0.985;
pub const MIN_SECONDS_PER_ENEMY: f64 = 1.25;

// XP and leveling
// Player curve: floor((level + 300 * 2^(level / 10.5)) / 4), with late-game
// scaling of 1.25x from level 120 and 1.5x from level 160.
pub const PLAYER_MAX_LEVEL: u32 = 300;
pub const PLAYER_XP_CURVE_BASE: f64 = 300.0;
pub const PLAYER_XP_CURVE_DIVISOR: f64 = 10.5;
pub const PLAYER_XP_CURVE_SCALE: f64 = 4.0;
pub const PLAYER_XP_MID_LEVEL: u32 = 120;
pub const PLAYER_XP_MID_MULTIPLIER: f64 = 1.25;
pub const PLAYER_XP_LATE_LEVEL: u32 = 160;
pub const PLAYER_XP_LATE_MULTIPLIER: f64 = 1.5;

// Growth curve: round(100 * level^2.05), shared by companions and skills.
pub const GROWTH_MAX_LEVEL: u32 = 200;
pub const GROWTH_XP_CURVE_BASE: f64 = 100.0;
pub const GROWTH_XP_CURVE_EXPONENT: f64 = 2.05;

// Player base stats and per-level curves (smooth ease from level 1 to 100)
pub const BASE_POWER: f64 = 10.0;
pub const BASE_HEALTH: f64 = 100.0;
pub const BASE_SPEED: f64 = 5.0;
pub const POWER_CURVE_PEAK: f64 = 3.0;
pub const HEALTH_CURVE_PEAK: f64 = 4.0;
pub const SPEED_CURVE_PEAK: f64 = 2.0;
pub const STAT_CURVE_MAX_LEVEL: u32 = 100;

// Combat power weights
pub const CP_POWER_WEIGHT: f64 = 1.25;
pub const CP_HEALTH_WEIGHT: f64 = 0.75;
pub const CP_SPEED_WEIGHT: f64 = 0.5;

// Gear
// Rarity order: Normal, Unique, Well, Rare, Mythic, Epic, Legendary,
// Immortal, Supreme, Radiant, Eternal.
pub const GEAR_RARITY_MULTIPLIERS: [f64; 11] = [
    1.00, 1.10, 1.20, 1.35, 1.55, 1.80, 2.10, 2.50, 3.00, 3.60, 4.50,
];
pub const GEAR_LEVEL_EXPONENT: f64 = 1.05;
pub const GEAR_UPGRADE_POWER_BONUS: f64 = 0.5;
pub const GEAR_SELL_POWER_WEIGHT: f64 = 2.0;
pub const GEAR_SELL_HEALTH_WEIGHT: f64 = 0.5;
pub const GEAR_SELL_SPEED_WEIGHT: f64 = 3.0;
pub const GEAR_SELL_SCALE: f64 = 0.25;

// Quantum gate progression
pub const GATE_MAX_LEVEL: u32 = 28;
pub const GATE_BASE_WEIGHTS: [f64; 11] = [
    1.0, 0.6, 0.45, 0.3, 0.2, 0.15, 0.1, 0.07, 0.05, 0.03, 0.02,
];
pub const GATE_WEIGHT_LERP_TOP: f64 = 4.0;
pub const GATE_WEIGHT_FLOOR: f64 = 0.5;
pub const GATE_WEIGHT_EXPONENT: f64 = 1.2;
pub const ETERNAL_UNLOCK_GATE_LEVEL: u32 = 28;
pub const GATE_SEGMENT_COUNTS: [u32; 5] = [2, 3, 4, 5, 6];
pub const GATE_SEGMENT_RANGE_ENDS: [u32; 5] = [5, 10, 14, 21, 28];
pub const GATE_CREDIT_COST_BASE: f64 = 1000.0;
pub const GATE_CREDIT_COST_EXPONENT: f64 = 1.25;
pub const GATE_TIME_COST_BASE_MINUTES: f64 = 5.0;
pub const GATE_TIME_COST_EXPONENT: f64 = 1.35;
pub const GATE_MASK_LOW_THRESHOLD: u32 = 20;
pub const GATE_MASK_MID_THRESHOLD: u32 = 25;
pub const GATE_MASK_HIGH_THRESHOLD: u32 = 28;
pub const GATE_PENULTIMATE_LEVEL: u32 = 25;
pub const GATE_PENULTIMATE_PLAYER_LEVEL: u32 = 50;
pub const GATE_PENULTIMATE_LAUNCH_AGE_DAYS: i64 = 7;
pub const GATE_FINAL_PLAYER_LEVEL: u32 = 80;
pub const GATE_FINAL_LAUNCH_AGE_DAYS: i64 = 14;
pub const PLAYER_LEVELS_PER_GATE: u32 = 10;
pub const GATE_GEAR_LEVEL_MIN_FACTOR: u32 = 2;
pub const GATE_GEAR_LEVEL_MAX_FACTOR: u32 = 3;
pub const GATE_GEAR_LEVEL_MAX_OFFSET: u32 = 5;
pub const GATE_GEAR_MIN_LEVEL_CAP: u32 = 500;
pub const GATE_GEAR_MAX_LEVEL_CAP: u32 = 600;

// Gate pull rewards (integer rolls are half-open, Unity style)
pub const GATE_PULL_POWER_ROLL: (u32, u32) = (5, 25);
pub const GATE_PULL_HEALTH_ROLL: (u32, u32) = (15, 50);
pub const GATE_PULL_SPEED_ROLL: (u32, u32) = (1, 6);
pub const GATE_PULL_POWER_GATE_FACTOR: f64 = 0.5;
pub const GATE_PULL_HEALTH_GATE_FACTOR: f64 = 0.4;
pub const GATE_PULL_SPEED_RARITY_FACTOR: f64 = 0.75;
pub const GATE_PULL_XP_BASE: f64 = 25.0;
pub const GATE_PULL_XP_GATE_FACTOR: f64 = 0.05;
pub const RARITY_XP_BONUS_PEAK: f64 = 3.0;

// Summon machines
pub const COMPANION_SUMMON_WEIGHTS: [f64; 5] = [0.60, 0.25, 0.10, 0.04, 0.01];
pub const SKILL_SUMMON_WEIGHTS: [f64; 5] = [0.55, 0.25, 0.12, 0.06, 0.02];
pub const SUMMON_SMALL_BUNDLE_COST: u64 = 15;
pub const SUMMON_SMALL_BUNDLE_PULLS: u32 = 15;
pub const SUMMON_LARGE_BUNDLE_COST: u64 = 30;
pub const SUMMON_LARGE_BUNDLE_PULLS: u32 = 35;
pub const COMPANION_SUMMON_XP_BASE: f64 = 50.0;
pub const COMPANION_SUMMON_XP_LEVEL_FACTOR: f64 = 0.05;
pub const SKILL_SUMMON_XP_BASE: f64 = 30.0;
pub const SKILL_SUMMON_XP_LEVEL_FACTOR: f64 = 0.03;
pub const DUPE_XP_FACTORS: [f64; 5] = [0.35, 0.55, 0.8, 1.0, 1.25];

// Companions
pub const COMPANION_RARITY_MULTIPLIERS: [f64; 5] = [1.0, 1.5, 2.2, 3.25, 5.0];
pub const COMPANION_POWER_CURVE_PEAK: f64 = 5.0;
pub const COMPANION_HEALTH_CURVE_PEAK: f64 = 8.0;
pub const COMPANION_CP_POWER_WEIGHT: f64 = 2.0;
pub const COMPANION_CP_HEALTH_WEIGHT: f64 = 0.5;
pub const MAX_EQUIPPED_COMPANIONS: usize = 3;
pub const COMPANION_PASSIVE_FACTOR: f64 = 0.25;
pub const COMPANION_XP_SHARE: f64 = 0.15;

// Skills
pub const SKILL_RARITY_MULTIPLIERS: [f64; 5] = [1.0, 1.4, 2.0, 3.0, 4.5];
pub const SKILL_LEVEL_MULT_DIVISOR: f64 = 100.0;
pub const SKILL_LEVEL_MULT_EXPONENT: f64 = 1.25;
pub const SKILL_GROWTH_MAX_LEVEL: u32 = 50;
pub const SKILL_GROWTH_PEAK: f64 = 3.0;
pub const MAX_EQUIPPED_SKILLS: usize = 3;

// Per-kill currency drop chances
pub const DROP_CHANCE_GATE_SHARD: f64 = 0.03;
pub const DROP_CHANCE_COMPANION_SHARD: f64 = 0.02;
pub const DROP_CHANCE_SKILL_TICKET: f64 = 0.015;
pub const DROP_CHANCE_COMPANION_TICKET: f64 = 0.012;
pub const BOSS_DROP_CHANCE_MULTIPLIER: f64 = 2.5;
pub const BOSS_REWARD_MULTIPLIER: f64 = 2.0;

// Enemies and stages
pub const ELITE_STAT_MULTIPLIER: f64 = 2.5;
pub const BOSS_STAT_MULTIPLIER: f64 = 6.0;
pub const ENEMY_POWER_CP_FACTOR: f64 = 0.75;
pub const ENEMY_POWER_STAGE_GROWTH: f64 = 1.05;
pub const ENEMY_HEALTH_BASE: f64 = 100.0;
pub const ENEMY_HEALTH_STAGE_EXPONENT: f64 = 1.25;
pub const ENEMY_XP_FACTOR: f64 = 0.15;
pub const ENEMY_CREDIT_FACTOR: f64 = 1.25;
pub const ENEMIES_PER_STAGE: u32 = 10;
pub const BOSS_STAGE_INTERVAL: u32 = 10;
pub const ELITE_STAGE_INTERVAL: u32 = 5;
pub const MAX_STAGE: u32 = 1000;

// Idle accrual
pub const OFFLINE_XP_PER_HOUR: f64 = 2000.0;
pub const OFFLINE_CREDITS_PER_HOUR: f64 = 5000.0;
pub const OFFLINE_CAP_HOURS: f64 = 8.0;
pub const OFFLINE_DIMINISHED_RATE: f64 = 0.5;
pub const OFFLINE_MIN_HOURS: f64 = 0.05;
pub const ONLINE_XP_PER_MINUTE: f64 = 40.0;
pub const ONLINE_CREDITS_PER_MINUTE: f64 = 200.0;
