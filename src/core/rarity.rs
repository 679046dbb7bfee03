//! Weighted rarity tables and the draw resolver.
//!
//! Every random tier pick in the game (gate gear, companion summons, skill
//! summons) goes through one resolver: a table of non-negative weights is
//! optionally masked, renormalized, then walked cumulatively against a
//! uniform draw in [0, 1). Masking order is fixed: smooth level curve
//! first, threshold masks second, renormalization last.

use super::curves::lerp;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Five-tier rarity shared by companions and skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
    Mythic = 4,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Maps a resolved tier index back to a rarity, clamping out-of-range
    /// indices to Mythic.
    pub fn from_index(index: usize) -> Rarity {
        Rarity::ALL[index.min(Rarity::ALL.len() - 1)]
    }

    /// Fraction of a level's XP refunded when a duplicate of this rarity is
    /// pulled.
    pub fn dupe_factor(&self) -> f64 {
        crate::core::constants::DUPE_XP_FACTORS[self.index()]
    }
}

/// Ordered tier weights. Index 0 is the most common tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    weights: Vec<f64>,
}

/// Shape parameters for [`build_for_level`].
#[derive(Debug, Clone, Copy)]
pub struct TableParams {
    /// Whole-table multiplier ramps from 1.0 at level 1 to this at max level.
    pub top_multiplier: f64,
    /// Flat part of the per-tier factor `floor + (i / (n-1))^exponent`.
    pub floor: f64,
    pub exponent: f64,
    pub max_level: u32,
    /// The last tier stays at zero weight until this level is reached.
    pub top_tier_unlock_level: u32,
}

impl WeightTable {
    pub fn new(weights: Vec<f64>) -> Self {
        WeightTable { weights }
    }

    pub fn from_slice(weights: &[f64]) -> Self {
        WeightTable {
            weights: weights.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn weight(&self, tier: usize) -> f64 {
        self.weights.get(tier).copied().unwrap_or(0.0)
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Forces the given tiers to zero weight. Out-of-range indices are
    /// ignored.
    pub fn mask_tiers(&mut self, tiers: &[usize]) {
        for &tier in tiers {
            if let Some(w) = self.weights.get_mut(tier) {
                *w = 0.0;
            }
        }
    }

    /// Scales weights to sum to 1. If everything was masked away (sum <= 0)
    /// all weight collapses onto tier 0.
    pub fn renormalize(&mut self) {
        if self.weights.is_empty() {
            return;
        }
        let sum: f64 = self.weights.iter().sum();
        if sum <= 0.0 {
            for w in self.weights.iter_mut() {
                *w = 0.0;
            }
            self.weights[0] = 1.0;
            return;
        }
        for w in self.weights.iter_mut() {
            *w /= sum;
        }
    }

    /// Maps a uniform `draw` in [0, 1) to a tier index by walking the
    /// cumulative distribution. Floating-point drift past the final
    /// cumulative value lands on the last tier.
    pub fn resolve(&self, draw: f64) -> usize {
        let mut cumulative = 0.0;
        for (i, w) in self.weights.iter().enumerate() {
            cumulative += w;
            if draw <= cumulative {
                return i;
            }
        }
        self.weights.len().saturating_sub(1)
    }

    /// Resolves against a fresh uniform draw from `rng`.
    pub fn draw(&self, rng: &mut impl Rng) -> usize {
        self.resolve(rng.gen::<f64>())
    }
}

/// Builds a normalized tier table for a progression level.
///
/// Each base weight is scaled by the level ramp and a tier factor that
/// favors higher tiers as the exponent curve rises, then the top tier is
/// hard-locked below its unlock level, then the table is renormalized.
pub fn build_for_level(base: &[f64], level: u32, params: &TableParams) -> WeightTable {
    let n = base.len();
    let mut weights = base.to_vec();

    let level_t = if params.max_level <= 1 {
        1.0
    } else {
        (level.saturating_sub(1)) as f64 / (params.max_level - 1) as f64
    };
    let level_mult = lerp(1.0, params.top_multiplier, level_t);

    for (i, w) in weights.iter_mut().enumerate() {
        let tier_factor = if n <= 1 {
            0.0
        } else {
            f64::powf(i as f64 / (n - 1) as f64, params.exponent)
        };
        *w *= level_mult * (params.floor + tier_factor);
    }

    if level < params.top_tier_unlock_level {
        if let Some(last) = weights.last_mut() {
            *last = 0.0;
        }
    }

    let mut table = WeightTable::new(weights);
    table.renormalize();
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::*;

    fn gate_params() -> TableParams {
        TableParams {
            top_multiplier: GATE_WEIGHT_LERP_TOP,
            floor: GATE_WEIGHT_FLOOR,
            exponent: GATE_WEIGHT_EXPONENT,
            max_level: GATE_MAX_LEVEL,
            top_tier_unlock_level: ETERNAL_UNLOCK_GATE_LEVEL,
        }
    }

    #[test]
    fn test_mask_then_renormalize_worked_example() {
        let mut table = WeightTable::from_slice(&[0.6, 0.3, 0.1]);
        table.mask_tiers(&[0]);
        table.renormalize();
        assert!((table.weight(0) - 0.0).abs() < f64::EPSILON);
        assert!((table.weight(1) - 0.75).abs() < 1e-12);
        assert!((table.weight(2) - 0.25).abs() < 1e-12);
        assert_eq!(table.resolve(0.5), 1);
    }

    #[test]
    fn test_resolve_boundaries() {
        let mut table = WeightTable::from_slice(&[0.5, 0.5]);
        table.renormalize();
        assert_eq!(table.resolve(0.0), 0);
        assert_eq!(table.resolve(0.5), 0);
        assert_eq!(table.resolve(0.500001), 1);
        // Drift past the final cumulative value picks the last tier.
        assert_eq!(table.resolve(1.5), 1);
    }

    #[test]
    fn test_all_masked_falls_back_to_tier_zero() {
        let mut table = WeightTable::from_slice(&[0.6, 0.3, 0.1]);
        table.mask_tiers(&[0, 1, 2]);
        table.renormalize();
        assert!((table.weight(0) - 1.0).abs() < f64::EPSILON);
        assert_eq!(table.resolve(0.99), 0);
    }

    #[test]
    fn test_mask_ignores_out_of_range_tiers() {
        let mut table = WeightTable::from_slice(&[0.5, 0.5]);
        table.mask_tiers(&[7]);
        assert!((table.weight(0) - 0.5).abs() < f64::EPSILON);
        assert!((table.weight(1) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_build_for_level_sums_to_one() {
        for level in [1, 10, 20, 28] {
            let table = build_for_level(&GATE_BASE_WEIGHTS, level, &gate_params());
            let sum: f64 = table.weights().iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "level {level} sums to {sum}");
        }
    }

    #[test]
    fn test_build_for_level_locks_top_tier_until_unlock() {
        let early = build_for_level(&GATE_BASE_WEIGHTS, 1, &gate_params());
        assert!((early.weight(10) - 0.0).abs() < f64::EPSILON);

        let late = build_for_level(&GATE_BASE_WEIGHTS, 28, &gate_params());
        assert!(late.weight(10) > 0.0);
    }

    #[test]
    fn test_build_for_level_keeps_higher_tiers_rarer() {
        // The level ramp boosts high tiers but never inverts the ordering.
        for level in [1, 14, 28] {
            let table = build_for_level(&GATE_BASE_WEIGHTS, level, &gate_params());
            for i in 1..table.len() {
                assert!(
                    table.weight(i) <= table.weight(i - 1),
                    "tier {i} heavier than tier {} at level {level}",
                    i - 1
                );
            }
        }
    }

    #[test]
    fn test_draw_distribution_tracks_weights() {
        let mut table = WeightTable::from_slice(&[0.7, 0.2, 0.1]);
        table.renormalize();

        let mut counts = [0u32; 3];
        let mut rng = rand::thread_rng();
        for _ in 0..10000 {
            counts[table.draw(&mut rng)] += 1;
        }

        assert!(counts[0] > 6400, "tier 0 should be ~70%, got {}", counts[0]);
        assert!(counts[1] > 1500, "tier 1 should be ~20%, got {}", counts[1]);
        assert!(counts[2] > 600, "tier 2 should be ~10%, got {}", counts[2]);
    }

    #[test]
    fn test_rarity_from_index_clamps() {
        assert_eq!(Rarity::from_index(0), Rarity::Common);
        assert_eq!(Rarity::from_index(4), Rarity::Mythic);
        assert_eq!(Rarity::from_index(99), Rarity::Mythic);
    }

    #[test]
    fn test_fixed_draw_sequence_is_deterministic() {
        let table = build_for_level(&GATE_BASE_WEIGHTS, 14, &gate_params());
        let draws = [0.05, 0.25, 0.55, 0.85, 0.999];
        let first: Vec<usize> = draws.iter().map(|&d| table.resolve(d)).collect();
        let second: Vec<usize> = draws.iter().map(|&d| table.resolve(d)).collect();
        assert_eq!(first, second);
    }
}
