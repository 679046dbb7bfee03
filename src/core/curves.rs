//! Shared scaling curves for stats, rarity weighting, and XP bonuses.
//!
//! Every multiplier in the balance model comes from one of two shapes: a
//! smooth ease (slow start, fast middle, slow finish) or a straight line.
//! Both are anchored at 1.0 for level 1 and clamp outside their range.

/// Linear interpolation with `t` clamped to [0, 1].
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Smooth ease from 1.0 at level 1 to `peak` at `max_level`.
///
/// Uses a cubic smoothstep, so the slope is flat at both endpoints. Levels
/// beyond `max_level` hold the peak value.
pub fn smooth_ease(level: u32, max_level: u32, peak: f64) -> f64 {
    if max_level <= 1 {
        return peak;
    }
    let t = (level.saturating_sub(1) as f64 / (max_level - 1) as f64).clamp(0.0, 1.0);
    let eased = t * t * (3.0 - 2.0 * t);
    1.0 + (peak - 1.0) * eased
}

/// Straight line from 1.0 at level 1 to `peak` at `max_level`, clamped outside.
pub fn linear_ramp(level: u32, max_level: u32, peak: f64) -> f64 {
    if max_level <= 1 {
        return peak;
    }
    let t = (level.saturating_sub(1) as f64 / (max_level - 1) as f64).clamp(0.0, 1.0);
    1.0 + (peak - 1.0) * t
}

/// Straight line over a zero-based index: 1.0 at index 0 rising to `peak` at
/// `last_index`. Used for rarity-indexed bonuses.
pub fn tier_ramp(index: usize, last_index: usize, peak: f64) -> f64 {
    if last_index == 0 {
        return 1.0;
    }
    let t = (index as f64 / last_index as f64).clamp(0.0, 1.0);
    1.0 + (peak - 1.0) * t
}
