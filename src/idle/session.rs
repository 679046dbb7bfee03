//! Session suspend/resume tracking.
//!
//! A suspend records a UTC checkpoint; the next resume consumes it
//! exactly once and converts the gap into offline hours. The online
//! timer lives here too, carrying fractional seconds between ticks so a
//! 60-second reward interval never drifts.

use crate::core::constants::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionTracker {
    /// UTC seconds recorded on suspend, consumed on resume.
    pub checkpoint_utc: Option<i64>,
    pub online_timer_seconds: f64,
}

impl SessionTracker {
    pub fn new() -> Self {
        SessionTracker::default()
    }

    /// Records the moment the session went away.
    pub fn suspend(&mut self, now_utc: i64) {
        self.checkpoint_utc = Some(now_utc);
    }

    /// Consumes the checkpoint and returns the offline gap in hours.
    ///
    /// Returns `None` on the first run (no checkpoint), after a clock
    /// rollback, or when the gap is at or below the three-minute grant
    /// threshold. The checkpoint is consumed in every one of those cases,
    /// so a second resume without a new suspend always yields nothing.
    pub fn take_offline_hours(&mut self, now_utc: i64) -> Option<f64> {
        let checkpoint = self.checkpoint_utc.take()?;
        let elapsed_seconds = (now_utc - checkpoint).max(0);
        let hours = elapsed_seconds as f64 / 3600.0;
        if hours <= OFFLINE_MIN_HOURS {
            return None;
        }
        Some(hours)
    }

    /// Advances the online reward timer and returns how many whole
    /// 60-second intervals elapsed. The fractional remainder stays in
    /// the timer for the next tick.
    pub fn tick_online(&mut self, dt_seconds: f64) -> u32 {
        if dt_seconds <= 0.0 {
            return 0;
        }
        self.online_timer_seconds += dt_seconds;

        let mut intervals = 0;
        while self.online_timer_seconds >= ONLINE_REWARD_INTERVAL_SECONDS {
            self.online_timer_seconds -= ONLINE_REWARD_INTERVAL_SECONDS;
            intervals += 1;
        }
        intervals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_run_has_no_offline_reward() {
        let mut tracker = SessionTracker::new();
        assert_eq!(tracker.take_offline_hours(1_700_000_000), None);
    }

    #[test]
    fn test_checkpoint_is_consumed_exactly_once() {
        let mut tracker = SessionTracker::new();
        tracker.suspend(1_700_000_000);

        let hours = tracker.take_offline_hours(1_700_000_000 + 7200);
        assert_eq!(hours, Some(2.0));

        // No new suspend, so the second resume finds nothing.
        assert_eq!(tracker.take_offline_hours(1_700_000_000 + 14400), None);
    }

    #[test]
    fn test_tiny_gap_consumes_without_reward() {
        let mut tracker = SessionTracker::new();
        tracker.suspend(1_700_000_000);

        // 180 seconds is exactly the 0.05h threshold.
        assert_eq!(tracker.take_offline_hours(1_700_000_000 + 180), None);
        assert!(tracker.checkpoint_utc.is_none());
    }

    #[test]
    fn test_clock_rollback_clamps_to_zero() {
        let mut tracker = SessionTracker::new();
        tracker.suspend(1_700_000_000);
        assert_eq!(tracker.take_offline_hours(1_699_999_000), None);
    }

    #[test]
    fn test_online_timer_carries_remainder() {
        let mut tracker = SessionTracker::new();
        assert_eq!(tracker.tick_online(90.0), 1);
        assert!((tracker.online_timer_seconds - 30.0).abs() < 1e-9);

        assert_eq!(tracker.tick_online(30.0), 1);
        assert!(tracker.online_timer_seconds.abs() < 1e-9);
    }

    #[test]
    fn test_long_tick_grants_several_intervals() {
        let mut tracker = SessionTracker::new();
        assert_eq!(tracker.tick_online(185.0), 3);
        assert!((tracker.online_timer_seconds - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_dt_changes_nothing() {
        let mut tracker = SessionTracker::new();
        tracker.online_timer_seconds = 59.0;
        assert_eq!(tracker.tick_online(0.0), 0);
        assert!((tracker.online_timer_seconds - 59.0).abs() < f64::EPSILON);
    }
}
