//! Simulation report generation.

use std::collections::HashMap;

/// Stages worth calling out in pacing output.
const MILESTONE_STAGES: [u32; 7] = [10, 25, 50, 100, 250, 500, 1000];

/// Raw results of a single simulated run.
#[derive(Debug, Clone)]
pub struct RunStats {
    pub final_level: u32,
    pub final_stage: u32,
    pub final_gate_level: u32,
    pub final_combat_power: u64,
    pub final_credits: f64,
    pub total_ticks: u64,
    pub reached_target: bool,

    pub total_kills: u64,
    pub total_boss_kills: u64,
    pub companion_level_ups: u64,
    pub online_minutes: u64,

    // Currency drops seen during the run
    pub gate_shard_drops: u64,
    pub companion_shard_drops: u64,
    pub companion_ticket_drops: u64,
    pub skill_ticket_drops: u64,

    // Driver activity
    pub gate_activations: u64,
    pub gear_pulled: u64,
    pub gear_equipped: u64,
    pub gear_sold: u64,
    pub companion_summons: u64,
    pub companion_pulls_new: u64,
    pub companion_pulls_dupe: u64,
    pub skill_summons: u64,
    pub skill_pulls_new: u64,
    pub skill_pulls_dupe: u64,
    pub companions_owned: u64,
    pub skills_owned: u64,

    /// Tick when each level was first reached, indexed by level (0 = never).
    pub level_up_ticks: Vec<u64>,
    /// Tick when each stage was first entered, indexed by stage (0 = never).
    pub stage_entry_ticks: Vec<u64>,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_completed: u32,
    pub runs_timed_out: u32,
    pub target_stage: u32,

    // Aggregated progression
    pub avg_final_level: f64,
    pub avg_final_stage: f64,
    pub avg_final_gate: f64,
    pub avg_combat_power: f64,
    pub avg_total_kills: f64,
    pub avg_boss_kills: f64,
    pub avg_final_credits: f64,
    pub avg_ticks_to_target: f64,

    // Distribution data
    pub level_distribution: HashMap<u32, u32>,
    pub stage_distribution: HashMap<u32, u32>,

    // Gacha economy
    pub avg_gate_activations: f64,
    pub avg_gear_equipped: f64,
    pub avg_gear_sold: f64,
    pub avg_companion_summons: f64,
    pub avg_skill_summons: f64,
    pub avg_companions_owned: f64,
    pub avg_skills_owned: f64,
    pub companion_dupe_rate: f64,
    pub skill_dupe_rate: f64,

    // Per-milestone pacing: (stage, fraction of runs reaching it, avg tick)
    pub stage_milestones: Vec<(u32, f64, f64)>,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, target_stage: u32, max_ticks: u64) -> Self {
        let num_runs = runs.len() as u32;
        let denom = num_runs.max(1) as f64;
        let runs_completed = runs.iter().filter(|r| r.reached_target).count() as u32;
        let runs_timed_out = runs.iter().filter(|r| r.total_ticks >= max_ticks).count() as u32;

        let avg = |field: fn(&RunStats) -> f64| runs.iter().map(field).sum::<f64>() / denom;

        let avg_final_level = avg(|r| r.final_level as f64);
        let avg_final_stage = avg(|r| r.final_stage as f64);
        let avg_final_gate = avg(|r| r.final_gate_level as f64);
        let avg_combat_power = avg(|r| r.final_combat_power as f64);
        let avg_total_kills = avg(|r| r.total_kills as f64);
        let avg_boss_kills = avg(|r| r.total_boss_kills as f64);
        let avg_final_credits = avg(|r| r.final_credits);
        let avg_ticks_to_target = runs
            .iter()
            .filter(|r| r.reached_target)
            .map(|r| r.total_ticks as f64)
            .sum::<f64>()
            / runs_completed.max(1) as f64;

        let mut level_distribution = HashMap::new();
        let mut stage_distribution = HashMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
            *stage_distribution.entry(run.final_stage).or_insert(0) += 1;
        }

        let avg_gate_activations = avg(|r| r.gate_activations as f64);
        let avg_gear_equipped = avg(|r| r.gear_equipped as f64);
        let avg_gear_sold = avg(|r| r.gear_sold as f64);
        let avg_companion_summons = avg(|r| r.companion_summons as f64);
        let avg_skill_summons = avg(|r| r.skill_summons as f64);
        let avg_companions_owned = avg(|r| r.companions_owned as f64);
        let avg_skills_owned = avg(|r| r.skills_owned as f64);

        let dupe_rate = |new: u64, dupe: u64| {
            let total = new + dupe;
            if total == 0 {
                0.0
            } else {
                dupe as f64 / total as f64
            }
        };
        let companion_dupe_rate = dupe_rate(
            runs.iter().map(|r| r.companion_pulls_new).sum(),
            runs.iter().map(|r| r.companion_pulls_dupe).sum(),
        );
        let skill_dupe_rate = dupe_rate(
            runs.iter().map(|r| r.skill_pulls_new).sum(),
            runs.iter().map(|r| r.skill_pulls_dupe).sum(),
        );

        let mut stage_milestones = Vec::new();
        for &stage in &MILESTONE_STAGES {
            let reaching: Vec<&RunStats> =
                runs.iter().filter(|r| r.final_stage >= stage).collect();
            let fraction = reaching.len() as f64 / denom;
            let avg_tick = if reaching.is_empty() {
                0.0
            } else {
                reaching
                    .iter()
                    .map(|r| r.stage_entry_ticks.get(stage as usize).copied().unwrap_or(0) as f64)
                    .sum::<f64>()
                    / reaching.len() as f64
            };
            stage_milestones.push((stage, fraction, avg_tick));
        }

        Self {
            num_runs,
            runs_completed,
            runs_timed_out,
            target_stage,
            avg_final_level,
            avg_final_stage,
            avg_final_gate,
            avg_combat_power,
            avg_total_kills,
            avg_boss_kills,
            avg_final_credits,
            avg_ticks_to_target,
            level_distribution,
            stage_distribution,
            avg_gate_activations,
            avg_gear_equipped,
            avg_gear_sold,
            avg_companion_summons,
            avg_skill_summons,
            avg_companions_owned,
            avg_skills_owned,
            companion_dupe_rate,
            skill_dupe_rate,
            stage_milestones,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} reached stage {}, {} timed out\n\n",
            self.num_runs, self.runs_completed, self.target_stage, self.runs_timed_out
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Level:     {:.1}\n",
            self.avg_final_level
        ));
        report.push_str(&format!(
            "  Avg Final Stage:     {:.1}\n",
            self.avg_final_stage
        ));
        report.push_str(&format!(
            "  Avg Gate Level:      {:.1}\n",
            self.avg_final_gate
        ));
        report.push_str(&format!(
            "  Avg Combat Power:    {:.0}\n",
            self.avg_combat_power
        ));
        report.push_str(&format!(
            "  Avg Total Kills:     {:.0} ({:.0} bosses)\n",
            self.avg_total_kills, self.avg_boss_kills
        ));
        report.push_str(&format!(
            "  Avg Credits Held:    {:.0}\n",
            self.avg_final_credits
        ));
        report.push_str(&format!(
            "  Avg Ticks to Target: {:.0}\n\n",
            self.avg_ticks_to_target
        ));

        report.push_str("── GACHA ECONOMY ────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Gate Activations:    {:.1} per run\n",
            self.avg_gate_activations
        ));
        report.push_str(&format!(
            "  Gear Equipped/Sold:  {:.1} / {:.1}\n",
            self.avg_gear_equipped, self.avg_gear_sold
        ));
        report.push_str(&format!(
            "  Companion Summons:   {:.1} bundles, {:.1} owned, {:.0}% dupes\n",
            self.avg_companion_summons,
            self.avg_companions_owned,
            self.companion_dupe_rate * 100.0
        ));
        report.push_str(&format!(
            "  Skill Summons:       {:.1} bundles, {:.1} owned, {:.0}% dupes\n\n",
            self.avg_skill_summons,
            self.avg_skills_owned,
            self.skill_dupe_rate * 100.0
        ));

        report.push_str("── DROP INCOME (per run) ────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Gate Shards:         {:.1}\n",
            self.avg_of(|r| r.gate_shard_drops as f64)
        ));
        report.push_str(&format!(
            "  Companion Shards:    {:.1}\n",
            self.avg_of(|r| r.companion_shard_drops as f64)
        ));
        report.push_str(&format!(
            "  Companion Tickets:   {:.1}\n",
            self.avg_of(|r| r.companion_ticket_drops as f64)
        ));
        report.push_str(&format!(
            "  Skill Tickets:       {:.1}\n",
            self.avg_of(|r| r.skill_ticket_drops as f64)
        ));
        report.push_str(&format!(
            "  Online Minutes Paid: {:.1}\n",
            self.avg_of(|r| r.online_minutes as f64)
        ));
        report.push_str(&format!(
            "  Companion Level-Ups: {:.1}\n\n",
            self.avg_of(|r| r.companion_level_ups as f64)
        ));

        report.push_str("── STAGE MILESTONES ─────────────────────────────────────────────\n");
        for &(stage, fraction, avg_tick) in &self.stage_milestones {
            if fraction <= 0.0 {
                continue;
            }
            let pct = fraction * 100.0;
            let bar_len = (pct / 5.0) as usize;
            let bar: String = "█".repeat(bar_len);
            report.push_str(&format!(
                "  Stage {:4}: {:>5.1}% reached, avg tick {:>7.0} {}\n",
                stage, pct, avg_tick, bar
            ));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let completion_rate = (self.runs_completed as f64 / self.num_runs.max(1) as f64) * 100.0;
        report.push_str(&format!("  Completion Rate: {:.1}%\n", completion_rate));

        if self.avg_final_stage < self.target_stage as f64 * 0.5 {
            report.push_str("  ⚠️  Most runs stall well short of target - stage pacing too slow?\n");
        }
        if self.companion_dupe_rate > 0.85 {
            report.push_str("  ⚠️  Companion pulls are mostly dupes - pool too small?\n");
        }
        if self.skill_dupe_rate > 0.85 {
            report.push_str("  ⚠️  Skill pulls are mostly dupes - pool too small?\n");
        }
        if self.avg_gear_pull_rate() < 0.05 && self.avg_gate_activations > 1.0 {
            report.push_str("  ⚠️  Gate gear almost never equips - roll budgets too weak?\n");
        }
        if self.avg_final_gate + 3.0 < self.avg_final_level / 10.0 && self.avg_final_gate < 24.0 {
            report.push_str("  ⚠️  Gate ladder lags player level - shard drops too rare?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    fn avg_of(&self, field: fn(&RunStats) -> f64) -> f64 {
        self.run_stats.iter().map(field).sum::<f64>() / self.run_stats.len().max(1) as f64
    }

    /// Fraction of pulled gear the driver chose to equip.
    fn avg_gear_pull_rate(&self) -> f64 {
        let pulled: u64 = self.run_stats.iter().map(|r| r.gear_pulled).sum();
        if pulled == 0 {
            return 1.0;
        }
        let equipped: u64 = self.run_stats.iter().map(|r| r.gear_equipped).sum();
        equipped as f64 / pulled as f64
    }

    /// Detailed level pacing table, one row per ten levels.
    pub fn level_curve_text(&self) -> String {
        let mut out = String::new();
        out.push_str("── LEVEL PACING ─────────────────────────────────────────────────\n");
        out.push_str("  Level    Runs Reached    Avg Tick\n");

        let mut level = 10;
        loop {
            let reaching: Vec<&RunStats> = self
                .run_stats
                .iter()
                .filter(|r| r.final_level >= level)
                .collect();
            if reaching.is_empty() {
                break;
            }
            let avg_tick = reaching
                .iter()
                .map(|r| r.level_up_ticks.get(level as usize).copied().unwrap_or(0) as f64)
                .sum::<f64>()
                / reaching.len() as f64;
            out.push_str(&format!(
                "  {:5}    {:12}    {:8.0}\n",
                level,
                reaching.len(),
                avg_tick
            ));
            level += 10;
        }

        out
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// Serialize only the aggregate fields; per-run stats stay in memory.
impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 19)?;
        state.serialize_field("num_runs", &self.num_runs)?;
        state.serialize_field("runs_completed", &self.runs_completed)?;
        state.serialize_field("runs_timed_out", &self.runs_timed_out)?;
        state.serialize_field("target_stage", &self.target_stage)?;
        state.serialize_field("avg_final_level", &self.avg_final_level)?;
        state.serialize_field("avg_final_stage", &self.avg_final_stage)?;
        state.serialize_field("avg_final_gate", &self.avg_final_gate)?;
        state.serialize_field("avg_combat_power", &self.avg_combat_power)?;
        state.serialize_field("avg_total_kills", &self.avg_total_kills)?;
        state.serialize_field("avg_boss_kills", &self.avg_boss_kills)?;
        state.serialize_field("avg_final_credits", &self.avg_final_credits)?;
        state.serialize_field("avg_ticks_to_target", &self.avg_ticks_to_target)?;
        state.serialize_field("avg_gate_activations", &self.avg_gate_activations)?;
        state.serialize_field("avg_companion_summons", &self.avg_companion_summons)?;
        state.serialize_field("avg_skill_summons", &self.avg_skill_summons)?;
        state.serialize_field("companion_dupe_rate", &self.companion_dupe_rate)?;
        state.serialize_field("skill_dupe_rate", &self.skill_dupe_rate)?;
        state.serialize_field("stage_milestones", &self.stage_milestones)?;
        state.serialize_field(
            "completion_rate",
            &(self.runs_completed as f64 / self.num_runs.max(1) as f64),
        )?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(final_stage: u32, final_level: u32, reached: bool) -> RunStats {
        let mut stage_entry_ticks = vec![0u64; 1001];
        for stage in 2..=final_stage {
            stage_entry_ticks[stage as usize] = stage as u64 * 25;
        }
        let mut level_up_ticks = vec![0u64; 301];
        for level in 2..=final_level {
            level_up_ticks[level as usize] = level as u64 * 40;
        }

        RunStats {
            final_level,
            final_stage,
            final_gate_level: final_level / 10 + 1,
            final_combat_power: 500,
            final_credits: 10_000.0,
            total_ticks: 5_000,
            reached_target: reached,
            total_kills: 400,
            total_boss_kills: 12,
            companion_level_ups: 3,
            online_minutes: 80,
            gate_shard_drops: 12,
            companion_shard_drops: 8,
            companion_ticket_drops: 5,
            skill_ticket_drops: 6,
            gate_activations: 12,
            gear_pulled: 120,
            gear_equipped: 9,
            gear_sold: 111,
            companion_summons: 1,
            companion_pulls_new: 10,
            companion_pulls_dupe: 5,
            skill_summons: 1,
            skill_pulls_new: 8,
            skill_pulls_dupe: 7,
            companions_owned: 10,
            skills_owned: 8,
            level_up_ticks,
            stage_entry_ticks,
        }
    }

    #[test]
    fn test_report_aggregates_averages() {
        let report = SimReport::from_runs(
            vec![run(50, 40, true), run(30, 30, false)],
            50,
            100_000,
        );
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.runs_completed, 1);
        assert!((report.avg_final_stage - 40.0).abs() < 1e-9);
        assert!((report.avg_final_level - 35.0).abs() < 1e-9);
        // Only the completed run counts toward time-to-target.
        assert!((report.avg_ticks_to_target - 5_000.0).abs() < 1e-9);
        assert!((report.companion_dupe_rate - 10.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_milestones_only_count_reaching_runs() {
        let report = SimReport::from_runs(
            vec![run(60, 40, true), run(20, 25, false)],
            50,
            100_000,
        );
        let (stage, fraction, avg_tick) = report.stage_milestones[2];
        assert_eq!(stage, 50);
        assert!((fraction - 0.5).abs() < 1e-9);
        assert!((avg_tick - 50.0 * 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_text_report_renders() {
        let report = SimReport::from_runs(vec![run(50, 40, true)], 50, 100_000);
        let text = report.to_text();
        assert!(text.contains("SIMULATION REPORT"));
        assert!(text.contains("GACHA ECONOMY"));
        assert!(text.contains("Stage   50"));
    }

    #[test]
    fn test_json_report_is_valid() {
        let report = SimReport::from_runs(vec![run(50, 40, true)], 50, 100_000);
        let value: serde_json::Value =
            serde_json::from_str(&report.to_json()).expect("valid JSON");
        assert_eq!(value["num_runs"], 1);
        assert!((value["completion_rate"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    }
}
