//! Simulation report generation.

use crate::fishing::{FishingDifficulty, SessionStatus};
use serde::Serialize;

/// Outcome of one simulated attempt.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub difficulty: FishingDifficulty,
    pub pattern: usize,
    pub status: SessionStatus,
    pub ticks: u64,
}

/// Aggregated results for one difficulty.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub difficulty: FishingDifficulty,
    pub strategy: &'static str,
    pub num_runs: u32,
    pub successes: u32,
    pub failures: u32,
    pub aborted: u32,
    pub success_rate: f64,

    // Ticks, over successful runs only
    pub avg_ticks_to_success: f64,
    pub min_ticks_to_success: Option<u64>,
    pub max_ticks_to_success: Option<u64>,

    // Success count per pattern index
    pub successes_per_pattern: Vec<u32>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(
        difficulty: FishingDifficulty,
        strategy: &'static str,
        runs: Vec<RunStats>,
    ) -> Self {
        let num_runs = runs.len() as u32;
        let count =
            |status: SessionStatus| runs.iter().filter(|r| r.status == status).count() as u32;
        let successes = count(SessionStatus::Success);

        let win_ticks: Vec<u64> = runs
            .iter()
            .filter(|r| r.status == SessionStatus::Success)
            .map(|r| r.ticks)
            .collect();
        let avg_ticks_to_success = if win_ticks.is_empty() {
            0.0
        } else {
            win_ticks.iter().sum::<u64>() as f64 / win_ticks.len() as f64
        };

        let mut successes_per_pattern = vec![0; difficulty.patterns().len()];
        for run in runs.iter().filter(|r| r.status == SessionStatus::Success) {
            if let Some(slot) = successes_per_pattern.get_mut(run.pattern) {
                *slot += 1;
            }
        }

        Self {
            difficulty,
            strategy,
            num_runs,
            successes,
            failures: count(SessionStatus::Failure),
            aborted: count(SessionStatus::Aborted),
            success_rate: if num_runs == 0 {
                0.0
            } else {
                successes as f64 / num_runs as f64
            },
            avg_ticks_to_success,
            min_ticks_to_success: win_ticks.iter().copied().min(),
            max_ticks_to_success: win_ticks.iter().copied().max(),
            successes_per_pattern,
            run_stats: runs,
        }
    }

    /// Human-readable summary.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str(&format!(
            "── {} ({} angler) ──────────────────────────────\n",
            self.difficulty.name().to_uppercase(),
            self.strategy
        ));
        report.push_str(&format!(
            "  Runs:            {} ({} landed, {} lost, {} aborted)\n",
            self.num_runs, self.successes, self.failures, self.aborted
        ));
        report.push_str(&format!(
            "  Success Rate:    {:.1}%\n",
            self.success_rate * 100.0
        ));
        match (self.min_ticks_to_success, self.max_ticks_to_success) {
            (Some(min), Some(max)) => report.push_str(&format!(
                "  Ticks to Land:   avg {:.1}, min {}, max {}\n",
                self.avg_ticks_to_success, min, max
            )),
            _ => report.push_str("  Ticks to Land:   n/a\n"),
        }
        let per_pattern: Vec<String> = self
            .successes_per_pattern
            .iter()
            .enumerate()
            .map(|(i, n)| format!("#{}: {}", i, n))
            .collect();
        report.push_str(&format!("  Wins by Pattern: {}\n", per_pattern.join(", ")));

        report
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
