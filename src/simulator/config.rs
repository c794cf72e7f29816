//! Simulation configuration.

use crate::core::constants::{SIM_DEFAULT_RUNS, SIM_MAX_TICKS_PER_RUN};
use crate::fishing::FishingDifficulty;
use serde::Serialize;

/// How the scripted angler decides to pull each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum AnglerStrategy {
    /// Never pulls; the cursor drifts to the left edge and bounces there.
    Idle,
    /// Holds the pull for the whole attempt.
    Hold,
    /// Steers toward the middle of the fastest zone. Each tick the decision
    /// is skipped (previous input repeated) with probability `miss_chance`.
    Tracker { miss_chance: f64 },
}

impl AnglerStrategy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "idle" => Some(Self::Idle),
            "hold" => Some(Self::Hold),
            "tracker" => Some(Self::Tracker { miss_chance: 0.1 }),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Hold => "hold",
            Self::Tracker { .. } => "tracker",
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Attempts per difficulty
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Ticks after which the angler gives up and aborts
    pub max_ticks_per_run: u64,

    /// Difficulties to simulate, in report order
    pub difficulties: Vec<FishingDifficulty>,

    pub strategy: AnglerStrategy,

    /// Output level (0 = reports only, 1 = banner and reports, 2 = every run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: SIM_DEFAULT_RUNS,
            seed: None,
            max_ticks_per_run: SIM_MAX_TICKS_PER_RUN,
            difficulties: FishingDifficulty::ALL.to_vec(),
            strategy: AnglerStrategy::Tracker { miss_chance: 0.1 },
            verbosity: 1,
        }
    }
}

impl SimConfig {
    pub fn prints_banner(&self) -> bool {
        self.verbosity >= 1
    }

    pub fn prints_runs(&self) -> bool {
        self.verbosity >= 2
    }

    /// Small seeded config for tests
    pub fn quick(strategy: AnglerStrategy, seed: u64) -> Self {
        Self {
            num_runs: 20,
            seed: Some(seed),
            strategy,
            verbosity: 0,
            ..Default::default()
        }
    }
}
