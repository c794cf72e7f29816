//! Fishing skill-check data structures.
//!
//! The skill check is a real-time bar minigame: the player holds a pull key to
//! push a cursor right while it drifts left on release. The bar is split into
//! speed zones; the zone under the cursor decides how fast the line is reeled.

use crate::core::constants::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::error::SkillCheckError;

/// Difficulty levels for the fishing skill check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FishingDifficulty {
    Novice,
    Apprentice,
    Journeyman,
    Master,
}

difficulty_enum_impl!(FishingDifficulty);

/// Speed label of a zone on the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    Slow,
    Medium,
    Fast,
}

impl ZoneKind {
    pub const ALL: [ZoneKind; 3] = [ZoneKind::Slow, ZoneKind::Medium, ZoneKind::Fast];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Medium => "medium",
            Self::Fast => "fast",
        }
    }
}

/// One contiguous segment of the bar, measured in tiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub label: ZoneKind,
    pub width_units: f64,
}

impl Zone {
    pub const fn new(label: ZoneKind, width_units: f64) -> Self {
        Self { label, width_units }
    }
}

/// Zone pattern plus the reel speed of every label it uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Zones from left to right.
    pub zones: Vec<Zone>,
    /// Reel speed per label, added to the distance every tick.
    pub speeds: BTreeMap<ZoneKind, f64>,
}

impl DifficultyConfig {
    pub fn new(zones: Vec<Zone>, speeds: BTreeMap<ZoneKind, f64>) -> Self {
        Self { zones, speeds }
    }

    /// Parse a config from JSON. Only the syntax is checked here; zone and
    /// speed validation happens when a session is built.
    pub fn from_json_str(json: &str) -> Result<Self, SkillCheckError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, SkillCheckError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Sum of zone widths in tiles.
    pub fn total_units(&self) -> f64 {
        self.zones.iter().map(|z| z.width_units).sum()
    }
}

/// Horizontal extent of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldGeometry {
    /// Left edge in position units.
    pub min: f64,
    /// Width in position units.
    pub width: f64,
    /// Position units per zone width unit.
    pub unit_size: f64,
}

impl FieldGeometry {
    pub fn max(&self) -> f64 {
        self.min + self.width
    }
}

impl Default for FieldGeometry {
    fn default() -> Self {
        Self {
            min: FIELD_MIN_X,
            width: FIELD_WIDTH,
            unit_size: TILE_SIZE,
        }
    }
}

/// Cursor tuning. Pulling adds `pull_step` per tick, releasing removes
/// `drift_step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorConfig {
    pub size: f64,
    pub pull_step: f64,
    pub drift_step: f64,
    pub max_velocity: f64,
    /// Fraction of speed kept (and reversed) when hitting an edge.
    pub bounce: f64,
    /// Distance from an edge at which a move counts as a hit.
    pub edge_margin: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            size: CURSOR_SIZE,
            pull_step: CURSOR_PULL_STEP,
            drift_step: CURSOR_DRIFT_STEP,
            max_velocity: CURSOR_MAX_VELOCITY,
            bounce: CURSOR_BOUNCE,
            edge_margin: CURSOR_EDGE_MARGIN,
        }
    }
}

/// Outcome of a skill check. Everything except `Ongoing` is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    Ongoing,
    Success,
    Failure,
    Aborted,
}

impl SessionStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionStatus::Ongoing)
    }
}

/// Input sample for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReelInput {
    pub pull_active: bool,
    pub abort_requested: bool,
}

impl ReelInput {
    pub const IDLE: ReelInput = ReelInput {
        pull_active: false,
        abort_requested: false,
    };
    pub const PULL: ReelInput = ReelInput {
        pull_active: true,
        abort_requested: false,
    };
    pub const ABORT: ReelInput = ReelInput {
        pull_active: false,
        abort_requested: true,
    };
}

/// A zone placed on the field: `[xmin, xmax)` in position units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneSpan {
    pub label: ZoneKind,
    pub xmin: f64,
    pub xmax: f64,
    pub speed: f64,
}

impl ZoneSpan {
    pub fn contains(&self, x: f64) -> bool {
        x >= self.xmin && x < self.xmax
    }
}

/// Read-only view of a session after a tick, for renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCheckSnapshot {
    /// Ticks processed so far.
    pub tick: u64,
    pub status: SessionStatus,
    /// Distance over goal, clamped to `[0, 1]`.
    pub progress_fraction: f64,
    pub cursor_left_x: f64,
    pub cursor_center_x: f64,
    /// Speed applied on the last tick (0 before the first tick).
    pub speed: f64,
    pub zone_layout: Vec<ZoneSpan>,
}

use ZoneKind::{Fast, Medium, Slow};

impl FishingDifficulty {
    /// Reel speed per zone label.
    pub fn speeds(&self) -> BTreeMap<ZoneKind, f64> {
        let (slow, medium, fast) = match self {
            Self::Novice => (1.0, 2.0, 3.0),
            Self::Apprentice => (1.0, 2.0, 3.0),
            Self::Journeyman => (0.5, 1.5, 3.0),
            Self::Master => (0.5, 1.0, 3.0),
        };
        BTreeMap::from([(Slow, slow), (Medium, medium), (Fast, fast)])
    }

    /// Zone patterns for this difficulty. Every pattern spans the full
    /// 12-tile bar; one is picked at random per attempt.
    pub fn patterns(&self) -> Vec<Vec<Zone>> {
        let pattern = |zones: &[(ZoneKind, f64)]| {
            zones
                .iter()
                .map(|&(kind, width)| Zone::new(kind, width))
                .collect::<Vec<_>>()
        };
        match self {
            Self::Novice => vec![
                pattern(&[(Slow, 1.0), (Medium, 2.0), (Fast, 6.0), (Medium, 2.0), (Slow, 1.0)]),
                pattern(&[(Slow, 2.0), (Medium, 2.0), (Fast, 4.0), (Medium, 2.0), (Slow, 2.0)]),
            ],
            Self::Apprentice => vec![
                pattern(&[(Slow, 2.0), (Medium, 2.0), (Fast, 3.0), (Medium, 3.0), (Slow, 2.0)]),
                pattern(&[(Slow, 1.0), (Fast, 3.0), (Medium, 4.0), (Slow, 4.0)]),
            ],
            Self::Journeyman => vec![
                pattern(&[(Slow, 3.0), (Medium, 2.0), (Fast, 2.0), (Medium, 2.0), (Slow, 3.0)]),
                pattern(&[(Medium, 2.0), (Slow, 3.0), (Fast, 2.0), (Slow, 3.0), (Medium, 2.0)]),
            ],
            Self::Master => vec![
                pattern(&[(Slow, 4.0), (Medium, 1.0), (Fast, 1.0), (Medium, 2.0), (Slow, 4.0)]),
                pattern(&[(Slow, 2.0), (Fast, 1.0), (Slow, 6.0), (Fast, 1.0), (Slow, 2.0)]),
            ],
        }
    }

    /// Distance to reel before the fish is landed.
    pub fn distance_goal(&self) -> f64 {
        match self {
            Self::Novice => DEFAULT_DISTANCE_GOAL,
            Self::Apprentice => 120.0,
            Self::Journeyman => 150.0,
            Self::Master => 200.0,
        }
    }

    /// Build the config for one of this difficulty's patterns. Out-of-range
    /// indices fall back to the first pattern.
    pub fn config(&self, pattern_index: usize) -> DifficultyConfig {
        let mut patterns = self.patterns();
        let zones = if pattern_index < patterns.len() {
            patterns.swap_remove(pattern_index)
        } else {
            patterns.swap_remove(0)
        };
        DifficultyConfig::new(zones, self.speeds())
    }
}
