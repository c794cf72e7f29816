//! Error types for the fishing skill check.
//!
//! Construction-time problems are configuration errors; ticking a session
//! that already reached a terminal status is a misuse error.

use super::types::{SessionStatus, ZoneKind};

/// Errors raised while building or driving a skill-check session.
#[derive(Debug, thiserror::Error)]
pub enum SkillCheckError {
    /// Zone widths do not cover the field exactly.
    #[error("zone widths sum to {actual} units but the field is {expected} units wide")]
    WidthMismatch {
        /// Field width in position units.
        expected: f64,
        /// Sum of the zone widths converted to position units.
        actual: f64,
    },

    /// A zone uses a label with no speed entry.
    #[error("zone label {0:?} has no speed multiplier")]
    UnmappedZone(ZoneKind),

    /// The pattern has no zones at all.
    #[error("zone pattern is empty")]
    EmptyPattern,

    /// A zone width is zero, negative or not finite.
    #[error("zone {index} has invalid width {width}")]
    InvalidZoneWidth { index: usize, width: f64 },

    /// A speed multiplier is not finite.
    #[error("speed for {kind:?} is not a finite number ({speed})")]
    InvalidSpeed { kind: ZoneKind, speed: f64 },

    /// The distance goal is zero, negative or not finite.
    #[error("distance goal must be positive, got {0}")]
    InvalidGoal(f64),

    /// Field geometry or cursor tuning cannot hold the position invariant.
    #[error("invalid cursor configuration: {0}")]
    InvalidCursor(String),

    /// A difficulty file could not be parsed.
    #[error("could not parse difficulty config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A difficulty file could not be read.
    #[error("could not read difficulty config: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// `tick` was called after the session already finished.
    #[error("session already finished with status {status:?}")]
    SessionFinished { status: SessionStatus },
}

impl SkillCheckError {
    /// True for errors raised while building a session.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, SkillCheckError::SessionFinished { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misuse_is_not_configuration() {
        let err = SkillCheckError::SessionFinished {
            status: SessionStatus::Success,
        };
        assert!(!err.is_configuration());
        assert!(SkillCheckError::EmptyPattern.is_configuration());
    }

    #[test]
    fn test_width_mismatch_message() {
        let err = SkillCheckError::WidthMismatch {
            expected: 96.0,
            actual: 90.0,
        };
        assert_eq!(
            err.to_string(),
            "zone widths sum to 90 units but the field is 96 units wide"
        );
    }
}
