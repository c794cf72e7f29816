//! Reel progress toward the distance goal and the outcome state machine.

use super::error::SkillCheckError;
use super::types::SessionStatus;

/// Accumulates reeled distance and decides the outcome.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    distance_current: f64,
    distance_max: f64,
    status: SessionStatus,
}

impl ProgressTracker {
    pub fn new(distance_max: f64) -> Result<Self, SkillCheckError> {
        if !distance_max.is_finite() || distance_max <= 0.0 {
            return Err(SkillCheckError::InvalidGoal(distance_max));
        }
        Ok(Self {
            distance_current: 0.0,
            distance_max,
            status: SessionStatus::Ongoing,
        })
    }

    /// Add one tick of reeling.
    ///
    /// Checks run in a fixed order: success, then failure, then abort. A tick
    /// that reaches the goal while an abort is requested still succeeds.
    /// Once terminal, nothing changes and the call is rejected.
    pub fn step(
        &mut self,
        speed: f64,
        abort_requested: bool,
    ) -> Result<SessionStatus, SkillCheckError> {
        if self.status.is_terminal() {
            return Err(SkillCheckError::SessionFinished {
                status: self.status,
            });
        }

        self.distance_current += speed;

        self.status = if self.distance_current >= self.distance_max {
            SessionStatus::Success
        } else if self.distance_current < 0.0 {
            SessionStatus::Failure
        } else if abort_requested {
            SessionStatus::Aborted
        } else {
            SessionStatus::Ongoing
        };

        Ok(self.status)
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn distance(&self) -> f64 {
        self.distance_current
    }

    pub fn goal(&self) -> f64 {
        self.distance_max
    }

    /// Progress in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        (self.distance_current / self.distance_max).clamp(0.0, 1.0)
    }
}
