//! Skill cursor physics: pull/drift velocity, edge bounce.

use super::error::SkillCheckError;
use super::types::{CursorConfig, FieldGeometry};

/// The cursor the player steers along the bar.
///
/// `field_min <= position <= field_max - size` holds after every step: a move
/// that would reach an edge is rejected and the velocity reflected instead.
#[derive(Debug, Clone)]
pub struct CursorBody {
    position: f64,
    velocity: f64,
    field_min: f64,
    field_max: f64,
    config: CursorConfig,
}

impl CursorBody {
    /// Create a cursor at rest, centered on the field.
    pub fn new(field: &FieldGeometry, config: CursorConfig) -> Result<Self, SkillCheckError> {
        validate(field, &config)?;
        Ok(Self {
            position: field.min + field.width / 2.0 - config.size / 2.0,
            velocity: 0.0,
            field_min: field.min,
            field_max: field.max(),
            config,
        })
    }

    /// Advance one tick.
    pub fn step(&mut self, pull_active: bool) {
        let c = &self.config;

        // Pull pushes right in bigger steps than the idle drift pulls left.
        // Only the current velocity is compared, so a step may overshoot the cap.
        if pull_active {
            if self.velocity < c.max_velocity {
                self.velocity += c.pull_step;
            }
        } else if self.velocity > -c.max_velocity {
            self.velocity -= c.drift_step;
        }

        self.resolve_move();
    }

    fn resolve_move(&mut self) {
        let c = &self.config;
        let target = self.position + self.velocity;

        if target >= self.field_max - c.size - c.edge_margin
            || target <= self.field_min + c.edge_margin
        {
            self.velocity = -self.velocity * c.bounce;
        } else {
            self.position = target;
        }
    }

    /// Left edge of the cursor.
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn size(&self) -> f64 {
        self.config.size
    }

    pub fn center(&self) -> f64 {
        self.position + self.config.size / 2.0
    }

    pub fn config(&self) -> &CursorConfig {
        &self.config
    }
}

fn validate(field: &FieldGeometry, c: &CursorConfig) -> Result<(), SkillCheckError> {
    let invalid = |reason: &str| Err(SkillCheckError::InvalidCursor(reason.to_string()));

    if !field.min.is_finite() || !field.width.is_finite() || field.width <= 0.0 {
        return invalid("field must have a finite, positive width");
    }
    if !field.unit_size.is_finite() || field.unit_size <= 0.0 {
        return invalid("unit size must be positive");
    }
    if !c.size.is_finite() || c.size <= 0.0 {
        return invalid("cursor size must be positive");
    }
    if !c.edge_margin.is_finite() || c.edge_margin < 0.0 {
        return invalid("edge margin must be non-negative");
    }
    if c.size + 2.0 * c.edge_margin >= field.width {
        return invalid("cursor does not fit inside the field");
    }
    let steps = [c.pull_step, c.drift_step, c.max_velocity];
    if steps.iter().any(|s| !s.is_finite() || *s < 0.0) {
        return invalid("steps and max velocity must be non-negative");
    }
    if !(0.0..=1.0).contains(&c.bounce) {
        return invalid("bounce must be within [0, 1]");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_field() -> FieldGeometry {
        FieldGeometry {
            min: 24.0,
            width: 96.0,
            unit_size: 8.0,
        }
    }

    fn cursor() -> CursorBody {
        CursorBody::new(&small_field(), CursorConfig::default()).unwrap()
    }

    #[test]
    fn test_starts_centered_at_rest() {
        let c = cursor();
        assert_eq!(c.position(), 68.0);
        assert_eq!(c.center(), 72.0);
        assert_eq!(c.velocity(), 0.0);
    }

    #[test]
    fn test_pull_steps_faster_than_drift() {
        let mut c = cursor();
        c.step(true);
        assert!((c.velocity() - 0.2).abs() < 1e-12);
        assert!((c.position() - 68.2).abs() < 1e-12);

        let mut c = cursor();
        c.step(false);
        assert!((c.velocity() + 0.1).abs() < 1e-12);
        assert!((c.position() - 67.9).abs() < 1e-12);
    }

    #[test]
    fn test_pull_stops_accelerating_at_cap() {
        let mut c = cursor();
        c.velocity = 6.0;
        c.position = 30.0;
        c.step(true);
        assert_eq!(c.velocity(), 6.0);
        assert_eq!(c.position(), 36.0);
    }

    #[test]
    fn test_drift_stops_accelerating_at_cap() {
        let mut c = cursor();
        c.velocity = -6.0;
        c.step(false);
        assert_eq!(c.velocity(), -6.0);
        assert_eq!(c.position(), 62.0);
    }

    #[test]
    fn test_bounce_rejects_move_and_reflects() {
        let mut c = CursorBody::new(
            &small_field(),
            CursorConfig {
                pull_step: 0.0,
                drift_step: 0.0,
                ..CursorConfig::default()
            },
        )
        .unwrap();
        c.position = 118.0;
        c.velocity = 5.0;
        c.step(false);
        assert_eq!(c.position(), 118.0);
        assert!((c.velocity() + 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounce_at_left_edge() {
        let mut c = cursor();
        c.position = 26.0;
        c.velocity = -2.0;
        c.step(false);
        assert_eq!(c.position(), 26.0);
        assert!((c.velocity() - 1.26).abs() < 1e-12);
    }

    #[test]
    fn test_held_pull_never_leaves_field() {
        let mut c = cursor();
        for _ in 0..2_000 {
            c.step(true);
            assert!(c.position() >= 24.0);
            assert!(c.position() <= 120.0 - 8.0);
        }
    }

    #[test]
    fn test_rejects_cursor_wider_than_field() {
        let config = CursorConfig {
            size: 96.0,
            ..CursorConfig::default()
        };
        assert!(matches!(
            CursorBody::new(&small_field(), config),
            Err(SkillCheckError::InvalidCursor(_))
        ));
    }

    #[test]
    fn test_rejects_bounce_out_of_range() {
        let config = CursorConfig {
            bounce: 1.5,
            ..CursorConfig::default()
        };
        assert!(CursorBody::new(&small_field(), config).is_err());
    }
}
