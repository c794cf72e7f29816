//! Skill-check session: advances cursor, zone lookup and progress together.

use super::cursor::CursorBody;
use super::error::SkillCheckError;
use super::generation;
use super::progress::ProgressTracker;
use super::types::{
    CursorConfig, DifficultyConfig, FieldGeometry, FishingDifficulty, ReelInput, SessionStatus,
    SkillCheckSnapshot,
};
use super::zones::ZoneTable;
use log::{debug, trace, warn};
use rand::Rng;

/// One play attempt of the skill check.
///
/// Ticked once per frame while `Ongoing`; once terminal it is read-only and
/// further ticks are rejected.
#[derive(Debug, Clone)]
pub struct MiniGameSession {
    config: DifficultyConfig,
    difficulty: Option<FishingDifficulty>,
    pattern_index: Option<usize>,
    zones: ZoneTable,
    cursor: CursorBody,
    progress: ProgressTracker,
    last_speed: f64,
    tick_count: u64,
}

impl MiniGameSession {
    /// Build a session on the default field with the default cursor.
    pub fn new(config: DifficultyConfig, distance_goal: f64) -> Result<Self, SkillCheckError> {
        Self::with_geometry(
            config,
            distance_goal,
            FieldGeometry::default(),
            CursorConfig::default(),
        )
    }

    /// Build a session on a custom field. Nothing is created unless every
    /// part validates.
    pub fn with_geometry(
        config: DifficultyConfig,
        distance_goal: f64,
        field: FieldGeometry,
        cursor: CursorConfig,
    ) -> Result<Self, SkillCheckError> {
        let cursor = CursorBody::new(&field, cursor)?;
        let zones = ZoneTable::new(&config, &field)?;
        let progress = ProgressTracker::new(distance_goal)?;

        debug!(
            "skill check created: {} zones, goal {}, field {}..{}",
            zones.layout().len(),
            distance_goal,
            field.min,
            field.max()
        );

        Ok(Self {
            config,
            difficulty: None,
            pattern_index: None,
            zones,
            cursor,
            progress,
            last_speed: 0.0,
            tick_count: 0,
        })
    }

    /// Advance one tick: cursor motion, then zone lookup at the cursor's new
    /// center, then progress.
    pub fn tick(&mut self, input: ReelInput) -> Result<SkillCheckSnapshot, SkillCheckError> {
        let status = self.progress.status();
        if status.is_terminal() {
            warn!(
                "tick {} requested on finished skill check ({:?})",
                self.tick_count, status
            );
            return Err(SkillCheckError::SessionFinished { status });
        }

        self.cursor.step(input.pull_active);
        let center = self.cursor.center();
        let speed = self.zones.speed_at(center);
        let status = self.progress.step(speed, input.abort_requested)?;

        self.last_speed = speed;
        self.tick_count += 1;

        trace!(
            "tick {}: x={:.2} v={:.2} speed={} distance={:.2}",
            self.tick_count,
            self.cursor.position(),
            self.cursor.velocity(),
            speed,
            self.progress.distance()
        );
        if status.is_terminal() {
            debug!(
                "skill check finished after {} ticks: {:?} ({:.1}/{})",
                self.tick_count,
                status,
                self.progress.distance(),
                self.progress.goal()
            );
        }

        Ok(self.snapshot())
    }

    /// Current state without advancing.
    pub fn snapshot(&self) -> SkillCheckSnapshot {
        SkillCheckSnapshot {
            tick: self.tick_count,
            status: self.progress.status(),
            progress_fraction: self.progress.fraction(),
            cursor_left_x: self.cursor.position(),
            cursor_center_x: self.cursor.center(),
            speed: self.last_speed,
            zone_layout: self.zones.layout().to_vec(),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.progress.status()
    }

    pub fn is_finished(&self) -> bool {
        self.progress.status().is_terminal()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn cursor(&self) -> &CursorBody {
        &self.cursor
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn zones(&self) -> &ZoneTable {
        &self.zones
    }

    pub fn config(&self) -> &DifficultyConfig {
        &self.config
    }

    /// Catalogue difficulty this session was rolled from, if any.
    pub fn difficulty(&self) -> Option<FishingDifficulty> {
        self.difficulty
    }

    /// Index into the difficulty's pattern list, for catalogue sessions.
    pub fn pattern_index(&self) -> Option<usize> {
        self.pattern_index
    }
}

/// Start a catalogue skill check: rolls one of the difficulty's patterns and
/// uses its distance goal.
pub fn start_session<R: Rng>(
    difficulty: FishingDifficulty,
    rng: &mut R,
) -> Result<MiniGameSession, SkillCheckError> {
    let (pattern, config) = generation::generate_config(difficulty, rng);
    debug!("{} skill check using pattern {}", difficulty.name(), pattern);
    let mut session = MiniGameSession::new(config, difficulty.distance_goal())?;
    session.difficulty = Some(difficulty);
    session.pattern_index = Some(pattern);
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fishing::types::{Zone, ZoneKind};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::BTreeMap;

    fn uniform_config(speed: f64) -> DifficultyConfig {
        DifficultyConfig::new(
            vec![Zone::new(ZoneKind::Medium, 12.0)],
            BTreeMap::from([(ZoneKind::Medium, speed)]),
        )
    }

    /// Cursor that never moves: no steps, so velocity stays zero.
    fn frozen_cursor() -> CursorConfig {
        CursorConfig {
            pull_step: 0.0,
            drift_step: 0.0,
            ..CursorConfig::default()
        }
    }

    #[test]
    fn test_new_session_defaults() {
        let session = MiniGameSession::new(FishingDifficulty::Novice.config(0), 100.0).unwrap();
        let snap = session.snapshot();
        assert_eq!(snap.tick, 0);
        assert_eq!(snap.status, SessionStatus::Ongoing);
        assert_eq!(snap.progress_fraction, 0.0);
        assert_eq!(snap.cursor_left_x, 116.0);
        assert_eq!(snap.cursor_center_x, 120.0);
        assert_eq!(snap.zone_layout.len(), 5);
        assert_eq!(snap.zone_layout[0].xmin, 72.0);
        assert_eq!(snap.zone_layout[4].xmax, 168.0);
        assert!(session.difficulty().is_none());
    }

    #[test]
    fn test_constant_speed_succeeds_on_goal_tick() {
        let mut session = MiniGameSession::with_geometry(
            uniform_config(1.0),
            10.0,
            FieldGeometry::default(),
            frozen_cursor(),
        )
        .unwrap();
        for tick in 1..10 {
            let snap = session.tick(ReelInput::IDLE).unwrap();
            assert_eq!(snap.status, SessionStatus::Ongoing, "tick {tick}");
        }
        let snap = session.tick(ReelInput::IDLE).unwrap();
        assert_eq!(snap.status, SessionStatus::Success);
        assert_eq!(snap.tick, 10);
        assert_eq!(snap.progress_fraction, 1.0);
    }

    #[test]
    fn test_tick_after_finish_is_rejected() {
        let mut session = MiniGameSession::new(uniform_config(1.0), 1.0).unwrap();
        session.tick(ReelInput::IDLE).unwrap();
        assert!(session.is_finished());

        let err = session.tick(ReelInput::PULL).unwrap_err();
        assert!(!err.is_configuration());
        assert_eq!(session.status(), SessionStatus::Success);
        assert_eq!(session.tick_count(), 1);
    }

    #[test]
    fn test_abort_finishes_session() {
        let mut session = MiniGameSession::new(uniform_config(1.0), 50.0).unwrap();
        session.tick(ReelInput::PULL).unwrap();
        let snap = session.tick(ReelInput::ABORT).unwrap();
        assert_eq!(snap.status, SessionStatus::Aborted);
        assert!((snap.progress_fraction - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_speed_uses_post_move_position() {
        // Two zones split at the field center; the cursor starts centered,
        // so its center sits exactly on the boundary and a single drift step
        // moves it into the left zone before the lookup.
        let config = DifficultyConfig::new(
            vec![
                Zone::new(ZoneKind::Slow, 6.0),
                Zone::new(ZoneKind::Fast, 6.0),
            ],
            BTreeMap::from([(ZoneKind::Slow, 1.0), (ZoneKind::Fast, 3.0)]),
        );
        let mut session = MiniGameSession::new(config.clone(), 100.0).unwrap();
        assert_eq!(session.tick(ReelInput::IDLE).unwrap().speed, 1.0);

        let mut session = MiniGameSession::new(config, 100.0).unwrap();
        assert_eq!(session.tick(ReelInput::PULL).unwrap().speed, 3.0);
    }

    #[test]
    fn test_construction_failure_creates_nothing() {
        let mut config = uniform_config(1.0);
        config.zones[0].width_units = 11.25;
        let err = MiniGameSession::new(config, 10.0).unwrap_err();
        assert!(err.is_configuration());
        assert!(matches!(err, SkillCheckError::WidthMismatch { .. }));

        assert!(matches!(
            MiniGameSession::new(uniform_config(1.0), 0.0),
            Err(SkillCheckError::InvalidGoal(_))
        ));
    }

    #[test]
    fn test_start_session_records_difficulty_and_goal() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let session = start_session(FishingDifficulty::Apprentice, &mut rng).unwrap();
        assert_eq!(session.difficulty(), Some(FishingDifficulty::Apprentice));
        let pattern = session.pattern_index().unwrap();
        assert_eq!(
            session.config(),
            &FishingDifficulty::Apprentice.config(pattern)
        );
        assert_eq!(session.progress().goal(), 120.0);
        assert_eq!(session.config().speeds, FishingDifficulty::Apprentice.speeds());
    }
}
