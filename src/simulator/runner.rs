//! Simulation runner driving real skill-check sessions with scripted anglers.

use super::config::{AnglerStrategy, SimConfig};
use super::report::{RunStats, SimReport};
use crate::fishing::{start_session, FishingDifficulty, MiniGameSession, ReelInput, SkillCheckError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run every configured difficulty and return one report each.
pub fn run_simulation(config: &SimConfig) -> Result<Vec<SimReport>, SkillCheckError> {
    config
        .difficulties
        .iter()
        .map(|&difficulty| run_difficulty(config, difficulty))
        .collect()
}

/// Run `config.num_runs` attempts at one difficulty.
pub fn run_difficulty(
    config: &SimConfig,
    difficulty: FishingDifficulty,
) -> Result<SimReport, SkillCheckError> {
    let mut runs = Vec::with_capacity(config.num_runs as usize);
    let difficulty_offset = (difficulty as u64) << 32;

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let mut rng = match config.seed {
            Some(seed) => {
                ChaCha8Rng::seed_from_u64(seed.wrapping_add(difficulty_offset + run_idx as u64))
            }
            None => ChaCha8Rng::from_entropy(),
        };

        let stats =
            simulate_single_run(difficulty, config.strategy, config.max_ticks_per_run, &mut rng)?;

        if config.prints_runs() {
            println!(
                "{} run {}/{} - pattern {}, {:?} after {} ticks",
                difficulty.name(),
                run_idx + 1,
                config.num_runs,
                stats.pattern,
                stats.status,
                stats.ticks
            );
        }
        runs.push(stats);
    }

    Ok(SimReport::from_runs(difficulty, config.strategy.name(), runs))
}

/// Play one attempt to completion. The angler aborts once `max_ticks` have
/// passed without a result.
pub fn simulate_single_run<R: Rng>(
    difficulty: FishingDifficulty,
    strategy: AnglerStrategy,
    max_ticks: u64,
    rng: &mut R,
) -> Result<RunStats, SkillCheckError> {
    let mut session = start_session(difficulty, rng)?;
    let target = fastest_zone_center(&session);
    let mut pull = false;

    while !session.is_finished() {
        pull = decide_pull(&session, strategy, target, pull, rng);
        let input = ReelInput {
            pull_active: pull,
            abort_requested: session.tick_count() >= max_ticks,
        };
        session.tick(input)?;
    }

    Ok(RunStats {
        difficulty,
        pattern: session.pattern_index().unwrap_or(0),
        status: session.status(),
        ticks: session.tick_count(),
    })
}

fn decide_pull<R: Rng>(
    session: &MiniGameSession,
    strategy: AnglerStrategy,
    target: f64,
    previous: bool,
    rng: &mut R,
) -> bool {
    match strategy {
        AnglerStrategy::Idle => false,
        AnglerStrategy::Hold => true,
        AnglerStrategy::Tracker { miss_chance } => {
            if rng.gen::<f64>() < miss_chance {
                return previous;
            }
            // Lead the cursor by a few ticks of travel so it settles instead
            // of overshooting the target.
            let cursor = session.cursor();
            cursor.center() + cursor.velocity() * 4.0 < target
        }
    }
}

/// Middle of the first zone with the highest speed.
fn fastest_zone_center(session: &MiniGameSession) -> f64 {
    let mut best: Option<(f64, f64)> = None;
    for span in session.zones().layout() {
        if best.map_or(true, |(speed, _)| span.speed > speed) {
            best = Some((span.speed, (span.xmin + span.xmax) / 2.0));
        }
    }
    best.map(|(_, x)| x).unwrap_or_else(|| session.cursor().center())
}
