//! Skill-check balance simulator.
//!
//! Plays many seeded attempts per difficulty with a scripted angler to check:
//! - How often each difficulty is won
//! - How long a win takes
//! - Whether a lazy strategy can still land the fish
//!
//! Sessions are driven through `MiniGameSession::tick`, so results match what
//! the terminal game does frame by frame.

mod config;
mod report;
mod runner;

pub use config::{AnglerStrategy, SimConfig};
pub use report::{RunStats, SimReport};
pub use runner::{run_difficulty, run_simulation, simulate_single_run};
