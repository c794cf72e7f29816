//! Angler - fishing skill-check minigame library
//!
//! The simulation core lives in `fishing`; `ui` and `input` are the terminal
//! front-end used by the `angler` binary, and `simulator` drives sessions
//! headless for balance checks.

pub mod build_info;
pub mod core;
pub mod fishing;
pub mod input;
pub mod simulator;
pub mod ui;

pub use fishing::{
    start_session, DifficultyConfig, FishingDifficulty, MiniGameSession, ReelInput,
    SessionStatus, SkillCheckError, SkillCheckSnapshot,
};
