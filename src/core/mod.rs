//! Shared tunables.

pub mod constants;

pub use constants::*;
