//! Terminal rendering for the skill check.

pub mod fishing_scene;
pub mod panels;

pub use fishing_scene::{render_fishing_scene, SceneInfo};
