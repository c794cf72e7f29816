//! Fishing skill check: types, zone layout, cursor physics, progress and the
//! session that ties them together.

/// Generate the standard `ALL`, `from_index()`, and `name()` methods shared by
/// four-variant difficulty enums (Novice / Apprentice / Journeyman / Master).
macro_rules! difficulty_enum_impl {
    ($name:ident) => {
        impl $name {
            pub const ALL: [$name; 4] = [
                $name::Novice,
                $name::Apprentice,
                $name::Journeyman,
                $name::Master,
            ];

            pub fn from_index(index: usize) -> Self {
                Self::ALL.get(index).copied().unwrap_or($name::Novice)
            }

            pub fn name(&self) -> &'static str {
                match self {
                    Self::Novice => "Novice",
                    Self::Apprentice => "Apprentice",
                    Self::Journeyman => "Journeyman",
                    Self::Master => "Master",
                }
            }

            /// Case-insensitive lookup by name.
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|d| d.name().eq_ignore_ascii_case(name))
            }
        }
    };
}

pub mod cursor;
pub mod error;
pub mod generation;
pub mod logic;
pub mod progress;
pub mod types;
pub mod zones;

pub use cursor::CursorBody;
pub use error::SkillCheckError;
pub use generation::{generate_config, roll_pattern_index};
pub use logic::{start_session, MiniGameSession};
pub use progress::ProgressTracker;
pub use types::*;
pub use zones::ZoneTable;
