//! Keyboard input for the skill-check screen.
//!
//! Terminals only report key presses, not releases, so a held pull is
//! emulated: each press keeps the pull active for `PULL_HOLD_TICKS` ticks and
//! terminal key-repeat refreshes it while the key stays down.

use crate::core::constants::PULL_HOLD_TICKS;
use crate::fishing::ReelInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReelAction {
    Pull,    // Space / Up / Right
    Forfeit, // Esc
    Quit,    // q / Ctrl+C
    Other,   // Any other key (cancels forfeit_pending)
}

/// Map a terminal key event to an action. Release events map to `None`.
pub fn map_key(key: KeyEvent) -> Option<ReelAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => ReelAction::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Right => ReelAction::Pull,
        KeyCode::Esc => ReelAction::Forfeit,
        KeyCode::Char('q') | KeyCode::Char('Q') => ReelAction::Quit,
        _ => ReelAction::Other,
    };
    Some(action)
}

/// Whether a key closes the result screen. Repeats and pull keys are ignored
/// so a pull still held when the fish lands does not skip the result; many
/// terminals report key-repeat as fresh presses.
pub fn closes_result(key: KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && matches!(
            map_key(key),
            Some(ReelAction::Forfeit | ReelAction::Quit | ReelAction::Other)
        )
}

/// Turns key presses into one `ReelInput` per tick.
#[derive(Debug, Clone, Default)]
pub struct ReelControls {
    pull_hold_ticks: u32,
    /// First Esc arms the forfeit, the second confirms it.
    pub forfeit_pending: bool,
    abort_confirmed: bool,
    quit: bool,
}

impl ReelControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process(&mut self, action: ReelAction) {
        match action {
            ReelAction::Pull => {
                if self.forfeit_pending {
                    self.forfeit_pending = false;
                } else {
                    self.pull_hold_ticks = PULL_HOLD_TICKS;
                }
            }
            ReelAction::Forfeit => {
                if self.forfeit_pending {
                    self.forfeit_pending = false;
                    self.abort_confirmed = true;
                } else {
                    self.forfeit_pending = true;
                }
            }
            ReelAction::Quit => self.quit = true,
            ReelAction::Other => self.forfeit_pending = false,
        }
    }

    /// Input for the next tick. Consumes one tick of held pull; a confirmed
    /// forfeit is sent once.
    pub fn sample(&mut self) -> ReelInput {
        let pull_active = self.pull_hold_ticks > 0;
        self.pull_hold_ticks = self.pull_hold_ticks.saturating_sub(1);
        ReelInput {
            pull_active,
            abort_requested: std::mem::take(&mut self.abort_confirmed),
        }
    }

    pub fn pull_active(&self) -> bool {
        self.pull_hold_ticks > 0
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}
