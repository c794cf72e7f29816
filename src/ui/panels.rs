//! Frame pieces around the zone bar: the bordered scene with its info pane,
//! the two-row status strip and the outcome card shown when an attempt ends.

use crate::fishing::SessionStatus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub const INFO_PANE_WIDTH: u16 = 24;

/// Rows the play area needs: spacer, three-row bar, spacer, gauge, spacer.
pub const PLAY_MIN_HEIGHT: u16 = 7;

/// Shown under the outcome card. Pull keys do not close it, see
/// `input::closes_result`.
pub const DISMISS_HINT: &str = "[Enter] Close";

/// Inner areas of the scene.
pub struct ScenePanes {
    pub play: Rect,
    pub status: Rect,
    /// Inside the info pane's own border.
    pub info: Rect,
}

/// Draw the scene border titled with the level label and split it.
///
/// ```text
/// ┌ Reel It In - Novice ───────────┬ Info ─────────┐
/// │ play                           │ info          │
/// │ status (2 rows)                │               │
/// └────────────────────────────────┴───────────────┘
/// ```
pub fn scene_panes(frame: &mut Frame, area: Rect, label: &str) -> ScenePanes {
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .title(format!(" Reel It In - {} ", label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_PANE_WIDTH)])
        .split(inner);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(PLAY_MIN_HEIGHT), Constraint::Length(2)])
        .split(columns[0]);

    let info_block = Block::default()
        .title(" Info ")
        .borders(Borders::LEFT | Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let info = info_block.inner(columns[1]);
    frame.render_widget(info_block, columns[1]);

    ScenePanes {
        play: left[0],
        status: left[1],
        info,
    }
}

/// What the status strip says for the current control state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    Reeling,
    Drifting,
    /// First Esc pressed; waiting for the second.
    ConfirmCut,
}

impl StatusLine {
    pub fn for_controls(pull_active: bool, forfeit_pending: bool) -> Self {
        if forfeit_pending {
            StatusLine::ConfirmCut
        } else if pull_active {
            StatusLine::Reeling
        } else {
            StatusLine::Drifting
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            StatusLine::Reeling => "Reeling!",
            StatusLine::Drifting => "Keep the fish in the green zone",
            StatusLine::ConfirmCut => "Cut the line?",
        }
    }

    pub fn color(self) -> Color {
        match self {
            StatusLine::Reeling => Color::Yellow,
            StatusLine::Drifting => Color::White,
            StatusLine::ConfirmCut => Color::Red,
        }
    }

    /// Key hints for this state, in the order `ReelControls` resolves them.
    pub fn hints(self) -> &'static [(&'static str, &'static str)] {
        match self {
            StatusLine::Reeling | StatusLine::Drifting => {
                &[("[Space]", "Pull"), ("[Esc]", "Cut line"), ("[Q]", "Quit")]
            }
            StatusLine::ConfirmCut => &[
                ("[Esc]", "Confirm"),
                ("[Q]", "Quit"),
                ("[Any]", "Keep reeling"),
            ],
        }
    }
}

/// Key hints joined into one line, keys bright and actions dim.
pub fn hint_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let separator = Span::styled(" │ ", Style::default().fg(Color::DarkGray));
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, &(key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(separator.clone());
        }
        spans.push(Span::styled(
            key,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

pub fn render_status_line(frame: &mut Frame, area: Rect, status: StatusLine) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let message = Paragraph::new(status.message())
        .style(Style::default().fg(status.color()))
        .alignment(Alignment::Center);
    frame.render_widget(message, rows[0]);
    frame.render_widget(
        Paragraph::new(hint_line(status.hints())).alignment(Alignment::Center),
        rows[1],
    );
}

/// Result card for a finished attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeCard {
    pub title: &'static str,
    pub message: &'static str,
    pub color: Color,
}

impl OutcomeCard {
    /// `None` while the attempt is still running.
    pub fn for_status(status: SessionStatus) -> Option<Self> {
        let (title, message, color) = match status {
            SessionStatus::Ongoing => return None,
            SessionStatus::Success => (
                "FISH LANDED!",
                "You reeled it all the way in.",
                Color::Green,
            ),
            SessionStatus::Failure => (
                "THE FISH GOT AWAY",
                "The line ran out the wrong way.",
                Color::Red,
            ),
            SessionStatus::Aborted => ("LINE CUT", "You let this one go.", Color::Gray),
        };
        Some(Self {
            title,
            message,
            color,
        })
    }

    /// Card body, top to bottom, with blank rows between entries.
    pub fn lines(&self, detail: &str) -> Vec<Line<'static>> {
        let entries = [
            Span::styled(
                self.title,
                Style::default().fg(self.color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.message, Style::default().fg(Color::White)),
            Span::styled(detail.to_string(), Style::default().fg(Color::Cyan)),
            Span::styled(DISMISS_HINT, Style::default().fg(Color::DarkGray)),
        ];
        let mut lines = Vec::with_capacity(entries.len() * 2 - 1);
        for (i, span) in entries.into_iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(span));
        }
        lines
    }
}

/// Replace the scene with the outcome card, vertically centered.
pub fn render_outcome(frame: &mut Frame, area: Rect, card: &OutcomeCard, detail: &str) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(card.color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = card.lines(detail);
    let height = (lines.len() as u16).min(inner.height);
    let top = inner.y + inner.height.saturating_sub(height) / 2;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect {
            y: top,
            height,
            ..inner
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ReelAction, ReelControls};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_status_line_prefers_pending_cut() {
        assert_eq!(StatusLine::for_controls(true, true), StatusLine::ConfirmCut);
        assert_eq!(StatusLine::for_controls(true, false), StatusLine::Reeling);
        assert_eq!(StatusLine::for_controls(false, false), StatusLine::Drifting);
    }

    #[test]
    fn test_confirm_hints_match_controls() {
        assert_eq!(
            text(&hint_line(StatusLine::ConfirmCut.hints())),
            "[Esc] Confirm │ [Q] Quit │ [Any] Keep reeling"
        );

        // Q quits rather than cancelling the pending cut
        let mut controls = ReelControls::new();
        controls.process(ReelAction::Forfeit);
        controls.process(ReelAction::Quit);
        assert!(controls.quit_requested());

        // Any other key keeps the attempt going
        let mut controls = ReelControls::new();
        controls.process(ReelAction::Forfeit);
        controls.process(ReelAction::Other);
        assert!(!controls.forfeit_pending);
        assert!(!controls.sample().abort_requested);

        // Esc confirms
        let mut controls = ReelControls::new();
        controls.process(ReelAction::Forfeit);
        controls.process(ReelAction::Forfeit);
        assert!(controls.sample().abort_requested);
    }

    #[test]
    fn test_play_hints() {
        assert_eq!(
            text(&hint_line(StatusLine::Drifting.hints())),
            "[Space] Pull │ [Esc] Cut line │ [Q] Quit"
        );
        assert!(hint_line(&[]).spans.is_empty());
    }

    #[test]
    fn test_outcome_card_per_status() {
        assert!(OutcomeCard::for_status(SessionStatus::Ongoing).is_none());

        let win = OutcomeCard::for_status(SessionStatus::Success).unwrap();
        let loss = OutcomeCard::for_status(SessionStatus::Failure).unwrap();
        let cut = OutcomeCard::for_status(SessionStatus::Aborted).unwrap();
        assert_eq!(win.color, Color::Green);
        assert_eq!(loss.color, Color::Red);
        assert_eq!(cut.title, "LINE CUT");
    }

    #[test]
    fn test_outcome_lines_end_with_dismiss_hint() {
        let card = OutcomeCard::for_status(SessionStatus::Success).unwrap();
        let lines = card.lines("Novice - 90 ticks (3.0s)");
        assert_eq!(lines.len(), 7);
        assert_eq!(text(&lines[0]), "FISH LANDED!");
        assert_eq!(text(&lines[4]), "Novice - 90 ticks (3.0s)");
        assert_eq!(text(&lines[6]), DISMISS_HINT);
        assert!(text(&lines[5]).is_empty());
    }
}
