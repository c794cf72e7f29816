//! Fishing skill-check scene rendering.
//!
//! Draws the zone bar with the cursor, the reel gauge and an info panel from
//! a `SkillCheckSnapshot`. Zone colors are a presentation concern and live
//! here rather than in the simulation.

use crate::core::constants::TICKS_PER_SECOND;
use crate::fishing::{SkillCheckSnapshot, ZoneKind};
use crate::ui::panels::{render_outcome, render_status_line, scene_panes, OutcomeCard, StatusLine};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

/// Frame-level state the renderer needs beyond the snapshot.
pub struct SceneInfo<'a> {
    /// Difficulty or config name shown in the title and info panel.
    pub label: &'a str,
    pub goal: f64,
    pub pull_active: bool,
    pub forfeit_pending: bool,
}

/// Bar color for a zone label (the prototype's red / yellow / green).
pub fn zone_color(kind: ZoneKind) -> Color {
    match kind {
        ZoneKind::Slow => Color::Red,
        ZoneKind::Medium => Color::Yellow,
        ZoneKind::Fast => Color::Green,
    }
}

/// One terminal column of the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarCell {
    pub zone: Option<ZoneKind>,
    pub cursor: bool,
}

/// Sample the bar into `columns` cells. Each column shows the zone under its
/// midpoint and whether it overlaps the cursor.
pub fn bar_cells(snapshot: &SkillCheckSnapshot, columns: usize) -> Vec<BarCell> {
    let (Some(first), Some(last)) = (snapshot.zone_layout.first(), snapshot.zone_layout.last())
    else {
        return Vec::new();
    };
    if columns == 0 {
        return Vec::new();
    }

    let min = first.xmin;
    let col_width = (last.xmax - min) / columns as f64;
    let cursor_size = 2.0 * (snapshot.cursor_center_x - snapshot.cursor_left_x);
    let cursor_right = snapshot.cursor_left_x + cursor_size;

    (0..columns)
        .map(|col| {
            let x0 = min + col as f64 * col_width;
            let x1 = x0 + col_width;
            let mid = (x0 + x1) / 2.0;
            BarCell {
                zone: snapshot
                    .zone_layout
                    .iter()
                    .find(|span| span.contains(mid))
                    .map(|span| span.label),
                cursor: x0 < cursor_right && x1 > snapshot.cursor_left_x,
            }
        })
        .collect()
}

/// Renders the skill-check scene.
///
/// # Layout
/// ```text
/// ┌─ Reel It In - Novice ────────────────┬─ Info ─────┐
/// │                                      │            │
/// │  ████████▓▓▓▓◆◆▓▓▓▓▓▓▓▓████████      │ Speed      │
/// │                                      │ Zone       │
/// │  [=========         ] 42%            │            │
/// │ status / controls                    │            │
/// └──────────────────────────────────────┴────────────┘
/// ```
pub fn render_fishing_scene(
    frame: &mut Frame,
    area: Rect,
    snapshot: &SkillCheckSnapshot,
    info: &SceneInfo,
) {
    if let Some(card) = OutcomeCard::for_status(snapshot.status) {
        render_outcome(frame, area, &card, &result_detail(snapshot, info));
        return;
    }

    let panes = scene_panes(frame, area, info.label);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // spacer
            Constraint::Length(3), // zone bar
            Constraint::Length(1), // spacer
            Constraint::Length(1), // reel gauge
            Constraint::Min(0),
        ])
        .split(panes.play);

    draw_bar(frame, rows[1], snapshot);
    draw_reel_gauge(frame, rows[3], snapshot);
    render_status_line(
        frame,
        panes.status,
        StatusLine::for_controls(info.pull_active, info.forfeit_pending),
    );
    draw_info_panel(frame, panes.info, snapshot, info);
}

fn draw_bar(frame: &mut Frame, area: Rect, snapshot: &SkillCheckSnapshot) {
    let width = area.width.saturating_sub(2) as usize;
    let cells = bar_cells(snapshot, width);

    let mut spans = Vec::with_capacity(cells.len());
    for cell in &cells {
        let bg = cell.zone.map(zone_color).unwrap_or(Color::Reset);
        let span = if cell.cursor {
            Span::styled(
                "◆",
                Style::default()
                    .fg(Color::White)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(" ", Style::default().bg(bg))
        };
        spans.push(span);
    }

    let edge = |c: &'static str| Span::styled(c, Style::default().fg(Color::DarkGray));
    let mut middle = vec![edge("▕")];
    middle.extend(spans);
    middle.push(edge("▏"));

    let top_line = "▁".repeat(width);
    let bottom_line = "▔".repeat(width);
    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", top_line),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(middle),
        Line::from(Span::styled(
            format!(" {} ", bottom_line),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_reel_gauge(frame: &mut Frame, area: Rect, snapshot: &SkillCheckSnapshot) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(snapshot.progress_fraction.clamp(0.0, 1.0))
        .label(format!("{:.0}%", snapshot.progress_fraction * 100.0));
    frame.render_widget(gauge, area);
}

fn draw_info_panel(
    frame: &mut Frame,
    area: Rect,
    snapshot: &SkillCheckSnapshot,
    info: &SceneInfo,
) {
    let zone = snapshot
        .zone_layout
        .iter()
        .find(|span| span.contains(snapshot.cursor_center_x))
        .map(|span| span.label);
    let (zone_name, zone_fg) = match zone {
        Some(kind) => (kind.name(), zone_color(kind)),
        None => ("edge", Color::DarkGray),
    };

    let label =
        |text: &str| Span::styled(format!("{:<9}", text), Style::default().fg(Color::DarkGray));
    let lines = vec![
        Line::from(vec![label("Level"), Span::raw(info.label.to_string())]),
        Line::from(vec![
            label("Zone"),
            Span::styled(zone_name, Style::default().fg(zone_fg).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![label("Speed"), Span::raw(format!("{}", snapshot.speed))]),
        Line::from(vec![
            label("Reeled"),
            Span::raw(format!(
                "{:.0}/{:.0}",
                snapshot.progress_fraction * info.goal,
                info.goal
            )),
        ]),
        Line::from(vec![label("Tick"), Span::raw(snapshot.tick.to_string())]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", Style::default().bg(zone_color(ZoneKind::Fast))),
            Span::raw(" fast  "),
        ]),
        Line::from(vec![
            Span::styled("  ", Style::default().bg(zone_color(ZoneKind::Medium))),
            Span::raw(" medium"),
        ]),
        Line::from(vec![
            Span::styled("  ", Style::default().bg(zone_color(ZoneKind::Slow))),
            Span::raw(" slow  "),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), area);
}

/// Level, ticks and wall time at the tick rate, for the outcome card.
fn result_detail(snapshot: &SkillCheckSnapshot, info: &SceneInfo) -> String {
    format!(
        "{} - {} ticks ({:.1}s)",
        info.label,
        snapshot.tick,
        snapshot.tick as f64 / TICKS_PER_SECOND as f64
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fishing::{FishingDifficulty, MiniGameSession};

    fn snapshot() -> SkillCheckSnapshot {
        MiniGameSession::new(FishingDifficulty::Novice.config(0), 100.0)
            .unwrap()
            .snapshot()
    }

    #[test]
    fn test_zone_colors_are_distinct() {
        let colors: Vec<Color> = ZoneKind::ALL.iter().map(|&k| zone_color(k)).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn test_one_cell_per_tile() {
        // 12 columns over a 12-tile bar: one column per tile
        let cells = bar_cells(&snapshot(), 12);
        let zones: Vec<ZoneKind> = cells.iter().filter_map(|c| c.zone).collect();
        assert_eq!(zones.len(), 12);
        assert_eq!(zones[0], ZoneKind::Slow);
        assert_eq!(zones[1], ZoneKind::Medium);
        assert_eq!(zones[3], ZoneKind::Fast);
        assert_eq!(zones[11], ZoneKind::Slow);
    }

    #[test]
    fn test_cursor_marks_covered_columns() {
        // Cursor spans 116..124; with 96 columns each column is one unit
        let cells = bar_cells(&snapshot(), 96);
        let covered: Vec<usize> = cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.cursor)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(covered, (44..52).collect::<Vec<_>>());
    }

    #[test]
    fn test_result_detail_reports_seconds() {
        let mut snap = snapshot();
        snap.tick = 45;
        let info = SceneInfo {
            label: "Master",
            goal: 200.0,
            pull_active: false,
            forfeit_pending: false,
        };
        assert_eq!(result_detail(&snap, &info), "Master - 45 ticks (1.5s)");
    }

    #[test]
    fn test_empty_layout_has_no_cells() {
        let mut snap = snapshot();
        snap.zone_layout.clear();
        assert!(bar_cells(&snap, 40).is_empty());
        assert!(bar_cells(&snapshot(), 0).is_empty());
    }
}
