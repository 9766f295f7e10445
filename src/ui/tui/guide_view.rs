use super::layout::{contains, inner};
use super::styles::{badge_style, dim, focus_style, progress_color};
use super::widgets::first_visible;
use crate::app::GuideSnapshot;
use crate::domain::{LiveGuideRow, NowPlaying, UpNext, region_info};
use crate::ui::format::{fmt_time_12h, fmt_time_range};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

/// Terminal rows per guide entry.
pub(super) const ROW_HEIGHT: u16 = 3;

pub(super) const NO_PROGRAM: &str = "No program information";

fn rows_fit(list_area: Rect) -> usize {
    usize::from(list_area.height / ROW_HEIGHT)
}

pub(super) fn draw_guide(f: &mut Frame, area: Rect, state: &GuideSnapshot) {
    let region = region_info(state.region);
    let updated = state
        .updated_at
        .map(|t| format!(" updated {} ", fmt_time_12h(Some(t))))
        .unwrap_or_default();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Live guide: {}", region.name))
        .title_bottom(Line::from(updated).right_aligned());
    let list_area = inner(area);
    f.render_widget(block, area);

    if state.rows.is_empty() {
        f.render_widget(
            Paragraph::new(Line::styled("No channels to show yet", dim())),
            list_area,
        );
        return;
    }

    let fit = rows_fit(list_area);
    let start = first_visible(state.selected, fit);
    for (slot, (idx, row)) in state.rows.iter().enumerate().skip(start).take(fit).enumerate() {
        let rect = Rect {
            x: list_area.x,
            y: list_area.y + slot as u16 * ROW_HEIGHT,
            width: list_area.width,
            height: ROW_HEIGHT,
        };
        draw_row(f, rect, row, idx == state.selected);
    }
}

fn draw_row(f: &mut Frame, area: Rect, row: &LiveGuideRow, selected: bool) {
    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let marker = if selected { "> " } else { "  " };
    let title = Line::from(vec![
        Span::styled(marker, focus_style(selected)),
        Span::styled(
            format!("{:>3} ", row.channel.number),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(row.channel.name.clone(), focus_style(selected)),
    ]);
    f.render_widget(Paragraph::new(title), lines[0]);

    match &row.current {
        Some(now) => draw_now_playing(f, lines[1], lines[2], now, row.next.as_ref()),
        None => {
            f.render_widget(
                Paragraph::new(Line::styled(format!("      {NO_PROGRAM}"), dim())),
                lines[1],
            );
            if let Some(next) = &row.next {
                f.render_widget(Paragraph::new(next_line(next)), lines[2]);
            }
        }
    }
}

fn draw_now_playing(
    f: &mut Frame,
    title_area: Rect,
    progress_area: Rect,
    now: &NowPlaying,
    next: Option<&UpNext>,
) {
    let kind = now.program.kind;
    let title = Line::from(vec![
        Span::raw("      "),
        Span::styled(format!(" {} ", kind.badge()), badge_style(kind)),
        Span::raw(" "),
        Span::styled(
            now.program.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", fmt_time_range(now.start_time, now.end_time)),
            dim(),
        ),
    ]);
    f.render_widget(Paragraph::new(title), title_area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(6),
            Constraint::Percentage(35),
            Constraint::Min(0),
        ])
        .split(progress_area);
    let pct = now.progress_percentage;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(progress_color(pct)))
        .ratio((pct / 100.0).clamp(0.0, 1.0))
        .label(format!("{pct:.0}%"));
    f.render_widget(gauge, cols[1]);

    let mut tail = vec![Span::raw(format!(
        "  {} min left",
        now.time_remaining_minutes
    ))];
    if let Some(next) = next {
        tail.push(Span::raw("   "));
        tail.extend(next_line(next).spans);
    }
    f.render_widget(Paragraph::new(Line::from(tail)), cols[2]);
}

fn next_line(next: &UpNext) -> Line<'static> {
    Line::from(vec![
        Span::styled("Next: ", dim()),
        Span::raw(next.program.title.clone()),
        Span::styled(format!(" at {}", fmt_time_12h(next.start_time)), dim()),
    ])
}

/// Index of the guide row under a click.
pub(super) fn row_at(area: Rect, state: &GuideSnapshot, column: u16, row: u16) -> Option<usize> {
    let list_area = inner(area);
    if !contains(list_area, column, row) {
        return None;
    }
    let fit = rows_fit(list_area);
    let slot = usize::from((row - list_area.y) / ROW_HEIGHT);
    if slot >= fit {
        return None;
    }
    let idx = first_visible(state.selected, fit) + slot;
    (idx < state.rows.len()).then_some(idx)
}
