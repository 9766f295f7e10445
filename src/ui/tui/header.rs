use super::styles::dim;
use crate::app::AppSnapshot;
use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub(super) fn draw_header(f: &mut Frame, area: Rect, app: &AppSnapshot) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            "Global TV",
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(26)])
        .split(inner);

    f.render_widget(Paragraph::new(app.breadcrumb()), cols[0]);

    let mut right = Vec::new();
    if app.loading {
        right.push(Span::styled("Loading… ", Style::default().fg(Color::Yellow)));
    }
    right.push(Span::styled(
        Local::now().format("%-I:%M:%S %p").to_string(),
        dim(),
    ));
    f.render_widget(Paragraph::new(Line::from(right).right_aligned()), cols[1]);
}
