use ratatui::{
    Frame,
    prelude::Rect,
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub(super) fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(4).min(64);
    let height = area.height.saturating_sub(4).min(18);
    let popup = centered_rect(area, width, height);

    f.render_widget(Clear, popup);

    let lines = vec![
        Line::from("Map"),
        Line::from("  ←/→ or j/k: Move between regions"),
        Line::from("  1-6: Open a region directly"),
        Line::from("  Enter / click: Open the live guide"),
        Line::from(""),
        Line::from("Live guide"),
        Line::from("  ↑/↓: Select channel, Enter / click: Schedule"),
        Line::from("  Refreshes on its own while open"),
        Line::from(""),
        Line::from("Everywhere"),
        Line::from("  Esc / b / Backspace: Back"),
        Line::from("  r: Refresh  ?: Toggle help  q: Quit"),
    ];
    let help = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: false });
    f.render_widget(help, popup);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}
