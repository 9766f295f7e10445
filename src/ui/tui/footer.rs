use super::styles::dim;
use crate::app::{AppSnapshot, View};
use ratatui::{
    Frame,
    prelude::Rect,
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
};

fn key_hints(view: View) -> &'static str {
    match view {
        View::Map => "←/→ move  1-6 jump  Enter open  r refresh  ? help  q quit",
        View::Channels => "↑/↓ select  Enter schedule  1-6 region  Esc back  r refresh  q quit",
        View::ChannelDetail => "↑/↓ scroll  Esc/b back  r refresh  ? help  q quit",
    }
}

pub(super) fn draw_footer(f: &mut Frame, area: Rect, app: &AppSnapshot) {
    let text = Text::from(vec![
        Line::raw(app.status.clone()),
        Line::styled(key_hints(app.view()), dim()),
    ]);
    f.render_widget(
        Paragraph::new(text).block(Block::default().borders(Borders::ALL)),
        area,
    );
}
