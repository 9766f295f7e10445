use super::detail_view::draw_detail;
use super::footer::draw_footer;
use super::guide_view::draw_guide;
use super::header::draw_header;
use super::layout::split_canvas;
use super::map_view::draw_map;
use super::overlays::draw_help_overlay;
use crate::app::{AppSnapshot, AppViewSnapshot};
use ratatui::Frame;

pub(super) fn draw_ui(f: &mut Frame, app: &AppSnapshot) {
    let size = f.area();
    let canvas = split_canvas(size);

    draw_header(f, canvas.header, app);

    match &app.view_state {
        AppViewSnapshot::Map(state) => draw_map(f, canvas.body, state),
        AppViewSnapshot::Channels(state) => draw_guide(f, canvas.body, state),
        AppViewSnapshot::ChannelDetail(state) => draw_detail(f, canvas.body, state),
    }

    draw_footer(f, canvas.footer, app);

    if app.help_visible {
        draw_help_overlay(f, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn full_frame_shows_breadcrumb_status_and_help() {
        let mut app = App::default();
        app.loading = true;
        app.help_visible = true;
        let snapshot = AppSnapshot::from_app(&app);

        let backend = TestBackend::new(120, 36);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &snapshot)).unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(content.contains("Global TV"));
        assert!(content.contains("World"));
        assert!(content.contains("Loading"));
        assert!(content.contains(crate::app::MAP_HINT));
        assert!(content.contains("Help"));
    }
}
