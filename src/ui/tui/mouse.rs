use super::detail_view::back_hit;
use super::guide_view::row_at;
use super::layout::{contains, split_canvas};
use super::map_view::region_at;
use crate::app::{AppSnapshot, AppViewSnapshot};
use crate::messages::app::AppCommand;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

pub(super) async fn handle_mouse(
    app: &AppSnapshot,
    mouse: MouseEvent,
    screen: Rect,
    tx: &mpsc::Sender<AppCommand>,
) {
    if app.help_visible {
        return;
    }
    if let Some(cmd) = mouse_command(app, mouse, screen) {
        let _ = tx.send(cmd).await;
    }
}

fn mouse_command(app: &AppSnapshot, mouse: MouseEvent, screen: Rect) -> Option<AppCommand> {
    let body = split_canvas(screen).body;
    let (column, row) = (mouse.column, mouse.row);
    if !contains(body, column, row) {
        return None;
    }

    match (mouse.kind, &app.view_state) {
        (MouseEventKind::Down(MouseButton::Left), AppViewSnapshot::Map(state)) => {
            region_at(body, state, column, row).map(|region| AppCommand::SelectRegion { region })
        }
        (MouseEventKind::Down(MouseButton::Left), AppViewSnapshot::Channels(state)) => {
            let idx = row_at(body, state, column, row)?;
            let channel_id = state.rows.get(idx)?.channel.id.clone();
            Some(AppCommand::SelectChannel { channel_id })
        }
        (MouseEventKind::Down(MouseButton::Left), AppViewSnapshot::ChannelDetail(_)) => {
            back_hit(body, column, row).then_some(AppCommand::Back)
        }
        (MouseEventKind::ScrollUp, AppViewSnapshot::Map(_)) => Some(AppCommand::MapCursorPrev),
        (MouseEventKind::ScrollDown, AppViewSnapshot::Map(_)) => Some(AppCommand::MapCursorNext),
        (MouseEventKind::ScrollUp, AppViewSnapshot::Channels(_)) => Some(AppCommand::GuideMoveUp),
        (MouseEventKind::ScrollDown, AppViewSnapshot::Channels(_)) => {
            Some(AppCommand::GuideMoveDown)
        }
        (MouseEventKind::ScrollUp, AppViewSnapshot::ChannelDetail(_)) => {
            Some(AppCommand::DetailScrollUp)
        }
        (MouseEventKind::ScrollDown, AppViewSnapshot::ChannelDetail(_)) => {
            Some(AppCommand::DetailScrollDown)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{App, Navigation};
    use crate::domain::{ChannelId, RegionId};
    use crossterm::event::KeyModifiers;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn click_on_back_label_goes_back() {
        let app = App {
            nav: Navigation::ChannelDetail {
                region: RegionId::Africa,
                channel: ChannelId::new("af-1"),
            },
            ..App::default()
        };
        let snapshot = AppSnapshot::from_app(&app);
        let screen = Rect::new(0, 0, 120, 36);
        let body = split_canvas(screen).body;

        let cmd = mouse_command(&snapshot, click(body.x + 2, body.y + 1), screen);
        assert!(matches!(cmd, Some(AppCommand::Back)));
        assert!(mouse_command(&snapshot, click(0, 0), screen).is_none());
    }
}
