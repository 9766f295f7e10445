use crate::app::{AppSnapshot, AppViewSnapshot};
use crate::domain::RegionId;
use crate::messages::app::AppCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

/// Maps a key press to a command. Returns true when the user asked to quit.
pub(super) async fn handle_key(
    app: &AppSnapshot,
    key: KeyEvent,
    tx: &mpsc::Sender<AppCommand>,
) -> bool {
    // Some terminals/platforms may report both press and release events; we only act on press/repeat.
    if matches!(key.kind, KeyEventKind::Release) {
        return false;
    }

    if app.help_visible {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            let _ = tx.send(AppCommand::UiToggleHelp).await;
        }
        return false;
    }

    let cmd = match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => {
            let _ = tx.send(AppCommand::Quit).await;
            return true;
        }
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
            let _ = tx.send(AppCommand::Quit).await;
            return true;
        }
        (KeyCode::Char('?'), _) => AppCommand::UiToggleHelp,
        (KeyCode::Char('r'), _) => AppCommand::Refresh,
        (KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b'), _) => AppCommand::Back,
        (code, _) => match view_command(app, code) {
            Some(cmd) => cmd,
            None => return false,
        },
    };
    let _ = tx.send(cmd).await;
    false
}

fn view_command(app: &AppSnapshot, code: KeyCode) -> Option<AppCommand> {
    let region_key = match code {
        KeyCode::Char(c @ '1'..='6') => {
            let idx = c as usize - '1' as usize;
            RegionId::ALL.get(idx).copied()
        }
        _ => None,
    };

    match &app.view_state {
        AppViewSnapshot::Map(map) => {
            if let Some(region) = region_key {
                return Some(AppCommand::SelectRegion { region });
            }
            match code {
                KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k') => {
                    Some(AppCommand::MapCursorPrev)
                }
                KeyCode::Right | KeyCode::Down | KeyCode::Char('l' | 'j') => {
                    Some(AppCommand::MapCursorNext)
                }
                KeyCode::Enter => Some(AppCommand::SelectRegion { region: map.cursor }),
                _ => None,
            }
        }
        AppViewSnapshot::Channels(_) => {
            if let Some(region) = region_key {
                return Some(AppCommand::SelectRegion { region });
            }
            match code {
                KeyCode::Up | KeyCode::Char('k') => Some(AppCommand::GuideMoveUp),
                KeyCode::Down | KeyCode::Char('j') => Some(AppCommand::GuideMoveDown),
                KeyCode::Enter => Some(AppCommand::GuideOpenSelected),
                _ => None,
            }
        }
        AppViewSnapshot::ChannelDetail(_) => match code {
            KeyCode::Up | KeyCode::Char('k') => Some(AppCommand::DetailScrollUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppCommand::DetailScrollDown),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{App, Navigation};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn press(app: &App, code: KeyCode) -> (bool, Option<AppCommand>) {
        let (tx, mut rx) = mpsc::channel(4);
        let snapshot = AppSnapshot::from_app(app);
        let quit = handle_key(&snapshot, key(code), &tx).await;
        (quit, rx.try_recv().ok())
    }

    #[tokio::test]
    async fn digits_select_regions_on_the_map() {
        let app = App::default();
        let (_, cmd) = press(&app, KeyCode::Char('2')).await;
        assert!(matches!(
            cmd,
            Some(AppCommand::SelectRegion {
                region: RegionId::Europe
            })
        ));

        let (_, cmd) = press(&app, KeyCode::Enter).await;
        assert!(matches!(
            cmd,
            Some(AppCommand::SelectRegion {
                region: RegionId::NorthAmerica
            })
        ));
    }

    #[tokio::test]
    async fn enter_on_guide_opens_selected_channel() {
        let app = App {
            nav: Navigation::Channels {
                region: RegionId::Asia,
            },
            ..App::default()
        };
        let (_, cmd) = press(&app, KeyCode::Enter).await;
        assert!(matches!(cmd, Some(AppCommand::GuideOpenSelected)));
        let (_, cmd) = press(&app, KeyCode::Esc).await;
        assert!(matches!(cmd, Some(AppCommand::Back)));
    }

    #[tokio::test]
    async fn q_quits_and_help_swallows_keys() {
        let app = App::default();
        let (quit, cmd) = press(&app, KeyCode::Char('q')).await;
        assert!(quit);
        assert!(matches!(cmd, Some(AppCommand::Quit)));

        let app = App {
            help_visible: true,
            ..App::default()
        };
        let (quit, cmd) = press(&app, KeyCode::Char('q')).await;
        assert!(!quit);
        assert!(cmd.is_none());
    }
}
