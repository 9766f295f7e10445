mod detail_view;
mod event_loop;
mod footer;
mod guide_view;
mod header;
mod keyboard;
mod layout;
mod map_view;
mod mouse;
mod overlays;
mod styles;
mod views;
mod widgets;

use crate::app::AppSnapshot;
use crate::messages::app::{AppCommand, AppEvent};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use std::io;
use std::sync::Once;
use tokio::sync::mpsc;

/// The alternate-screen terminal for one TUI run. The shell gets its screen
/// back when this drops, and also when the process panics.
struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    fn start() -> io::Result<Self> {
        install_panic_restore();
        let terminal = ratatui::try_init()?;
        if let Err(e) = execute!(io::stdout(), EnableMouseCapture) {
            ratatui::restore();
            return Err(e);
        }
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
}

fn install_panic_restore() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));
    });
}

/// Runs the interactive client until the user quits.
pub async fn run_tui(
    app: AppSnapshot,
    tx: mpsc::Sender<AppCommand>,
    rx: mpsc::Receiver<AppEvent>,
) -> io::Result<()> {
    event_loop::run_tui_internal(app, tx, rx).await
}
