use super::TerminalSession;
use super::keyboard::handle_key;
use super::mouse::handle_mouse;
use super::views::draw_ui;
use crate::app::AppSnapshot;
use crate::messages::app::{AppCommand, AppEvent};
use crossterm::event::{self, Event};
use ratatui::layout::Rect;
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

pub(super) async fn run_tui_internal(
    mut app: AppSnapshot,
    tx: mpsc::Sender<AppCommand>,
    mut rx: mpsc::Receiver<AppEvent>,
) -> io::Result<()> {
    let mut session = TerminalSession::start()?;
    let terminal = &mut session.terminal;

    let _ = tx.send(AppCommand::Bootstrap).await;

    // Also drives the header clock.
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(evt) = rx.try_recv() {
            match evt {
                AppEvent::State(s) => app = *s,
            }
        }

        terminal.draw(|f| draw_ui(f, &app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key(&app, key, &tx).await {
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    handle_mouse(&app, mouse, area, &tx).await;
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    Ok(())
}
