use super::{CoreState, UiAction};
use crate::core::effects::CoreEffects;
use crate::messages::app::AppCommand;

pub fn handle_ui(cmd: &AppCommand, state: &mut CoreState, effects: &mut CoreEffects) -> UiAction {
    match cmd {
        AppCommand::UiToggleHelp => {
            state.app.help_visible = !state.app.help_visible;
            effects.emit_state(&state.app);
            UiAction::Handled
        }
        AppCommand::Quit => {
            state.refresh.stop();
            UiAction::Quit
        }
        _ => UiAction::NotHandled,
    }
}
