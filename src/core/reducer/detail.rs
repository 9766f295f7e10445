use super::{CoreState, UiAction};
use crate::app::View;
use crate::core::effects::CoreEffects;
use crate::features::detail as detail_handlers;
use crate::gateway::actor::GatewayEvent;
use crate::messages::app::AppCommand;

pub fn handle_ui(cmd: &AppCommand, state: &mut CoreState, effects: &mut CoreEffects) -> UiAction {
    if state.app.view() != View::ChannelDetail {
        return UiAction::NotHandled;
    }
    match cmd {
        AppCommand::DetailScrollUp => detail_handlers::scroll(&mut state.app, false, effects),
        AppCommand::DetailScrollDown => detail_handlers::scroll(&mut state.app, true, effects),
        _ => return UiAction::NotHandled,
    }
    UiAction::Handled
}

pub fn handle_gateway_event(
    evt: &GatewayEvent,
    state: &mut CoreState,
    effects: &mut CoreEffects,
) -> bool {
    match evt {
        GatewayEvent::Schedule {
            req_id,
            channel_id,
            entries,
        } => {
            detail_handlers::handle_schedule_event(
                *req_id,
                channel_id,
                entries.clone(),
                &mut state.app,
                &mut state.requests,
                effects,
            );
            true
        }
        _ => false,
    }
}
