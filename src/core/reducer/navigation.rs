use super::{CoreState, UiAction};
use crate::core::effects::CoreEffects;
use crate::core::infra::RequestKey;
use crate::features::emit;
use crate::features::navigation as nav_handlers;
use crate::gateway::actor::{GatewayEvent, GatewayOp};
use crate::messages::app::AppCommand;

pub fn handle_ui(cmd: &AppCommand, state: &mut CoreState, effects: &mut CoreEffects) -> UiAction {
    match cmd {
        AppCommand::Bootstrap => {
            if state.bootstrapped {
                tracing::trace!("bootstrap already done");
                return UiAction::Handled;
            }
            state.bootstrapped = true;
            nav_handlers::bootstrap(&mut state.app, &mut state.requests, effects);
        }
        AppCommand::SelectRegion { region } => nav_handlers::select_region(
            *region,
            &mut state.app,
            &mut state.requests,
            &mut state.refresh,
            effects,
        ),
        AppCommand::SelectChannel { channel_id } => nav_handlers::select_channel(
            channel_id,
            state.schedule_hours,
            &mut state.app,
            &mut state.requests,
            &mut state.refresh,
            effects,
        ),
        AppCommand::Back => nav_handlers::back(
            &mut state.app,
            &mut state.requests,
            &mut state.refresh,
            effects,
        ),
        AppCommand::Refresh => nav_handlers::refresh_current(
            state.schedule_hours,
            &mut state.app,
            &mut state.requests,
            effects,
        ),
        _ => return UiAction::NotHandled,
    }
    UiAction::Handled
}

pub fn handle_tick(generation: u64, state: &mut CoreState, effects: &mut CoreEffects) {
    nav_handlers::handle_guide_tick(
        generation,
        &mut state.app,
        &mut state.requests,
        &mut state.refresh,
        effects,
    );
}

/// Failures of any endpoint. The affected view keeps what it had.
pub fn handle_gateway_event(evt: &GatewayEvent, state: &mut CoreState, effects: &mut CoreEffects) {
    let GatewayEvent::Error {
        req_id,
        op,
        message,
    } = evt
    else {
        return;
    };

    let current = state.requests.settle(RequestKey::from(*op), *req_id);
    if current {
        match op {
            GatewayOp::InitData => {
                tracing::warn!(req_id, err = %message, "sample data init failed");
            }
            _ => {
                tracing::debug!(req_id, ?op, err = %message, "request failed");
                state.app.status = format!("Could not load {}: {message}", op_label(*op));
            }
        }
    }
    emit(&mut state.app, &state.requests, effects);
}

fn op_label(op: GatewayOp) -> &'static str {
    match op {
        GatewayOp::InitData => "sample data",
        GatewayOp::RegionCounts => "region counts",
        GatewayOp::Channels => "channels",
        GatewayOp::LiveGuide => "live guide",
        GatewayOp::Schedule => "schedule",
    }
}
