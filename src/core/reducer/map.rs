use super::{CoreState, UiAction};
use crate::core::effects::CoreEffects;
use crate::features::map as map_handlers;
use crate::gateway::actor::GatewayEvent;
use crate::messages::app::AppCommand;

pub fn handle_ui(cmd: &AppCommand, state: &mut CoreState, effects: &mut CoreEffects) -> UiAction {
    match cmd {
        AppCommand::MapCursorNext => map_handlers::move_cursor(&mut state.app, true, effects),
        AppCommand::MapCursorPrev => map_handlers::move_cursor(&mut state.app, false, effects),
        AppCommand::MapCursorSet { region } => {
            map_handlers::set_cursor(&mut state.app, *region, effects)
        }
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
        GatewayEvent::RegionCounts { req_id, counts } => {
            map_handlers::handle_region_counts_event(
                *req_id,
                counts,
                &mut state.app,
                &mut state.requests,
                effects,
            );
            true
        }
        GatewayEvent::SampleDataReady { req_id, message } => {
            map_handlers::handle_sample_data_ready(
                *req_id,
                message,
                &mut state.app,
                &mut state.requests,
                effects,
            );
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::infra::RequestKey;
    use crate::domain::RegionId;

    #[tokio::test]
    async fn cursor_wraps_around_the_catalog() {
        let (mut state, _rx) = CoreState::for_test();
        let mut effects = CoreEffects::default();
        assert_eq!(state.app.map_cursor, RegionId::NorthAmerica);

        handle_ui(&AppCommand::MapCursorPrev, &mut state, &mut effects);
        assert_eq!(state.app.map_cursor, RegionId::SouthAmerica);
        handle_ui(&AppCommand::MapCursorNext, &mut state, &mut effects);
        assert_eq!(state.app.map_cursor, RegionId::NorthAmerica);
    }

    #[tokio::test]
    async fn sample_data_ready_refetches_counts() {
        let (mut state, _rx) = CoreState::for_test();
        let mut effects = CoreEffects::default();
        let req_id = state.requests.issue(RequestKey::InitData);

        let evt = GatewayEvent::SampleDataReady {
            req_id,
            message: "Sample data initialized successfully".to_owned(),
        };
        assert!(handle_gateway_event(&evt, &mut state, &mut effects));
        assert!(state.requests.is_pending(RequestKey::RegionCounts));
        assert!(state.app.loading);
    }
}
