use super::{CoreState, UiAction};
use crate::app::View;
use crate::core::effects::CoreEffects;
use crate::features::guide as guide_handlers;
use crate::features::navigation as nav_handlers;
use crate::gateway::actor::GatewayEvent;
use crate::messages::app::AppCommand;

pub fn handle_ui(cmd: &AppCommand, state: &mut CoreState, effects: &mut CoreEffects) -> UiAction {
    if state.app.view() != View::Channels {
        return UiAction::NotHandled;
    }
    match cmd {
        AppCommand::GuideMoveUp => guide_handlers::move_selection(&mut state.app, false, effects),
        AppCommand::GuideMoveDown => guide_handlers::move_selection(&mut state.app, true, effects),
        AppCommand::GuideOpenSelected => {
            let Some(channel_id) = guide_handlers::selected_channel_id(&state.app) else {
                return UiAction::Handled;
            };
            nav_handlers::select_channel(
                &channel_id,
                state.schedule_hours,
                &mut state.app,
                &mut state.requests,
                &mut state.refresh,
                effects,
            );
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
        GatewayEvent::Channels {
            req_id,
            region,
            channels,
        } => {
            guide_handlers::handle_channels_event(
                *req_id,
                *region,
                channels.clone(),
                &mut state.app,
                &mut state.requests,
                effects,
            );
            true
        }
        GatewayEvent::LiveGuide {
            req_id,
            region,
            rows,
        } => {
            guide_handlers::handle_live_guide_event(
                *req_id,
                *region,
                rows.clone(),
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
    use crate::domain::{Channel, ChannelId, LiveGuideRow, RegionId};

    fn row(id: &str) -> LiveGuideRow {
        LiveGuideRow {
            channel: Channel {
                id: ChannelId::new(id),
                number: 7,
                name: format!("Channel {id}"),
                description: String::new(),
                region: RegionId::Europe,
                language: Some("English".to_owned()),
                timezone: Some("Europe/Paris".to_owned()),
                logo_url: None,
            },
            current: None,
            next: None,
        }
    }

    #[tokio::test]
    async fn open_selected_uses_the_highlighted_row() {
        let (mut state, _rx) = CoreState::for_test();
        let mut effects = CoreEffects::default();
        nav_handlers::select_region(
            RegionId::Europe,
            &mut state.app,
            &mut state.requests,
            &mut state.refresh,
            &mut effects,
        );
        state.app.guide = vec![row("a"), row("b")];
        state.app.channels = state.app.guide.iter().map(|r| r.channel.clone()).collect();

        handle_ui(&AppCommand::GuideMoveDown, &mut state, &mut effects);
        handle_ui(&AppCommand::GuideMoveDown, &mut state, &mut effects);
        assert_eq!(state.app.guide_selected, 1);

        handle_ui(&AppCommand::GuideOpenSelected, &mut state, &mut effects);
        assert_eq!(
            state.app.nav.selected_channel().map(ChannelId::as_str),
            Some("b")
        );
    }

    #[tokio::test]
    async fn guide_keys_ignored_outside_the_guide() {
        let (mut state, _rx) = CoreState::for_test();
        let mut effects = CoreEffects::default();
        let outcome = handle_ui(&AppCommand::GuideMoveDown, &mut state, &mut effects);
        assert!(matches!(outcome, UiAction::NotHandled));
    }
}
