//! Screen transitions and the fetches each one triggers.

use super::emit;
use crate::app::{DETAIL_HINT, GUIDE_HINT, MAP_HINT};
use crate::core::prelude::{
    App, CoreEffects, GatewayCommand, GuideRefreshTimer, Navigation, RequestKey, Requests,
};
use crate::domain::{ChannelId, RegionId};

pub fn fetch_region_counts(requests: &mut Requests, effects: &mut CoreEffects) {
    let req_id = requests.issue_loading(RequestKey::RegionCounts);
    effects.send_gateway_warn(
        GatewayCommand::RegionCounts { req_id },
        "gateway channel closed: RegionCounts not sent",
    );
}

pub fn fetch_channels(region: RegionId, requests: &mut Requests, effects: &mut CoreEffects) {
    let req_id = requests.issue_loading(RequestKey::Channels);
    effects.send_gateway_warn(
        GatewayCommand::Channels { req_id, region },
        "gateway channel closed: Channels not sent",
    );
}

pub fn fetch_live_guide(region: RegionId, requests: &mut Requests, effects: &mut CoreEffects) {
    let req_id = requests.issue_loading(RequestKey::LiveGuide);
    effects.send_gateway_warn(
        GatewayCommand::LiveGuide { req_id, region },
        "gateway channel closed: LiveGuide not sent",
    );
}

pub fn fetch_schedule(
    channel_id: ChannelId,
    hours: u32,
    requests: &mut Requests,
    effects: &mut CoreEffects,
) {
    let req_id = requests.issue_loading(RequestKey::Schedule);
    effects.send_gateway_warn(
        GatewayCommand::Schedule {
            req_id,
            channel_id,
            hours,
        },
        "gateway channel closed: Schedule not sent",
    );
}

/// Seeds the backend (fire-and-forget) and loads the map counts.
pub fn bootstrap(app: &mut App, requests: &mut Requests, effects: &mut CoreEffects) {
    let req_id = requests.issue(RequestKey::InitData);
    effects.send_gateway_warn(
        GatewayCommand::InitSampleData { req_id },
        "gateway channel closed: InitSampleData not sent",
    );
    fetch_region_counts(requests, effects);
    emit(app, requests, effects);
}

/// Opens the live guide of `region`.
///
/// Accepted from the map and from the guide itself, where it replaces the
/// current region. Cached channel and guide data of the previous region is
/// dropped and any in-flight fetch for it becomes stale.
pub fn select_region(
    region: RegionId,
    app: &mut App,
    requests: &mut Requests,
    refresh: &mut GuideRefreshTimer,
    effects: &mut CoreEffects,
) {
    if matches!(app.nav, Navigation::ChannelDetail { .. }) {
        tracing::trace!(%region, "region selection ignored in channel detail");
        return;
    }

    tracing::info!(%region, "region selected");
    app.nav = Navigation::Channels { region };
    app.map_cursor = region;
    app.channels.clear();
    app.guide.clear();
    app.guide_selected = 0;
    app.guide_updated_at = None;
    app.schedule.clear();
    app.schedule_scroll = 0;
    app.status = GUIDE_HINT.to_owned();

    requests.cancel(RequestKey::Channels);
    requests.cancel(RequestKey::LiveGuide);
    requests.cancel(RequestKey::Schedule);
    fetch_channels(region, requests, effects);
    fetch_live_guide(region, requests, effects);
    refresh.start();

    emit(app, requests, effects);
}

/// Opens the schedule of `channel_id`. Only channels present in the loaded
/// list of the current region can be opened.
pub fn select_channel(
    channel_id: &ChannelId,
    schedule_hours: u32,
    app: &mut App,
    requests: &mut Requests,
    refresh: &mut GuideRefreshTimer,
    effects: &mut CoreEffects,
) {
    let Navigation::Channels { region } = app.nav else {
        tracing::trace!(%channel_id, view = ?app.view(), "channel selection ignored");
        return;
    };
    if app.find_channel(channel_id).is_none() {
        tracing::debug!(%channel_id, %region, "channel not in loaded list");
        app.status = format!("Channel {channel_id} is not loaded yet");
        emit(app, requests, effects);
        return;
    }

    tracing::info!(%channel_id, %region, "channel selected");
    app.nav = Navigation::ChannelDetail {
        region,
        channel: channel_id.clone(),
    };
    app.schedule.clear();
    app.schedule_scroll = 0;
    app.status = DETAIL_HINT.to_owned();

    refresh.stop();
    requests.cancel(RequestKey::Channels);
    requests.cancel(RequestKey::LiveGuide);
    requests.cancel(RequestKey::Schedule);
    fetch_schedule(channel_id.clone(), schedule_hours, requests, effects);

    emit(app, requests, effects);
}

pub fn back(
    app: &mut App,
    requests: &mut Requests,
    refresh: &mut GuideRefreshTimer,
    effects: &mut CoreEffects,
) {
    match app.nav {
        Navigation::Map => {}
        Navigation::ChannelDetail { region, .. } => {
            app.nav = Navigation::Channels { region };
            app.schedule.clear();
            app.schedule_scroll = 0;
            app.status = GUIDE_HINT.to_owned();
            requests.cancel(RequestKey::Schedule);
            refresh.start();
            emit(app, requests, effects);
        }
        Navigation::Channels { region } => {
            app.nav = Navigation::Map;
            app.map_cursor = region;
            app.channels.clear();
            app.guide.clear();
            app.guide_selected = 0;
            app.guide_updated_at = None;
            app.status = MAP_HINT.to_owned();
            requests.cancel(RequestKey::Channels);
            requests.cancel(RequestKey::LiveGuide);
            refresh.stop();
            fetch_region_counts(requests, effects);
            emit(app, requests, effects);
        }
    }
}

/// Re-fetches whatever the current view shows.
pub fn refresh_current(
    schedule_hours: u32,
    app: &mut App,
    requests: &mut Requests,
    effects: &mut CoreEffects,
) {
    match &app.nav {
        Navigation::Map => fetch_region_counts(requests, effects),
        Navigation::Channels { region } => {
            fetch_channels(*region, requests, effects);
            fetch_live_guide(*region, requests, effects);
        }
        Navigation::ChannelDetail { channel, .. } => {
            fetch_schedule(channel.clone(), schedule_hours, requests, effects);
        }
    }
    emit(app, requests, effects);
}

/// Periodic guide refresh. Ticks from a superseded or stopped timer are
/// dropped.
pub fn handle_guide_tick(
    generation: u64,
    app: &mut App,
    requests: &mut Requests,
    refresh: &mut GuideRefreshTimer,
    effects: &mut CoreEffects,
) {
    if !refresh.accept(generation) {
        tracing::trace!(generation, "stale guide tick dropped");
        return;
    }
    let Navigation::Channels { region } = app.nav else {
        refresh.stop();
        return;
    };
    tracing::debug!(%region, generation, "guide refresh tick");
    fetch_live_guide(region, requests, effects);
    emit(app, requests, effects);
}
