use super::emit;
use crate::core::prelude::{App, CoreEffects, Navigation, RequestKey, Requests};
use crate::domain::{Channel, ChannelId, LiveGuideRow, RegionId};

pub fn move_selection(app: &mut App, down: bool, effects: &mut CoreEffects) {
    if app.guide.is_empty() {
        return;
    }
    let before = app.guide_selected;
    if down {
        if app.guide_selected + 1 < app.guide.len() {
            app.guide_selected += 1;
        }
    } else {
        app.guide_selected = app.guide_selected.saturating_sub(1);
    }
    if app.guide_selected != before {
        effects.emit_state(app);
    }
}

/// Channel id of the highlighted guide row.
pub fn selected_channel_id(app: &App) -> Option<ChannelId> {
    app.guide
        .get(app.guide_selected)
        .map(|row| row.channel.id.clone())
}

/// Guide data only lands while the guide itself is open for `region`; the
/// channel detail resolves its channel against the list it was opened from.
fn guide_open_for(app: &App, region: RegionId) -> bool {
    app.nav == Navigation::Channels { region }
}

pub fn handle_channels_event(
    req_id: u64,
    region: RegionId,
    channels: Vec<Channel>,
    app: &mut App,
    requests: &mut Requests,
    effects: &mut CoreEffects,
) {
    let current = requests.settle(RequestKey::Channels, req_id);
    if !current || !guide_open_for(app, region) {
        tracing::trace!(req_id, %region, "stale channel list dropped");
        emit(app, requests, effects);
        return;
    }
    tracing::debug!(%region, count = channels.len(), "channel list loaded");
    app.channels = channels;
    emit(app, requests, effects);
}

pub fn handle_live_guide_event(
    req_id: u64,
    region: RegionId,
    rows: Vec<LiveGuideRow>,
    app: &mut App,
    requests: &mut Requests,
    effects: &mut CoreEffects,
) {
    let current = requests.settle(RequestKey::LiveGuide, req_id);
    if !current || !guide_open_for(app, region) {
        tracing::trace!(req_id, %region, "stale live guide dropped");
        emit(app, requests, effects);
        return;
    }
    tracing::debug!(%region, rows = rows.len(), "live guide loaded");
    app.guide = rows;
    app.guide_selected = app.guide_selected.min(app.guide.len().saturating_sub(1));
    app.guide_updated_at = Some(chrono::Utc::now());
    emit(app, requests, effects);
}
