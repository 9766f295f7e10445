use super::emit;
use crate::core::prelude::{App, CoreEffects, RequestKey, Requests};
use crate::domain::{ChannelId, ScheduleEntry};

pub fn scroll(app: &mut App, down: bool, effects: &mut CoreEffects) {
    let before = app.schedule_scroll;
    if down {
        if app.schedule_scroll + 1 < app.schedule.len() {
            app.schedule_scroll += 1;
        }
    } else {
        app.schedule_scroll = app.schedule_scroll.saturating_sub(1);
    }
    if app.schedule_scroll != before {
        effects.emit_state(app);
    }
}

pub fn handle_schedule_event(
    req_id: u64,
    channel_id: &ChannelId,
    entries: Vec<ScheduleEntry>,
    app: &mut App,
    requests: &mut Requests,
    effects: &mut CoreEffects,
) {
    let current = requests.settle(RequestKey::Schedule, req_id);
    if !current || app.nav.selected_channel() != Some(channel_id) {
        tracing::trace!(req_id, %channel_id, "stale schedule dropped");
        emit(app, requests, effects);
        return;
    }
    tracing::debug!(%channel_id, entries = entries.len(), "schedule loaded");
    app.schedule = entries;
    app.schedule_scroll = 0;
    emit(app, requests, effects);
}
