use super::emit;
use super::navigation::fetch_region_counts;
use crate::core::prelude::{App, CoreEffects, GatewayCommand, RequestKey, Requests, View};
use crate::domain::{RegionCount, RegionId};

pub fn move_cursor(app: &mut App, forward: bool, effects: &mut CoreEffects) {
    let idx = app.map_cursor.index();
    let len = RegionId::ALL.len();
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    app.map_cursor = RegionId::ALL[next];
    effects.emit_state(app);
}

pub fn set_cursor(app: &mut App, region: RegionId, effects: &mut CoreEffects) {
    if app.map_cursor != region {
        app.map_cursor = region;
        effects.emit_state(app);
    }
}

/// Applies fresh per-region counts. Regions missing from the reply show 0.
pub fn handle_region_counts_event(
    req_id: u64,
    counts: &[RegionCount],
    app: &mut App,
    requests: &mut Requests,
    effects: &mut CoreEffects,
) {
    if !requests.settle(RequestKey::RegionCounts, req_id) {
        tracing::trace!(req_id, "stale region counts dropped");
        emit(app, requests, effects);
        return;
    }
    app.region_counts.apply(counts);
    tracing::debug!(total = app.region_counts.total(), "region counts updated");
    emit(app, requests, effects);
}

/// The backend seeded its dataset; counts may have changed.
pub fn handle_sample_data_ready(
    req_id: u64,
    message: &str,
    app: &mut App,
    requests: &mut Requests,
    effects: &mut CoreEffects,
) {
    if !requests.settle(RequestKey::InitData, req_id) {
        return;
    }
    tracing::info!(message, "sample data ready");
    if app.view() == View::Map {
        fetch_region_counts(requests, effects);
    } else {
        // Off the map the counts are only cached, so they stay out of `loading`.
        let req_id = requests.issue(RequestKey::RegionCounts);
        effects.send_gateway_warn(
            GatewayCommand::RegionCounts { req_id },
            "gateway channel closed: RegionCounts not sent",
        );
    }
    emit(app, requests, effects);
}
