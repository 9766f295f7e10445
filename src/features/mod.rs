pub mod detail;
pub mod guide;
pub mod map;
pub mod navigation;

use crate::core::prelude::{App, CoreEffects, Requests};

/// Publishes the current state with an up-to-date loading flag.
pub(crate) fn emit(app: &mut App, requests: &Requests, effects: &mut CoreEffects) {
    requests.sync_loading(app);
    effects.emit_state(app);
}
