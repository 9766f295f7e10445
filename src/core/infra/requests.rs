use super::loading::LoadingTracker;
use super::request_tracker::{RequestKey, RequestTracker};
use crate::app::App;
use crate::core::utils::next_id;

/// Request bookkeeping owned by the controller: id allocation, latest-wins
/// tracking and the loading counter.
#[derive(Debug)]
pub struct Requests {
    next_req_id: u64,
    tracker: RequestTracker<RequestKey>,
    loading: LoadingTracker<RequestKey>,
}

impl Default for Requests {
    fn default() -> Self {
        Self {
            next_req_id: 1,
            tracker: RequestTracker::new(),
            loading: LoadingTracker::default(),
        }
    }
}

impl Requests {
    /// Background request: tracked for staleness, not shown as loading.
    pub fn issue(&mut self, key: RequestKey) -> u64 {
        self.tracker.issue(key, || next_id(&mut self.next_req_id))
    }

    /// Request that feeds the visible view.
    pub fn issue_loading(&mut self, key: RequestKey) -> u64 {
        let id = self.issue(key);
        self.loading.begin(id, key);
        id
    }

    /// Records a reply (success or failure). Returns whether it is current.
    pub fn settle(&mut self, key: RequestKey, req_id: u64) -> bool {
        self.loading.finish(req_id);
        self.tracker.accept(&key, req_id)
    }

    /// Forgets outstanding requests of `key`; their replies will be stale.
    pub fn cancel(&mut self, key: RequestKey) {
        self.tracker.clear(&key);
        self.loading.cancel_key(key);
    }

    pub fn is_pending(&self, key: RequestKey) -> bool {
        self.tracker.is_pending(&key)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn sync_loading(&self, app: &mut App) {
        app.loading = self.is_loading();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_stale_reply_still_clears_its_loading_slot() {
        let mut req = Requests::default();
        let old = req.issue_loading(RequestKey::LiveGuide);
        let new = req.issue_loading(RequestKey::LiveGuide);

        assert!(!req.settle(RequestKey::LiveGuide, old));
        assert!(req.is_loading());
        assert!(req.settle(RequestKey::LiveGuide, new));
        assert!(!req.is_loading());
    }

    #[test]
    fn background_requests_do_not_set_loading() {
        let mut req = Requests::default();
        let id = req.issue(RequestKey::InitData);
        assert!(!req.is_loading());
        assert!(req.is_pending(RequestKey::InitData));
        assert!(req.settle(RequestKey::InitData, id));
    }

    #[test]
    fn cancel_makes_reply_stale() {
        let mut req = Requests::default();
        let id = req.issue_loading(RequestKey::Schedule);
        req.cancel(RequestKey::Schedule);
        assert!(!req.is_loading());
        assert!(!req.settle(RequestKey::Schedule, id));
    }
}
