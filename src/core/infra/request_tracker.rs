//! Latest-wins request tracking.
//!
//! Each key keeps only its newest req_id; replies for older ids are stale and
//! get dropped.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug)]
pub struct RequestTracker<K> {
    pending: HashMap<K, u64>,
}

impl<K: Eq + Hash> Default for RequestTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> RequestTracker<K> {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }

    /// Issues a new request for `key`, superseding any pending one.
    pub fn issue(&mut self, key: K, next_id_fn: impl FnOnce() -> u64) -> u64 {
        let id = next_id_fn();
        self.pending.insert(key, id);
        id
    }

    /// Accepts a reply only if `req_id` is the pending id for `key`, and
    /// clears the pending slot when it does.
    pub fn accept(&mut self, key: &K, req_id: u64) -> bool {
        match self.pending.get(key) {
            Some(&pending_id) if pending_id == req_id => {
                self.pending.remove(key);
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self, key: &K) {
        self.pending.remove(key);
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }
}

/// Request kinds issued by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKey {
    /// `POST /init-data`
    InitData,
    /// `GET /regions`
    RegionCounts,
    /// `GET /channels?region=`
    Channels,
    /// `GET /live-guide?region=`
    LiveGuide,
    /// `GET /schedule/<id>`
    Schedule,
}

impl From<crate::gateway::actor::GatewayOp> for RequestKey {
    fn from(op: crate::gateway::actor::GatewayOp) -> Self {
        use crate::gateway::actor::GatewayOp;
        match op {
            GatewayOp::InitData => RequestKey::InitData,
            GatewayOp::RegionCounts => RequestKey::RegionCounts,
            GatewayOp::Channels => RequestKey::Channels,
            GatewayOp::LiveGuide => RequestKey::LiveGuide,
            GatewayOp::Schedule => RequestKey::Schedule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> impl FnMut() -> u64 {
        let mut id = 0u64;
        move || {
            id += 1;
            id
        }
    }

    #[test]
    fn issue_and_accept() {
        let mut tracker: RequestTracker<RequestKey> = RequestTracker::new();
        let mut next = counter();

        let req_id = tracker.issue(RequestKey::Channels, &mut next);
        assert_eq!(req_id, 1);
        assert!(tracker.is_pending(&RequestKey::Channels));

        assert!(tracker.accept(&RequestKey::Channels, 1));
        assert!(!tracker.is_pending(&RequestKey::Channels));
    }

    #[test]
    fn consecutive_issue_only_accepts_latest() {
        let mut tracker: RequestTracker<RequestKey> = RequestTracker::new();
        let mut next = counter();

        let first = tracker.issue(RequestKey::LiveGuide, &mut next);
        let second = tracker.issue(RequestKey::LiveGuide, &mut next);

        assert!(!tracker.accept(&RequestKey::LiveGuide, first));
        assert!(tracker.is_pending(&RequestKey::LiveGuide));
        assert!(tracker.accept(&RequestKey::LiveGuide, second));
        assert!(!tracker.is_pending(&RequestKey::LiveGuide));
    }

    #[test]
    fn accept_without_issue_is_rejected() {
        let mut tracker: RequestTracker<RequestKey> = RequestTracker::new();
        assert!(!tracker.accept(&RequestKey::Schedule, 999));
    }

    #[test]
    fn keys_are_independent() {
        let mut tracker: RequestTracker<RequestKey> = RequestTracker::new();
        let mut next = counter();

        let channels = tracker.issue(RequestKey::Channels, &mut next);
        let guide = tracker.issue(RequestKey::LiveGuide, &mut next);

        assert!(tracker.accept(&RequestKey::Channels, channels));
        assert!(tracker.is_pending(&RequestKey::LiveGuide));
        tracker.clear(&RequestKey::LiveGuide);
        assert!(!tracker.accept(&RequestKey::LiveGuide, guide));
    }
}
