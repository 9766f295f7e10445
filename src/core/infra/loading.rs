use std::collections::HashMap;
use std::hash::Hash;

/// Outstanding view-feeding requests.
///
/// Loading is "any request still in flight", so a reply that lands early never
/// clears the flag while a sibling request is outstanding.
#[derive(Debug)]
pub struct LoadingTracker<K> {
    in_flight: HashMap<u64, K>,
}

impl<K> Default for LoadingTracker<K> {
    fn default() -> Self {
        Self {
            in_flight: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Copy> LoadingTracker<K> {
    pub fn begin(&mut self, req_id: u64, key: K) {
        self.in_flight.insert(req_id, key);
    }

    /// Idempotent: finishing an unknown or already finished id is a no-op.
    pub fn finish(&mut self, req_id: u64) -> bool {
        self.in_flight.remove(&req_id).is_some()
    }

    /// Drops every in-flight request of `key` (superseded ones included).
    pub fn cancel_key(&mut self, key: K) {
        self.in_flight.retain(|_, k| *k != key);
    }

    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }
}
