//! Last-known reachability state per link.
//!
//! A coarse `RwLock` around the whole map is deliberate: link cardinality
//! is low and the monitor is the single writer. If the link count grows
//! large, shard the map or switch to a concurrent map — a scaling knob,
//! not a correctness requirement.

use std::collections::HashMap;
use std::sync::RwLock;

/// Concurrency-safe mapping from link id to last observed reachability.
///
/// Entries are created on first probe, updated every tick, and never
/// evicted for the lifetime of the process. Presence of an entry is the
/// "observed at least once" flag. The monitor scheduler is the only
/// writer; diagnostics may read concurrently and always see the result
/// of the last completed update, never a torn one.
#[derive(Debug, Default)]
pub struct StateTracker {
    states: RwLock<HashMap<i64, bool>>,
}

impl StateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically records `accessible` for `link_id` and returns what was
    /// there before the write.
    ///
    /// `None` means this is the first observation for the link; the
    /// caller establishes a baseline instead of emitting a transition.
    /// The read-modify-write happens under one write lock, so no
    /// concurrent reader can observe a half-updated entry.
    pub fn record_and_compare(&self, link_id: i64, accessible: bool) -> Option<bool> {
        let mut states = self.states.write().expect("state tracker lock poisoned");
        states.insert(link_id, accessible)
    }

    /// Last observed state for a link, if it has been probed at least
    /// once.
    pub fn get(&self, link_id: i64) -> Option<bool> {
        let states = self.states.read().expect("state tracker lock poisoned");
        states.get(&link_id).copied()
    }

    /// Number of links observed so far.
    pub fn len(&self) -> usize {
        let states = self.states.read().expect("state tracker lock poisoned");
        states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
