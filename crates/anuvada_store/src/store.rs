//! The segment store context object.
//!
//! The store owns one [`SegmentRecord`], applies events through the pure
//! reducer, and fans post-dispatch snapshots out to subscribers. It is an
//! explicit context: callers construct it, share it, and drop it; nothing is
//! created at module load time.

use crate::event::SegmentEvent;
use crate::record::SegmentRecord;
use crate::reducer::reduce;
use parking_lot::RwLock;
use std::sync::mpsc::{self, Receiver, Sender};

/// Holds the active segment record and distributes snapshots of it.
///
/// Dispatch is serial: the write lock admits one event at a time, and the
/// reducer runs to completion before the next event is admitted. The store
/// itself performs no I/O; the surrounding engine issues the fetch-lifecycle
/// events.
pub struct SegmentStore {
    state: RwLock<SegmentRecord>,
    subscribers: RwLock<Vec<Sender<SegmentRecord>>>,
}

impl SegmentStore {
    /// Creates a store with an empty record slot.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(SegmentRecord::default()),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Returns a snapshot of the current record state.
    #[must_use]
    pub fn state(&self) -> SegmentRecord {
        self.state.read().clone()
    }

    /// Applies one event and returns the resulting snapshot.
    ///
    /// Subscribers receive the same snapshot after the state has been
    /// replaced.
    pub fn dispatch(&self, event: SegmentEvent) -> SegmentRecord {
        let snapshot = {
            let mut state = self.state.write();
            let next = reduce(&state, &event);
            *state = next.clone();
            next
        };
        self.notify(&snapshot);
        snapshot
    }

    /// Subscribes to post-dispatch snapshots.
    ///
    /// Returns a receiver that sees every snapshot produced after this call.
    /// Dropped receivers are pruned on the next dispatch.
    pub fn subscribe(&self) -> Receiver<SegmentRecord> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.write().push(tx);
        rx
    }

    /// Returns the number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    fn notify(&self, snapshot: &SegmentRecord) {
        let mut subscribers = self.subscribers.write();
        subscribers.retain(|tx| tx.send(snapshot.clone()).is_ok());
    }
}

impl Default for SegmentStore {
    fn default() -> Self {
        Self::new()
    }
}
