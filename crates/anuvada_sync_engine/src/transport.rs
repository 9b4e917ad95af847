//! Transport layer abstraction for segment fetches.

use crate::error::{SyncError, SyncResult};
use anuvada_store::{SegmentData, Uid};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// A segment transport performs the actual network fetch for one record.
///
/// This trait abstracts the network layer, allowing for different
/// implementations (HTTP, a browser fetch bridge, mock for testing, etc.).
/// Each call resolves exactly once: with a full payload or with an error.
pub trait SegmentTransport: Send + Sync {
    /// Fetches the full segment payload for one record.
    fn fetch_segments(&self, uid: &Uid) -> SyncResult<SegmentData>;

    /// Checks if the transport is connected.
    fn is_connected(&self) -> bool;

    /// Closes the transport connection.
    fn close(&self) -> SyncResult<()>;
}

/// A mock transport for testing.
///
/// Serves scripted per-uid payloads and can inject a number of transient
/// failures before resolving normally.
#[derive(Debug, Default)]
pub struct MockTransport {
    connected: AtomicBool,
    payloads: Mutex<BTreeMap<Uid, SegmentData>>,
    failures_remaining: Mutex<u32>,
}

impl MockTransport {
    /// Creates a new mock transport.
    pub fn new() -> Self {
        Self {
            connected: AtomicBool::new(true),
            payloads: Mutex::new(BTreeMap::new()),
            failures_remaining: Mutex::new(0),
        }
    }

    /// Sets the payload served for one uid.
    pub fn set_payload(&self, uid: impl Into<Uid>, payload: SegmentData) {
        self.payloads.lock().insert(uid.into(), payload);
    }

    /// Makes the next `count` fetches fail with a retryable transport error.
    pub fn fail_next_fetches(&self, count: u32) {
        *self.failures_remaining.lock() = count;
    }

    /// Sets the connected state.
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }
}

impl SegmentTransport for MockTransport {
    fn fetch_segments(&self, uid: &Uid) -> SyncResult<SegmentData> {
        if !self.is_connected() {
            return Err(SyncError::NotConnected);
        }
        {
            let mut remaining = self.failures_remaining.lock();
            if *remaining > 0 {
                *remaining -= 1;
                return Err(SyncError::transport_retryable("injected fetch failure"));
            }
        }
        self.payloads
            .lock()
            .get(uid)
            .cloned()
            .ok_or_else(|| SyncError::transport_fatal(format!("no payload for {uid}")))
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn close(&self) -> SyncResult<()> {
        self.connected.store(false, Ordering::SeqCst);
        Ok(())
    }
}
