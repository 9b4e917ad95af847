//! The fetch/edit coordinator for segment records.

use crate::config::SyncConfig;
use crate::error::{SyncError, SyncResult};
use crate::transport::SegmentTransport;
use anuvada_store::{
    DataType, SegmentData, SegmentEvent, SegmentId, SegmentRecord, SegmentStore, Uid,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Coordinates fetches and edits against one [`SegmentStore`].
///
/// The engine is the caller-side layer the store expects: it issues the
/// fetch-lifecycle events, drops resolutions that arrive after a newer
/// request was issued, and admits edits only while the record is loaded.
///
/// Every `load` is stamped with a request generation. A resolution is
/// dispatched only when its generation is still current; anything else is a
/// stale response for an abandoned record and is dropped before it can
/// clobber newer state.
pub struct SyncEngine<T: SegmentTransport> {
    config: SyncConfig,
    transport: Arc<T>,
    store: Arc<SegmentStore>,
    generation: AtomicU64,
}

impl<T: SegmentTransport> SyncEngine<T> {
    /// Creates an engine with a fresh store.
    pub fn new(config: SyncConfig, transport: T) -> Self {
        Self::with_store(config, transport, Arc::new(SegmentStore::new()))
    }

    /// Creates an engine over an existing store context.
    pub fn with_store(config: SyncConfig, transport: T, store: Arc<SegmentStore>) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
            store,
            generation: AtomicU64::new(0),
        }
    }

    /// Returns the store this engine dispatches into.
    pub fn store(&self) -> Arc<SegmentStore> {
        Arc::clone(&self.store)
    }

    /// Returns a snapshot of the current record state.
    #[must_use]
    pub fn state(&self) -> SegmentRecord {
        self.store.state()
    }

    /// Loads the record for `uid`, dispatching the full fetch lifecycle.
    ///
    /// Dispatches `RequestStarted` immediately, performs the fetch on the
    /// calling thread, then dispatches exactly one of `RequestSucceeded` or
    /// `RequestFailed` — unless a newer request was issued meanwhile, in
    /// which case the resolution is dropped and `Superseded` is returned.
    pub fn load(&self, uid: &Uid) -> SyncResult<SegmentData> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(uid = %uid, "requesting segment data");
        self.store
            .dispatch(SegmentEvent::request_started(uid.clone()));

        let outcome = self.transport.fetch_segments(uid);

        if self.generation.load(Ordering::SeqCst) != generation {
            warn!(uid = %uid, "dropping stale fetch resolution");
            return Err(SyncError::Superseded { uid: uid.clone() });
        }

        match outcome {
            Ok(payload) => {
                debug!(uid = %uid, segments = payload.len(), "segment data received");
                self.store
                    .dispatch(SegmentEvent::request_succeeded(uid.clone(), payload.clone()));
                Ok(payload)
            }
            Err(err) => {
                debug!(uid = %uid, error = %err, "segment data fetch failed");
                self.store
                    .dispatch(SegmentEvent::request_failed(uid.clone()));
                Err(err)
            }
        }
    }

    /// Loads with retry on transient errors.
    ///
    /// Each attempt is a fresh `load`: the store sees every retry as a
    /// refetch (`RequestStarted` again), never as hidden state. A
    /// superseded attempt is never retried.
    pub fn load_with_retry(&self, uid: &Uid) -> SyncResult<SegmentData> {
        let retry = self.config.retry.clone();
        let mut last_error = None;

        for attempt in 0..retry.max_attempts {
            if attempt > 0 {
                let delay = retry.delay_for_attempt(attempt);
                debug!(uid = %uid, attempt, ?delay, "retrying segment fetch");
                std::thread::sleep(delay);
            }

            match self.load(uid) {
                Ok(payload) => return Ok(payload),
                Err(err @ SyncError::Superseded { .. }) => return Err(err),
                Err(err) => {
                    if err.is_retryable() && attempt + 1 < retry.max_attempts {
                        last_error = Some(err);
                        continue;
                    }
                    if attempt + 1 >= retry.max_attempts {
                        warn!(uid = %uid, "segment fetch retries exhausted");
                    }
                    return Err(err);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| SyncError::transport_fatal("no fetch attempts made")))
    }

    /// Applies one field edit to the loaded record.
    ///
    /// In strict mode (the default) the edit is admitted only while the
    /// record is `Loaded`; edits racing an unsettled fetch are refused
    /// before they reach the store.
    pub fn edit(
        &self,
        data_type: impl Into<DataType>,
        segment_id: impl Into<SegmentId>,
        value: impl Into<String>,
    ) -> SyncResult<SegmentRecord> {
        if self.config.strict_edits {
            let status = self.store.state().status();
            if !status.accepts_edits() {
                return Err(SyncError::NotLoaded { status });
            }
        }
        Ok(self
            .store
            .dispatch(SegmentEvent::field_edited(data_type, segment_id, value)))
    }

    /// Invalidates any in-flight request; its resolution will be dropped.
    ///
    /// There is no cancel event in the store: a fetch is cancelled by
    /// ignoring its resolution, optionally followed by a superseding
    /// `load`.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
