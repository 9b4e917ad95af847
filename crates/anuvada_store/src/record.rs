//! Segment record state and its derived fetch status.

use crate::data::SegmentData;
use crate::types::Uid;
use serde::{Deserialize, Serialize};

/// Fetch status of the active record slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchStatus {
    /// No fetch has been issued for this slot yet.
    Idle,
    /// A request is in flight.
    Fetching,
    /// The most recent fetch delivered data.
    Loaded,
    /// The most recent fetch failed.
    Failed,
}

impl FetchStatus {
    /// Returns true once a fetch has settled, successfully or not.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self, FetchStatus::Loaded | FetchStatus::Failed)
    }

    /// Returns true while edits can plausibly apply.
    #[must_use]
    pub fn accepts_edits(&self) -> bool {
        matches!(self, FetchStatus::Loaded)
    }
}

/// The state owned by the segment data layer: at most one active record.
///
/// The slot is replaced wholesale on every processed event, never mutated in
/// place, so snapshots handed to subscribers stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRecord {
    /// Identifier carried by the most recent fetch-lifecycle event.
    /// `None` only before the first request.
    pub uid: Option<Uid>,
    /// Loaded payload. `None` until a fetch for the current uid succeeds.
    pub data: Option<SegmentData>,
    /// True strictly between a request being issued and its resolution.
    pub is_fetching: bool,
    /// True iff the most recent fetch for the current uid ended in failure.
    pub failure: bool,
}

impl SegmentRecord {
    /// Derives the slot's fetch status.
    ///
    /// Precedence: an in-flight request, then a recorded failure, then data
    /// presence. A failure that follows a load without an intervening
    /// request reports `Failed` while the retained data stays readable.
    #[must_use]
    pub fn status(&self) -> FetchStatus {
        if self.is_fetching {
            FetchStatus::Fetching
        } else if self.failure {
            FetchStatus::Failed
        } else if self.data.is_some() {
            FetchStatus::Loaded
        } else {
            FetchStatus::Idle
        }
    }

    /// Looks up one value in the loaded payload.
    #[must_use]
    pub fn value(&self, data_type: &str, segment_id: &str) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|data| data.get(data_type, segment_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_slot_is_idle() {
        let record = SegmentRecord::default();
        assert_eq!(record.status(), FetchStatus::Idle);
        assert_eq!(record.uid, None);
        assert_eq!(record.value("translation", "seg1"), None);
    }

    #[test]
    fn status_precedence() {
        let mut record = SegmentRecord {
            uid: Some(Uid::new("u1")),
            data: Some(SegmentData::new()),
            is_fetching: true,
            failure: true,
        };
        assert_eq!(record.status(), FetchStatus::Fetching);

        record.is_fetching = false;
        assert_eq!(record.status(), FetchStatus::Failed);

        record.failure = false;
        assert_eq!(record.status(), FetchStatus::Loaded);

        record.data = None;
        assert_eq!(record.status(), FetchStatus::Idle);
    }

    #[test]
    fn status_checks() {
        assert!(FetchStatus::Loaded.is_settled());
        assert!(FetchStatus::Failed.is_settled());
        assert!(!FetchStatus::Fetching.is_settled());
        assert!(!FetchStatus::Idle.is_settled());

        assert!(FetchStatus::Loaded.accepts_edits());
        assert!(!FetchStatus::Failed.accepts_edits());
    }

    #[test]
    fn value_reads_through_to_payload() {
        let mut data = SegmentData::new();
        data.insert("translation", "seg1", "hello");
        let record = SegmentRecord {
            uid: Some(Uid::new("u1")),
            data: Some(data),
            is_fetching: false,
            failure: false,
        };
        assert_eq!(record.value("translation", "seg1"), Some("hello"));
        assert_eq!(record.value("root", "seg1"), None);
    }
}
