//! Events consumed by the segment store.

use crate::data::SegmentData;
use crate::types::{DataType, SegmentId, Uid};
use serde::{Deserialize, Serialize};

/// One step of the fetch lifecycle, or one local edit.
///
/// The set is closed: the reducer matches exhaustively, so the
/// unrecognized-tag arm of a stringly-tagged dispatch has no equivalent
/// here — it is ruled out at compile time. Hosts that route a wider event
/// fan-out keep foreign events outside the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentEvent {
    /// A fetch for `uid` was issued; its resolution has not arrived yet.
    RequestStarted {
        /// Record being requested.
        uid: Uid,
    },
    /// The fetch for `uid` resolved with a payload.
    RequestSucceeded {
        /// Record the payload belongs to.
        uid: Uid,
        /// Full payload delivered by the transport.
        payload: SegmentData,
    },
    /// The fetch for `uid` resolved in failure.
    RequestFailed {
        /// Record whose fetch failed.
        uid: Uid,
    },
    /// The user changed one field of the loaded record.
    ///
    /// Deliberately carries no uid: the edit targets whatever the slot
    /// currently holds. Issuing edits only against a settled, loaded record
    /// is the dispatching caller's responsibility.
    FieldEdited {
        /// Category the edited value belongs to.
        data_type: DataType,
        /// Sub-unit being edited.
        segment_id: SegmentId,
        /// New text value.
        value: String,
    },
}

impl SegmentEvent {
    /// Creates a request-started event.
    pub fn request_started(uid: impl Into<Uid>) -> Self {
        Self::RequestStarted { uid: uid.into() }
    }

    /// Creates a request-succeeded event.
    pub fn request_succeeded(uid: impl Into<Uid>, payload: SegmentData) -> Self {
        Self::RequestSucceeded {
            uid: uid.into(),
            payload,
        }
    }

    /// Creates a request-failed event.
    pub fn request_failed(uid: impl Into<Uid>) -> Self {
        Self::RequestFailed { uid: uid.into() }
    }

    /// Creates a field-edited event.
    pub fn field_edited(
        data_type: impl Into<DataType>,
        segment_id: impl Into<SegmentId>,
        value: impl Into<String>,
    ) -> Self {
        Self::FieldEdited {
            data_type: data_type.into(),
            segment_id: segment_id.into(),
            value: value.into(),
        }
    }

    /// Returns the uid carried by fetch-lifecycle events.
    ///
    /// `None` for edits, which address the active slot implicitly.
    #[must_use]
    pub fn uid(&self) -> Option<&Uid> {
        match self {
            Self::RequestStarted { uid }
            | Self::RequestSucceeded { uid, .. }
            | Self::RequestFailed { uid } => Some(uid),
            Self::FieldEdited { .. } => None,
        }
    }
}
