//! Error types for the sync engine.

use anuvada_store::{FetchStatus, Uid};
use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur while coordinating fetches and edits.
///
/// These are returned to the initiating caller. The store itself only ever
/// records `failure = true` with no detail payload; error detail does not
/// flow into record state.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Network or transport error.
    #[error("transport error: {message}")]
    Transport {
        /// Error message.
        message: String,
        /// Whether the operation can be retried.
        retryable: bool,
    },

    /// The transport returned a body that does not decode to segment data.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// A newer request was issued while this one was in flight; its
    /// resolution was dropped without reaching the store.
    #[error("request for {uid} superseded by a newer request")]
    Superseded {
        /// Record whose resolution was dropped.
        uid: Uid,
    },

    /// An edit was refused because the record is not loaded.
    #[error("cannot edit record in {status:?} state")]
    NotLoaded {
        /// Status the record was in when the edit arrived.
        status: FetchStatus,
    },

    /// Not connected.
    #[error("not connected to server")]
    NotConnected,

    /// Timeout.
    #[error("request timed out")]
    Timeout,
}

impl SyncError {
    /// Creates a retryable transport error.
    pub fn transport_retryable(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            retryable: true,
        }
    }

    /// Creates a non-retryable transport error.
    pub fn transport_fatal(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            retryable: false,
        }
    }

    /// Returns true if this error can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            SyncError::Transport { retryable, .. } => *retryable,
            SyncError::Timeout => true,
            _ => false,
        }
    }
}
