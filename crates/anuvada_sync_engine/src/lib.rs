//! # Anuvada Sync Engine
//!
//! Fetch lifecycle coordination for Anuvada segment records.
//!
//! This crate provides:
//! - `SyncEngine` — issues fetch-lifecycle events against a `SegmentStore`
//! - A stale-resolution guard: responses for superseded requests are dropped
//! - Retry expressed as visible refetches with exponential backoff
//! - `SegmentTransport` abstraction with mock and HTTP implementations
//!
//! ## Architecture
//!
//! The engine wraps the pure store in a **request / resolve** cycle:
//! 1. Dispatch `RequestStarted` and remember the request generation.
//! 2. Fetch through the transport.
//! 3. If a newer request was issued meanwhile, drop the resolution;
//!    otherwise dispatch `RequestSucceeded` or `RequestFailed`.
//!
//! All asynchrony lives in the host that calls the engine; the engine itself
//! runs each load to completion on the caller's thread.
//!
//! ## Key invariants
//!
//! - At most one resolution is dispatched per admitted request
//! - A resolution for a superseded request never reaches the store
//! - Edits are admitted only while the record is loaded (strict mode)
//! - Retries are never hidden: every attempt is a fresh `RequestStarted`

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod http;
mod transport;

pub use config::{RetryConfig, SyncConfig};
pub use engine::SyncEngine;
pub use error::{SyncError, SyncResult};
pub use http::{HttpClient, HttpTransport, LoopbackClient};
pub use transport::{MockTransport, SegmentTransport};
