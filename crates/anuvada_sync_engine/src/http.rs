//! HTTP transport implementation.
//!
//! This module provides an HTTP-shaped transport for segment fetches. The
//! actual HTTP client is abstracted via a trait so hosts can plug in
//! whatever the surrounding runtime provides (reqwest, ureq, a browser
//! fetch bridge, etc.).

use crate::error::{SyncError, SyncResult};
use crate::transport::SegmentTransport;
use anuvada_store::{SegmentData, Uid};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// HTTP client abstraction.
///
/// Implement this trait to provide the actual HTTP transport.
pub trait HttpClient: Send + Sync {
    /// Sends a GET request and returns the response body.
    fn get(&self, url: &str) -> Result<Vec<u8>, String>;

    /// Checks if the client is connected/healthy.
    fn is_healthy(&self) -> bool;
}

/// HTTP-based segment transport.
///
/// Fetches `{base_url}/api/segments/{uid}` and decodes the JSON body into
/// [`SegmentData`].
pub struct HttpTransport<C: HttpClient> {
    /// Base URL of the editor backend (e.g. "https://editor.example.com").
    base_url: String,
    /// HTTP client implementation.
    client: C,
    /// Connection state.
    connected: AtomicBool,
    /// Last error message.
    last_error: RwLock<Option<String>>,
}

impl<C: HttpClient> HttpTransport<C> {
    /// Creates a new HTTP transport.
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        Self {
            base_url: base_url.into(),
            client,
            connected: AtomicBool::new(true),
            last_error: RwLock::new(None),
        }
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the last error message.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.read().clone()
    }

    fn set_error(&self, err: &str) {
        *self.last_error.write() = Some(err.to_string());
    }

    fn clear_error(&self) {
        *self.last_error.write() = None;
    }
}

impl<C: HttpClient> SegmentTransport for HttpTransport<C> {
    fn fetch_segments(&self, uid: &Uid) -> SyncResult<SegmentData> {
        if !self.is_connected() {
            return Err(SyncError::NotConnected);
        }

        let url = format!("{}/api/segments/{}", self.base_url, uid);
        let body = self.client.get(&url).map_err(|e| {
            self.set_error(&e);
            self.connected.store(false, Ordering::SeqCst);
            SyncError::transport_retryable(e)
        })?;

        self.clear_error();

        serde_json::from_slice(&body).map_err(|e| SyncError::InvalidPayload(e.to_string()))
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst) && self.client.is_healthy()
    }

    fn close(&self) -> SyncResult<()> {
        self.connected.store(false, Ordering::SeqCst);
        Ok(())
    }
}

/// An `HttpClient` that serves canned response bodies by uid, with no
/// network overhead.
///
/// Useful for tests and demos.
#[derive(Debug, Default)]
pub struct LoopbackClient {
    bodies: RwLock<BTreeMap<String, Vec<u8>>>,
    healthy: AtomicBool,
}

impl LoopbackClient {
    /// Creates a new loopback client.
    pub fn new() -> Self {
        Self {
            bodies: RwLock::new(BTreeMap::new()),
            healthy: AtomicBool::new(true),
        }
    }

    /// Registers the response body served for one uid.
    pub fn set_body(&self, uid: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.bodies.write().insert(uid.into(), body.into());
    }

    /// Sets the health state.
    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }
}

impl HttpClient for LoopbackClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, String> {
        let uid = url.rsplit('/').next().unwrap_or("");
        self.bodies
            .read()
            .get(uid)
            .cloned()
            .ok_or_else(|| format!("404 for {url}"))
    }

    fn is_healthy(&self) -> bool {
        self.healthy.load(Ordering::SeqCst)
    }
}
