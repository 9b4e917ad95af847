//! # Anuvada Testkit
//!
//! Test utilities for Anuvada.
//!
//! This crate provides:
//! - Fixtures: editor-domain payloads and record states
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust,ignore
//! use anuvada_testkit::prelude::*;
//!
//! #[test]
//! fn test_with_payload() {
//!     let record = loaded_record("art1");
//!     // ... drive the reducer or engine
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use anuvada_store::{
        DataType, FetchStatus, SegmentData, SegmentEvent, SegmentId, SegmentRecord, Uid,
    };
}

pub use fixtures::*;
pub use generators::*;
