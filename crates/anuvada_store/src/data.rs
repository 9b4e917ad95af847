//! Segment payload data and the immutable update helper.

use crate::types::{DataType, SegmentId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Nested mapping from data type to segment id to text value.
///
/// This is the payload shape a successful fetch delivers and the shape local
/// edits merge into. `BTreeMap` keeps iteration deterministic and equality
/// structural, which the reducer's minimal-merge guarantees are stated in
/// terms of.
///
/// Serializes transparently as the nested JSON object the editor backend
/// speaks:
///
/// ```json
/// { "translation": { "seg1": "So I have heard." } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentData(BTreeMap<DataType, BTreeMap<SegmentId, String>>);

impl SegmentData {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Looks up a single value.
    #[must_use]
    pub fn get(&self, data_type: &str, segment_id: &str) -> Option<&str> {
        self.0
            .get(data_type)
            .and_then(|bucket| bucket.get(segment_id))
            .map(String::as_str)
    }

    /// Returns the full bucket for one data type, if present.
    #[must_use]
    pub fn values_for(&self, data_type: &str) -> Option<&BTreeMap<SegmentId, String>> {
        self.0.get(data_type)
    }

    /// Inserts a value in place, creating the bucket when absent.
    pub fn insert(
        &mut self,
        data_type: impl Into<DataType>,
        segment_id: impl Into<SegmentId>,
        value: impl Into<String>,
    ) {
        self.0
            .entry(data_type.into())
            .or_default()
            .insert(segment_id.into(), value.into());
    }

    /// Returns a copy with exactly one leaf replaced.
    ///
    /// Every other entry in every bucket is preserved. The target bucket is
    /// created when absent, so the update always succeeds structurally, even
    /// against an empty payload.
    #[must_use]
    pub fn with_value(
        &self,
        data_type: &DataType,
        segment_id: &SegmentId,
        value: impl Into<String>,
    ) -> Self {
        let mut next = self.clone();
        next.0
            .entry(data_type.clone())
            .or_default()
            .insert(segment_id.clone(), value.into());
        next
    }

    /// Iterates over buckets in data-type order.
    pub fn iter(&self) -> impl Iterator<Item = (&DataType, &BTreeMap<SegmentId, String>)> {
        self.0.iter()
    }

    /// Total number of values across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    /// Returns true when no values are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SegmentData {
        let mut data = SegmentData::new();
        data.insert("translation", "seg1", "a");
        data.insert("translation", "seg2", "b");
        data.insert("root", "seg1", "r");
        data
    }

    #[test]
    fn with_value_replaces_leaf_and_preserves_siblings() {
        let data = payload();
        let next = data.with_value(
            &DataType::new("translation"),
            &SegmentId::new("seg1"),
            "x",
        );

        assert_eq!(next.get("translation", "seg1"), Some("x"));
        assert_eq!(next.get("translation", "seg2"), Some("b"));
        assert_eq!(next.get("root", "seg1"), Some("r"));
        // the original is untouched
        assert_eq!(data.get("translation", "seg1"), Some("a"));
    }

    #[test]
    fn with_value_materializes_missing_bucket() {
        let empty = SegmentData::new();
        let next = empty.with_value(&DataType::new("comment"), &SegmentId::new("seg1"), "note");

        assert_eq!(next.get("comment", "seg1"), Some("note"));
        assert_eq!(next.len(), 1);
        assert!(empty.is_empty());
    }

    #[test]
    fn len_counts_values_across_buckets() {
        assert_eq!(payload().len(), 3);
        assert!(!payload().is_empty());
        assert!(SegmentData::new().is_empty());
    }

    #[test]
    fn decodes_from_backend_json() {
        let body = r#"{"root":{"seg1":"r"},"translation":{"seg1":"a","seg2":"b"}}"#;
        let data: SegmentData = serde_json::from_str(body).unwrap();

        assert_eq!(data, payload());
        assert_eq!(data.values_for("translation").map(BTreeMap::len), Some(2));
    }
}
