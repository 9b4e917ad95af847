//! Test fixtures for segment payloads and record states.

use anuvada_store::{SegmentData, SegmentRecord, Uid};

/// A payload with root, translation and comment buckets across two
/// segments, shaped like a real editor response.
pub fn sample_payload() -> SegmentData {
    let mut data = SegmentData::new();
    data.insert("root", "art1:1.1", "Alle Menschen sind frei geboren.");
    data.insert("root", "art1:1.2", "Sie sind mit Vernunft begabt.");
    data.insert("translation", "art1:1.1", "All human beings are born free.");
    data.insert("translation", "art1:1.2", "They are endowed with reason.");
    data.insert("comment", "art1:1.1", "Opening line.");
    data
}

/// The JSON body a backend would serve for [`sample_payload`].
pub fn sample_payload_json() -> String {
    let mut body = String::from("{");
    body.push_str(r#""comment":{"art1:1.1":"Opening line."},"#);
    body.push_str(r#""root":{"art1:1.1":"Alle Menschen sind frei geboren.","art1:1.2":"Sie sind mit Vernunft begabt."},"#);
    body.push_str(r#""translation":{"art1:1.1":"All human beings are born free.","art1:1.2":"They are endowed with reason."}"#);
    body.push('}');
    body
}

/// A record that has successfully loaded [`sample_payload`] for `uid`.
pub fn loaded_record(uid: impl Into<Uid>) -> SegmentRecord {
    SegmentRecord {
        uid: Some(uid.into()),
        data: Some(sample_payload()),
        is_fetching: false,
        failure: false,
    }
}

/// A record with a request for `uid` still in flight.
pub fn fetching_record(uid: impl Into<Uid>) -> SegmentRecord {
    SegmentRecord {
        uid: Some(uid.into()),
        data: None,
        is_fetching: true,
        failure: false,
    }
}

/// A record whose most recent fetch for `uid` failed.
pub fn failed_record(uid: impl Into<Uid>) -> SegmentRecord {
    SegmentRecord {
        uid: Some(uid.into()),
        data: None,
        is_fetching: false,
        failure: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anuvada_store::FetchStatus;

    #[test]
    fn fixtures_have_the_expected_statuses() {
        assert_eq!(loaded_record("art1").status(), FetchStatus::Loaded);
        assert_eq!(fetching_record("art1").status(), FetchStatus::Fetching);
        assert_eq!(failed_record("art1").status(), FetchStatus::Failed);
    }

    #[test]
    fn sample_payload_covers_three_buckets() {
        let payload = sample_payload();
        assert_eq!(payload.len(), 5);
        assert_eq!(
            payload.get("translation", "art1:1.1"),
            Some("All human beings are born free.")
        );
        assert_eq!(payload.get("comment", "art1:1.2"), None);
    }
}
