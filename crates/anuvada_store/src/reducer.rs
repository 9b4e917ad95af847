//! The pure state-reduction function for segment records.
//!
//! `reduce` is the only place record state transitions happen. Callers drive
//! it by dispatching events serially; [`crate::SegmentStore`] is the usual
//! host. It never performs I/O, never panics, and never mutates its inputs.

use crate::data::SegmentData;
use crate::event::SegmentEvent;
use crate::record::SegmentRecord;

/// Applies one event to the record state, returning the next state.
///
/// Transitions:
/// - `RequestStarted` discards any prior data and failure, marks the slot
///   fetching and adopts the event's uid. A refetch of the same uid clears
///   stale data before the new payload arrives.
/// - `RequestSucceeded` installs the payload and settles the fetch.
/// - `RequestFailed` settles the fetch with `failure` set, leaving `data`
///   exactly as it was.
/// - `FieldEdited` replaces a single leaf of the payload, creating missing
///   containers on demand; uid and fetch status are untouched.
#[must_use]
pub fn reduce(state: &SegmentRecord, event: &SegmentEvent) -> SegmentRecord {
    match event {
        SegmentEvent::RequestStarted { uid } => SegmentRecord {
            uid: Some(uid.clone()),
            data: None,
            failure: false,
            is_fetching: true,
        },
        SegmentEvent::RequestSucceeded { uid, payload } => SegmentRecord {
            uid: Some(uid.clone()),
            data: Some(payload.clone()),
            failure: false,
            is_fetching: false,
        },
        SegmentEvent::RequestFailed { uid } => SegmentRecord {
            uid: Some(uid.clone()),
            data: state.data.clone(),
            failure: true,
            is_fetching: false,
        },
        SegmentEvent::FieldEdited {
            data_type,
            segment_id,
            value,
        } => {
            let data = match &state.data {
                Some(data) => data.with_value(data_type, segment_id, value.clone()),
                None => SegmentData::new().with_value(data_type, segment_id, value.clone()),
            };
            SegmentRecord {
                data: Some(data),
                ..state.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FetchStatus;
    use crate::types::Uid;

    fn translation_pair() -> SegmentData {
        let mut data = SegmentData::new();
        data.insert("translation", "seg1", "a");
        data.insert("translation", "seg2", "b");
        data
    }

    #[test]
    fn request_started_resets_the_slate() {
        let dirty = SegmentRecord {
            uid: Some(Uid::new("old")),
            data: Some(translation_pair()),
            is_fetching: false,
            failure: true,
        };

        let next = reduce(&dirty, &SegmentEvent::request_started("new"));

        assert_eq!(next.uid, Some(Uid::new("new")));
        assert_eq!(next.data, None);
        assert!(!next.failure);
        assert!(next.is_fetching);
        assert_eq!(next.status(), FetchStatus::Fetching);
    }

    #[test]
    fn refetch_of_same_uid_discards_stale_data() {
        let loaded = reduce(
            &SegmentRecord::default(),
            &SegmentEvent::request_succeeded("u1", translation_pair()),
        );

        let refetching = reduce(&loaded, &SegmentEvent::request_started("u1"));

        assert_eq!(refetching.uid, Some(Uid::new("u1")));
        assert_eq!(refetching.data, None);
        assert!(refetching.is_fetching);
    }

    #[test]
    fn success_installs_payload_and_settles() {
        let fetching = reduce(&SegmentRecord::default(), &SegmentEvent::request_started("u1"));

        let next = reduce(
            &fetching,
            &SegmentEvent::request_succeeded("u1", translation_pair()),
        );

        assert_eq!(next.uid, Some(Uid::new("u1")));
        assert_eq!(next.value("translation", "seg1"), Some("a"));
        assert!(!next.failure);
        assert!(!next.is_fetching);
        assert_eq!(next.status(), FetchStatus::Loaded);
    }

    #[test]
    fn failure_settles_without_touching_data() {
        let loaded = reduce(
            &SegmentRecord::default(),
            &SegmentEvent::request_succeeded("u1", translation_pair()),
        );

        let next = reduce(&loaded, &SegmentEvent::request_failed("u1"));

        assert!(next.failure);
        assert!(!next.is_fetching);
        assert_eq!(next.uid, Some(Uid::new("u1")));
        assert_eq!(next.data, loaded.data);
        assert_eq!(next.status(), FetchStatus::Failed);
    }

    #[test]
    fn failure_after_request_leaves_data_empty() {
        let fetching = reduce(&SegmentRecord::default(), &SegmentEvent::request_started("u1"));

        let next = reduce(&fetching, &SegmentEvent::request_failed("u1"));

        assert_eq!(next.data, None);
        assert!(next.failure);
        assert_eq!(next.status(), FetchStatus::Failed);
    }

    #[test]
    fn edit_is_a_minimal_merge() {
        let loaded = reduce(
            &SegmentRecord::default(),
            &SegmentEvent::request_succeeded("u1", translation_pair()),
        );

        let next = reduce(
            &loaded,
            &SegmentEvent::field_edited("translation", "seg1", "x"),
        );

        assert_eq!(next.value("translation", "seg1"), Some("x"));
        assert_eq!(next.value("translation", "seg2"), Some("b"));
        assert_eq!(next.data.as_ref().map(SegmentData::len), Some(2));
    }

    #[test]
    fn edit_on_empty_data_materializes_containers() {
        let next = reduce(
            &SegmentRecord::default(),
            &SegmentEvent::field_edited("root", "seg1", "v"),
        );

        assert_eq!(next.value("root", "seg1"), Some("v"));
        assert_eq!(next.data.as_ref().map(SegmentData::len), Some(1));
    }

    #[test]
    fn edit_leaves_other_data_types_untouched() {
        let mut payload = translation_pair();
        payload.insert("root", "seg1", "r1");
        payload.insert("comment", "seg1", "c1");
        let loaded = reduce(
            &SegmentRecord::default(),
            &SegmentEvent::request_succeeded("u1", payload),
        );

        let next = reduce(
            &loaded,
            &SegmentEvent::field_edited("translation", "seg1", "x"),
        );

        assert_eq!(next.value("root", "seg1"), Some("r1"));
        assert_eq!(next.value("comment", "seg1"), Some("c1"));
    }

    #[test]
    fn edit_never_changes_uid_or_fetch_status() {
        let loaded = reduce(
            &SegmentRecord::default(),
            &SegmentEvent::request_succeeded("u1", translation_pair()),
        );

        let next = reduce(
            &loaded,
            &SegmentEvent::field_edited("translation", "seg2", "y"),
        );

        assert_eq!(next.uid, loaded.uid);
        assert_eq!(next.is_fetching, loaded.is_fetching);
        assert_eq!(next.failure, loaded.failure);
        assert_eq!(next.status(), FetchStatus::Loaded);
    }

    // The full navigation cycle: load, edit, navigate away, fail.
    #[test]
    fn full_navigation_cycle() {
        let s0 = SegmentRecord::default();

        let s1 = reduce(&s0, &SegmentEvent::request_started("uid-1"));
        assert_eq!(s1.uid, Some(Uid::new("uid-1")));
        assert_eq!(s1.data, None);
        assert!(!s1.failure);
        assert!(s1.is_fetching);

        let mut payload = SegmentData::new();
        payload.insert("translation", "s1", "hello");
        let s2 = reduce(&s1, &SegmentEvent::request_succeeded("uid-1", payload));
        assert_eq!(s2.uid, Some(Uid::new("uid-1")));
        assert_eq!(s2.value("translation", "s1"), Some("hello"));
        assert!(!s2.failure);
        assert!(!s2.is_fetching);

        let s3 = reduce(&s2, &SegmentEvent::field_edited("translation", "s1", "hi"));
        assert_eq!(s3.value("translation", "s1"), Some("hi"));
        assert_eq!(s3.uid, s2.uid);
        assert_eq!(s3.failure, s2.failure);
        assert_eq!(s3.is_fetching, s2.is_fetching);

        let s4 = reduce(&s3, &SegmentEvent::request_started("uid-2"));
        assert_eq!(s4.uid, Some(Uid::new("uid-2")));
        assert_eq!(s4.data, None);
        assert!(!s4.failure);
        assert!(s4.is_fetching);

        let s5 = reduce(&s4, &SegmentEvent::request_failed("uid-2"));
        assert_eq!(s5.uid, Some(Uid::new("uid-2")));
        assert_eq!(s5.data, None);
        assert!(s5.failure);
        assert!(!s5.is_fetching);
    }
}
