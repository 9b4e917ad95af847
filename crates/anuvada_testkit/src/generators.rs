//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random identifiers, payloads, record
//! states and events.

use anuvada_store::{DataType, SegmentData, SegmentEvent, SegmentId, SegmentRecord, Uid};
use proptest::prelude::*;

/// Strategy for generating record uids.
pub fn uid_strategy() -> impl Strategy<Value = Uid> {
    prop::string::string_regex("[a-z][a-z0-9-]{0,15}")
        .expect("Invalid regex")
        .prop_map(Uid::new)
}

/// Strategy for generating data type names.
///
/// Biased towards the categories the editor actually serves, with a tail of
/// arbitrary names since the set is open.
pub fn data_type_strategy() -> impl Strategy<Value = DataType> {
    prop_oneof![
        3 => Just(DataType::new("root")),
        3 => Just(DataType::new("translation")),
        2 => Just(DataType::new("comment")),
        1 => prop::string::string_regex("[a-z]{1,12}")
            .expect("Invalid regex")
            .prop_map(DataType::new),
    ]
}

/// Strategy for generating segment ids.
pub fn segment_id_strategy() -> impl Strategy<Value = SegmentId> {
    prop::string::string_regex("[a-z0-9]{1,8}(:[0-9]{1,3}\\.[0-9]{1,3})?")
        .expect("Invalid regex")
        .prop_map(SegmentId::new)
}

/// Strategy for generating payloads with up to a dozen values.
pub fn segment_data_strategy() -> impl Strategy<Value = SegmentData> {
    prop::collection::vec(
        (data_type_strategy(), segment_id_strategy(), "[ -~]{0,40}"),
        0..12,
    )
    .prop_map(|entries| {
        let mut data = SegmentData::new();
        for (data_type, segment_id, value) in entries {
            data.insert(data_type, segment_id, value);
        }
        data
    })
}

/// Strategy for generating arbitrary record states, valid or mid-flight.
pub fn segment_record_strategy() -> impl Strategy<Value = SegmentRecord> {
    (
        prop::option::of(uid_strategy()),
        prop::option::of(segment_data_strategy()),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(uid, data, is_fetching, failure)| SegmentRecord {
            uid,
            data,
            is_fetching,
            failure,
        })
}

/// Strategy for generating any store event.
pub fn segment_event_strategy() -> impl Strategy<Value = SegmentEvent> {
    prop_oneof![
        uid_strategy().prop_map(SegmentEvent::request_started),
        (uid_strategy(), segment_data_strategy())
            .prop_map(|(uid, payload)| SegmentEvent::request_succeeded(uid, payload)),
        uid_strategy().prop_map(SegmentEvent::request_failed),
        (data_type_strategy(), segment_id_strategy(), "[ -~]{0,40}").prop_map(
            |(data_type, segment_id, value)| SegmentEvent::field_edited(
                data_type, segment_id, value
            )
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_payloads_are_consistent(data in segment_data_strategy()) {
            prop_assert_eq!(data.is_empty(), data.len() == 0);
        }

        #[test]
        fn lifecycle_events_expose_their_uid(event in segment_event_strategy()) {
            match &event {
                SegmentEvent::FieldEdited { .. } => prop_assert!(event.uid().is_none()),
                _ => prop_assert!(event.uid().is_some()),
            }
        }
    }
}
