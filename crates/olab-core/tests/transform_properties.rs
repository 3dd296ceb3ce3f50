//! Property tests for record transforms and the JSON codec

use olab_core::LabConfig;
use olab_model::{Record, RecordPath};
use olab_test_utils::{arb_key, arb_path, arb_record, arb_scores, arb_value, run_with_memory_sink};
use olab_transform::{
    average, clone_with_overrides, concat_lists, extract_path, merge_records, pick, PickField,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_clone_with_empty_overrides_is_identity(source in arb_record()) {
        prop_assert_eq!(clone_with_overrides(&source, &Record::new()), source);
    }

    #[test]
    fn prop_merge_right_wins(a in arb_record(), b in arb_record()) {
        let merged = merge_records(&a, &b);
        for (key, value) in &b {
            prop_assert_eq!(merged.get(key), Some(value));
        }
        for (key, value) in &a {
            if !b.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
        prop_assert!(merged.len() <= a.len() + b.len());
    }

    #[test]
    fn prop_pick_default_only_when_absent(
        source in arb_record(),
        key in arb_key(),
        default in arb_value(),
    ) {
        let picked = pick(&source, &[PickField::new(key.as_str()).or_default(default.clone())]);
        match source.get(&key) {
            Some(present) => prop_assert_eq!(picked.get(&key), Some(present)),
            None => prop_assert_eq!(picked.get(&key), Some(&default)),
        }
    }

    #[test]
    fn prop_pick_without_default_omits_absent(source in arb_record(), key in arb_key()) {
        let picked = pick(&source, &[PickField::new(key.as_str())]);
        prop_assert_eq!(picked.contains_key(&key), source.contains_key(&key));
    }

    #[test]
    fn prop_extract_path_on_empty_record_is_absent(path in arb_path()) {
        prop_assert!(extract_path(&Record::new(), &path).is_none());
    }

    #[test]
    fn prop_extract_single_segment_matches_get(source in arb_record(), key in arb_key()) {
        prop_assert_eq!(
            extract_path(&source, &RecordPath::single(key.as_str())),
            source.get(&key)
        );
    }

    #[test]
    fn prop_concat_lists(a in prop::collection::vec(any::<u8>(), 0..10),
                         b in prop::collection::vec(any::<u8>(), 0..10)) {
        let joined = concat_lists(&a, &b);
        prop_assert_eq!(joined.len(), a.len() + b.len());
        prop_assert_eq!(&joined[..a.len()], &a[..]);
        prop_assert_eq!(&joined[a.len()..], &b[..]);
    }

    #[test]
    fn prop_record_json_round_trip(record in arb_record()) {
        let json = record.to_json().unwrap();
        prop_assert_eq!(Record::from_json(&json).unwrap(), record);
    }

    #[test]
    fn prop_average_within_bounds(scores in arb_scores()) {
        let avg = average(&scores).unwrap();
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(avg >= min - 1e-9 && avg <= max + 1e-9);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_any_non_empty_scores_complete_the_run(scores in arb_scores()) {
        let (result, sink) = run_with_memory_sink(LabConfig::new().with_scores(scores));
        prop_assert!(result.is_ok());
        let titles = sink.titles();
        prop_assert_eq!(titles.last(), Some(&"Lab Completion Status"));
    }
}
