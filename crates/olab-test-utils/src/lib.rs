//! Testing utilities for Object Lab workspace
//!
//! Shared fixtures, a deterministic runner harness and proptest strategies.

#![allow(missing_docs)]

use chrono::NaiveDate;
use olab_core::{LabConfig, LabError, LabRunner, LabSummary, MemorySink};
use olab_model::{Record, RecordPath, Value};
use proptest::prelude::*;

pub use olab_core::fixtures::{
    additional_info, advanced_student, complex_object, sample_student, SAMPLE_GRADES,
};

/// Date every harness run graduates on
pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

/// Run the lab against a fresh [`MemorySink`]
pub fn run_with_memory_sink(config: LabConfig) -> (Result<LabSummary, LabError>, MemorySink) {
    let mut sink = MemorySink::new();
    let result = LabRunner::new(config).with_date(fixed_date()).run(&mut sink);
    (result, sink)
}

/// Record keys: short lowercase identifiers
pub fn arb_key() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

/// Finite numbers, integral and fractional
pub fn arb_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        (-1_000_000i32..1_000_000).prop_map(f64::from),
        -1.0e6f64..1.0e6,
    ]
}

/// Values nested up to three levels deep
pub fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        arb_number().prop_map(Value::Number),
        "[a-zA-Z ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::vec((arb_key(), inner), 0..4)
                .prop_map(|pairs| Value::Record(pairs.into_iter().collect())),
        ]
    })
}

pub fn arb_record() -> impl Strategy<Value = Record> {
    prop::collection::vec((arb_key(), arb_value()), 0..6)
        .prop_map(|pairs| pairs.into_iter().collect())
}

pub fn arb_path() -> impl Strategy<Value = RecordPath> {
    prop::collection::vec(arb_key(), 1..4).prop_map(RecordPath::from)
}

/// Scores as a lab config would carry them
pub fn arb_scores() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((0u32..=100).prop_map(f64::from), 1..12)
}
