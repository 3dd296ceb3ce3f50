//! Lab Run Tests
//!
//! End-to-end runs against a memory sink: report order, rendered values and
//! abort behaviour.

use olab_core::{section_names, LabConfig, LabError, SinkEntry, ABORT_TITLE};
use olab_model::{Record, Value};
use olab_roster::Profile;
use olab_test_utils::{
    additional_info, advanced_student, complex_object, run_with_memory_sink, sample_student,
    SAMPLE_GRADES,
};
use olab_transform::merge_records;
use pretty_assertions::assert_eq;

const EXPECTED_TITLES: [&str; 37] = [
    "Student Name",
    "Student Age",
    "Student Info Method Result",
    "Student Object as JSON String",
    "Object Converted Back from JSON",
    "Comparison - Original vs Converted",
    "Destructured Name",
    "Destructured Courses",
    "Array of Scores",
    "First Two Scores (Destructured)",
    "Destructuring with Renaming",
    "Destructuring with Default Values",
    "Original Student Object",
    "Cloned Student with New Properties",
    "Original Courses",
    "New Courses",
    "All Courses Combined",
    "Student with Additional Info",
    "Total Courses Before Adding",
    "Adding New Course",
    "Total Courses After Adding",
    "Updated Courses List",
    "Adding Duplicate Course",
    "Removing Missing Course",
    "Courses with \"Data\"",
    "All Scores",
    "Total Score",
    "Average Score",
    "Advanced Array Analysis",
    "Object Keys",
    "Object Values",
    "Object Entries (first 3)",
    "Method Chaining Result - All Grades",
    "Grade Average",
    "Advanced Student",
    "Nested Destructuring",
    "Lab Completion Status",
];

fn default_run() -> olab_core::MemorySink {
    let (result, sink) = run_with_memory_sink(LabConfig::default());
    let summary = result.unwrap();
    assert_eq!(summary.entries_reported, EXPECTED_TITLES.len());
    sink
}

#[test]
fn test_report_order() {
    let sink = default_run();
    assert_eq!(sink.titles(), EXPECTED_TITLES.to_vec());
    assert_eq!(
        sink.sections(),
        vec![
            "PART 1: Understanding and Creating Objects",
            "PART 2: Working with JSON",
            "PART 3: Using Destructuring Assignment",
            "PART 4: The Spread Operator",
            "PART 5: Object Methods",
            "BONUS TASK: Calculate Average Score",
            "ADDITIONAL ADVANCED FEATURES",
            "LAB COMPLETION SUMMARY",
        ]
    );
    assert_eq!(sink.sections(), section_names());
}

#[test]
fn test_sections_precede_their_entries() {
    let sink = default_run();
    match sink.entries().first() {
        Some(SinkEntry::Section(name)) => assert!(name.starts_with("PART 1")),
        other => panic!("expected a section header first, got {other:?}"),
    }
}

#[test]
fn test_part_one_profile() {
    let sink = default_run();
    assert_eq!(sink.content("Student Name"), Some(&Value::from("Alice Johnson")));
    assert_eq!(sink.content("Student Age"), Some(&Value::from(21)));
    assert_eq!(
        sink.content("Student Info Method Result"),
        Some(&Value::from("Student: Alice Johnson, Age: 21, Enrolled: Yes"))
    );
}

#[test]
fn test_json_section() {
    let sink = default_run();
    assert_eq!(
        sink.content("Student Object as JSON String").and_then(Value::as_str),
        Some(
            r#"{"name":"Alice Johnson","age":21,"enrolled":true,"courses":["JavaScript","Python","Data Structures","Web Development"]}"#
        )
    );

    let comparison = sink
        .content("Comparison - Original vs Converted")
        .and_then(Value::as_record)
        .unwrap();
    assert_eq!(comparison.get("Data fields preserved"), Some(&Value::from(true)));
    assert_eq!(comparison.get("Original has display_info"), Some(&Value::from(true)));
    assert_eq!(comparison.get("Converted has display_info"), Some(&Value::from(false)));
    assert_eq!(
        comparison.get("Note"),
        Some(&Value::from("Methods are lost during JSON conversion!"))
    );
    assert_eq!(
        comparison.get("Rebuilt student info"),
        Some(&Value::from("Student: Alice Johnson, Age: 21, Enrolled: Yes"))
    );
}

#[test]
fn test_entries_match_fixtures() {
    let sink = default_run();
    let student = sample_student();
    let record = student.to_record();

    assert_eq!(sink.content("Student Name"), Some(&Value::from(student.name())));
    assert_eq!(
        sink.content("Original Student Object"),
        Some(&Value::from(record.clone()))
    );
    assert_eq!(
        sink.content("Student with Additional Info"),
        Some(&Value::from(merge_records(&record, &additional_info())))
    );

    let grades: Record = SAMPLE_GRADES.into_iter().collect();
    assert_eq!(
        sink.content("Method Chaining Result - All Grades"),
        Some(&Value::from(grades))
    );

    let advanced = sink.content("Advanced Student").and_then(Value::as_record).unwrap();
    assert_eq!(advanced.get("study"), Some(&Value::from(advanced_student().study(4))));

    let complex = complex_object();
    let courses = complex.get("courses").and_then(Value::as_list).unwrap();
    let nested = sink.content("Nested Destructuring").and_then(Value::as_record).unwrap();
    assert_eq!(nested.get("firstCourse"), courses.first());
}

#[test]
fn test_destructuring_section() {
    let sink = default_run();

    let first_two = Record::new().with("firstScore", 85).with("secondScore", 92);
    assert_eq!(
        sink.content("First Two Scores (Destructured)"),
        Some(&Value::from(first_two))
    );

    let renamed = Record::new().with("studentAge", 21).with("isEnrolled", true);
    assert_eq!(sink.content("Destructuring with Renaming"), Some(&Value::from(renamed)));

    let defaults = Record::new()
        .with("graduationYear", 2025)
        .with("gpa", Value::number(3.5).unwrap());
    assert_eq!(
        sink.content("Destructuring with Default Values"),
        Some(&Value::from(defaults))
    );
}

#[test]
fn test_spread_section_leaves_original_untouched() {
    let sink = default_run();
    let original = sink
        .content("Original Student Object")
        .and_then(Value::as_record)
        .unwrap();
    let cloned = sink
        .content("Cloned Student with New Properties")
        .and_then(Value::as_record)
        .unwrap();

    assert!(!original.contains_key("gpa"));
    assert_eq!(cloned.get("gpa"), Some(&Value::number(3.8).unwrap()));
    assert_eq!(cloned.get("name"), original.get("name"));

    let combined = sink.content("All Courses Combined").and_then(Value::as_list).unwrap();
    assert_eq!(combined.len(), 7);
    assert_eq!(combined.last(), Some(&Value::from("Mobile Development")));

    let complete = sink
        .content("Student with Additional Info")
        .and_then(Value::as_record)
        .unwrap();
    assert_eq!(complete.get("major"), Some(&Value::from("Computer Science")));
    assert_eq!(complete.get("semester"), Some(&Value::from(6)));
}

#[test]
fn test_object_methods_section() {
    let sink = default_run();
    assert_eq!(
        sink.content("Adding New Course"),
        Some(&Value::from("Course \"Artificial Intelligence\" added successfully!"))
    );
    assert_eq!(
        sink.content("Removing Missing Course"),
        Some(&Value::from("Course \"Underwater Basket Weaving\" not found!"))
    );
    let updated = sink.content("Updated Courses List").and_then(Value::as_list).unwrap();
    assert_eq!(updated.last(), Some(&Value::from("Artificial Intelligence")));
}

#[test]
fn test_score_analysis_filters_in_input_order() {
    let sink = default_run();
    let analysis = sink
        .content("Advanced Array Analysis")
        .and_then(Value::as_record)
        .unwrap();

    assert_eq!(
        analysis.get("High Scores (>=90)"),
        Some(&Value::from(vec![92, 90, 95]))
    );
    assert_eq!(analysis.get("Low Scores (<80)"), Some(&Value::from(vec![78])));
    assert_eq!(analysis.get("Passed All (>=70)"), Some(&Value::from(true)));
    assert_eq!(analysis.get("Has Exceptional Score (>=95)"), Some(&Value::from(true)));
}

#[test]
fn test_advanced_features() {
    let sink = default_run();
    assert_eq!(
        sink.content("Object Keys"),
        Some(&Value::from(vec!["name", "age", "enrolled", "courses"]))
    );

    let entries = sink.content("Object Entries (first 3)").and_then(Value::as_list).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0], Value::List(vec![Value::from("name"), Value::from("Alice Johnson")]));

    let grades = Record::new()
        .with("JavaScript", 92)
        .with("Python", 88)
        .with("Data Structures", 95)
        .with("Web Development", 90);
    assert_eq!(
        sink.content("Method Chaining Result - All Grades"),
        Some(&Value::from(grades))
    );

    let advanced = sink.content("Advanced Student").and_then(Value::as_record).unwrap();
    assert_eq!(
        advanced.get("graduate"),
        Some(&Value::from("Jordan Lee graduated on 2025-06-01"))
    );
    let profile = advanced.get("profile").and_then(Value::as_record).unwrap();
    assert_eq!(profile.get("enrolled"), Some(&Value::from(false)));
    assert_eq!(profile.get("graduationDate"), Some(&Value::from("2025-06-01")));
}

#[test]
fn test_configured_scores_builder_chain() {
    let config = LabConfig::new()
        .with_scores(vec![80.0, 90.0])
        .with_new_courses(vec!["Compilers".to_string()]);
    let (result, sink) = run_with_memory_sink(config);
    result.unwrap();

    assert_eq!(sink.content("Average Score"), Some(&Value::from("85.00")));
    assert_eq!(sink.content("New Courses"), Some(&Value::from(vec!["Compilers"])));
    assert_eq!(sink.content("Total Score"), Some(&Value::from(170)));
}

#[test]
fn test_single_score_omits_second_destructured_score() {
    let (result, sink) = run_with_memory_sink(LabConfig::new().with_scores(vec![64.0]));
    result.unwrap();

    let first_two = sink
        .content("First Two Scores (Destructured)")
        .and_then(Value::as_record)
        .unwrap();
    assert_eq!(first_two.get("firstScore"), Some(&Value::from(64)));
    assert!(first_two.get("secondScore").is_none());
}

#[test]
fn test_empty_scores_abort() {
    let (result, sink) = run_with_memory_sink(LabConfig::new().with_scores(vec![]));
    let err = result.unwrap_err();

    assert_eq!(err.section(), Some("BONUS TASK: Calculate Average Score"));
    assert!(matches!(err.root_cause(), LabError::Aggregate(_)));

    let titles = sink.titles();
    assert_eq!(titles.last(), Some(&ABORT_TITLE));
    assert!(titles.contains(&"Total Score"));
    assert!(!titles.contains(&"Average Score"));
    assert!(!sink.sections().contains(&"ADDITIONAL ADVANCED FEATURES"));

    let message = sink.content(ABORT_TITLE).and_then(Value::as_str).unwrap();
    assert!(message.contains("empty input"));
}
