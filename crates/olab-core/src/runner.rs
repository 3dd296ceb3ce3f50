//! Lab runner
//!
//! Sequences the lab sections and forwards every result to a
//! [`PresentationSink`]:
//! 1. Build the sample student and score list
//! 2. Run each section in order, announcing it to the sink first
//! 3. Stop at the first failing section, report it once as "Lab Aborted"

use chrono::NaiveDate;
use olab_model::{Record, RecordPath, ScoreList, Value};
use olab_roster::{Gradeable, HasCourses, Profile, Student};
use olab_transform::{
    all_satisfy, any_satisfy, average, clone_with_overrides, concat_lists, extract_path,
    filter_by, format_fixed, merge_records, pick, split_first, sum, take_leading, PickField,
};

use crate::config::LabConfig;
use crate::error::LabError;
use crate::fixtures;
use crate::sink::PresentationSink;

/// Title of the entry reported when a run aborts
pub const ABORT_TITLE: &str = "Lab Aborted";

type SectionFn = fn(&LabRunner, &mut LabState, &mut Reporter<'_>) -> Result<(), LabError>;

/// Sections in report order
const SECTIONS: [(&str, SectionFn); 8] = [
    ("PART 1: Understanding and Creating Objects", LabRunner::creating_objects),
    ("PART 2: Working with JSON", LabRunner::working_with_json),
    ("PART 3: Using Destructuring Assignment", LabRunner::destructuring),
    ("PART 4: The Spread Operator", LabRunner::spread_operator),
    ("PART 5: Object Methods", LabRunner::object_methods),
    ("BONUS TASK: Calculate Average Score", LabRunner::average_score),
    ("ADDITIONAL ADVANCED FEATURES", LabRunner::advanced_features),
    ("LAB COMPLETION SUMMARY", LabRunner::completion_summary),
];

/// Names of every section, in run order
#[must_use]
pub fn section_names() -> Vec<&'static str> {
    SECTIONS.iter().map(|(name, _)| *name).collect()
}

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabSummary {
    /// Sections that ran to completion
    pub sections_completed: usize,
    /// Entries forwarded to the sink
    pub entries_reported: usize,
}

/// Runs the lab once per [`LabRunner::run`] call against fresh state
#[derive(Debug, Clone)]
pub struct LabRunner {
    config: LabConfig,
    today: NaiveDate,
}

impl LabRunner {
    /// Create runner dated today
    #[must_use]
    pub fn new(config: LabConfig) -> Self {
        Self {
            config,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Fix the date used for graduation
    #[inline]
    #[must_use]
    pub fn with_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    /// Run every section against `sink`
    ///
    /// # Errors
    /// Returns the first failure, after reporting it to the sink under
    /// [`ABORT_TITLE`]. Section failures are wrapped in
    /// [`LabError::SectionFailed`].
    pub fn run(&self, sink: &mut dyn PresentationSink) -> Result<LabSummary, LabError> {
        let mut out = Reporter::new(sink);
        match self.run_sections(&mut out) {
            Ok(sections_completed) => {
                tracing::info!(
                    "Lab completed: {} sections, {} entries",
                    sections_completed,
                    out.entries
                );
                Ok(LabSummary {
                    sections_completed,
                    entries_reported: out.entries,
                })
            }
            Err(e) => {
                tracing::error!("Lab aborted: {}", e);
                out.report(ABORT_TITLE, e.to_string());
                Err(e)
            }
        }
    }

    fn run_sections(&self, out: &mut Reporter<'_>) -> Result<usize, LabError> {
        self.config.validate()?;
        let mut state = LabState::new(&self.config)?;

        for (index, (name, section)) in SECTIONS.iter().enumerate() {
            tracing::info!("Running section {}/{}: {}", index + 1, SECTIONS.len(), name);
            out.section(name);
            section(self, &mut state, out).map_err(|e| LabError::in_section(name, e))?;
        }
        Ok(SECTIONS.len())
    }

    fn creating_objects(
        &self,
        state: &mut LabState,
        out: &mut Reporter<'_>,
    ) -> Result<(), LabError> {
        let student = &state.student;
        out.report("Student Name", student.name());
        out.report("Student Age", student.age());
        out.report("Student Info Method Result", student.display_info());
        Ok(())
    }

    fn working_with_json(
        &self,
        state: &mut LabState,
        out: &mut Reporter<'_>,
    ) -> Result<(), LabError> {
        let record = state.student.to_record();
        let json = record.to_json()?;
        out.report("Student Object as JSON String", json.as_str());

        let parsed = Record::from_json(&json)?;
        out.report("Object Converted Back from JSON", parsed.clone());

        let rebuilt = Student::from_record(&parsed)?;
        let comparison = Record::new()
            .with("Data fields preserved", parsed == record)
            .with("Original has display_info", true)
            .with("Converted has display_info", false)
            .with("Rebuilt student info", rebuilt.display_info())
            .with("Note", "Methods are lost during JSON conversion!");
        out.report("Comparison - Original vs Converted", comparison);
        Ok(())
    }

    fn destructuring(&self, state: &mut LabState, out: &mut Reporter<'_>) -> Result<(), LabError> {
        let record = state.student.to_record();

        let basics = pick(&record, &[PickField::new("name"), PickField::new("courses")]);
        out.report("Destructured Name", field(&basics, "name"));
        out.report("Destructured Courses", field(&basics, "courses"));

        out.report("Array of Scores", &state.scores);
        let first_two: Record = ["firstScore", "secondScore"]
            .into_iter()
            .zip(take_leading(state.scores.as_slice(), 2))
            .map(|(key, score)| (key, Value::Number(score)))
            .collect();
        out.report("First Two Scores (Destructured)", first_two);

        let renamed = pick(
            &record,
            &[
                PickField::new("age").renamed("studentAge"),
                PickField::new("enrolled").renamed("isEnrolled"),
            ],
        );
        out.report("Destructuring with Renaming", renamed);

        let defaults = &self.config.defaults;
        let filled = pick(
            &record,
            &[
                PickField::new("graduationYear").or_default(defaults.graduation_year),
                PickField::new("gpa").or_default(Value::number(defaults.gpa)?),
            ],
        );
        out.report("Destructuring with Default Values", filled);
        Ok(())
    }

    fn spread_operator(
        &self,
        state: &mut LabState,
        out: &mut Reporter<'_>,
    ) -> Result<(), LabError> {
        let record = state.student.to_record();
        let overrides = Record::new()
            .with("graduationYear", self.config.clone_overrides.graduation_year)
            .with("gpa", Value::number(self.config.clone_overrides.gpa)?);
        let cloned = clone_with_overrides(&record, &overrides);

        out.report("Original Student Object", record.clone());
        out.report("Cloned Student with New Properties", cloned);

        let original_courses = state.student.courses().to_vec();
        out.report("Original Courses", original_courses.clone());
        out.report("New Courses", self.config.new_courses.clone());
        out.report(
            "All Courses Combined",
            concat_lists(&original_courses, &self.config.new_courses),
        );

        let complete = merge_records(&record, &fixtures::additional_info());
        out.report("Student with Additional Info", complete);
        Ok(())
    }

    fn object_methods(&self, state: &mut LabState, out: &mut Reporter<'_>) -> Result<(), LabError> {
        let student = &mut state.student;
        out.report("Total Courses Before Adding", count(student.total_courses()));
        out.report(
            "Adding New Course",
            student.add_course("Artificial Intelligence").to_string(),
        );
        out.report("Total Courses After Adding", count(student.total_courses()));
        out.report("Updated Courses List", student.courses().to_vec());
        out.report("Adding Duplicate Course", student.add_course("JavaScript").to_string());
        out.report(
            "Removing Missing Course",
            student.remove_course("Underwater Basket Weaving").to_string(),
        );
        out.report("Courses with \"Data\"", student.courses_matching("Data"));
        Ok(())
    }

    fn average_score(&self, state: &mut LabState, out: &mut Reporter<'_>) -> Result<(), LabError> {
        let scores = state.scores.as_slice();
        let t = self.config.thresholds;

        out.report("All Scores", &state.scores);
        out.report("Total Score", Value::number(sum(scores))?);
        let avg = average(scores)?;
        out.report("Average Score", format_fixed(avg, self.config.decimal_places));

        let analysis = Record::new()
            .with(
                format!("High Scores (>={})", Value::Number(t.high)),
                numbers(filter_by(scores, |s| *s >= t.high)),
            )
            .with(
                format!("Low Scores (<{})", Value::Number(t.low)),
                numbers(filter_by(scores, |s| *s < t.low)),
            )
            .with(
                format!("Passed All (>={})", Value::Number(t.pass)),
                all_satisfy(scores, |s| *s >= t.pass),
            )
            .with(
                format!("Has Exceptional Score (>={})", Value::Number(t.exceptional)),
                any_satisfy(scores, |s| *s >= t.exceptional),
            );
        out.report("Advanced Array Analysis", analysis);
        Ok(())
    }

    fn advanced_features(
        &self,
        state: &mut LabState,
        out: &mut Reporter<'_>,
    ) -> Result<(), LabError> {
        let record = state.student.to_record();
        out.report("Object Keys", record.keys().map(Value::from).collect::<Vec<_>>());
        out.report("Object Values", record.values().cloned().collect::<Vec<_>>());
        let entries: Vec<Value> = record
            .entries()
            .take(3)
            .map(|(key, value)| Value::List(vec![Value::from(key), value.clone()]))
            .collect();
        out.report("Object Entries (first 3)", entries);

        let [(c1, g1), (c2, g2), (c3, g3), (c4, g4)] = fixtures::SAMPLE_GRADES;
        state
            .student
            .grade_book_mut()
            .add_grade(c1, g1)
            .add_grade(c2, g2)
            .add_grade(c3, g3)
            .add_grade(c4, g4);
        out.report(
            "Method Chaining Result - All Grades",
            state.student.grade_book().get_all_grades(),
        );
        out.report(
            "Grade Average",
            format_fixed(state.student.average_grade(), self.config.decimal_places),
        );

        let mut advanced = fixtures::advanced_student();
        let studied = advanced.study(4);
        let graduated = advanced.graduate(self.today)?;
        out.report(
            "Advanced Student",
            Record::new()
                .with("study", studied)
                .with("graduate", graduated)
                .with("profile", advanced.to_record()),
        );

        out.report("Nested Destructuring", nested_destructure(&fixtures::complex_object()));
        Ok(())
    }

    fn completion_summary(
        &self,
        _state: &mut LabState,
        out: &mut Reporter<'_>,
    ) -> Result<(), LabError> {
        let summary: Record = [
            ("Part 1 - Object Creation", "✅ Built a typed student with profile capabilities"),
            ("Part 2 - JSON Operations", "✅ Round-tripped the student record through JSON"),
            ("Part 3 - Destructuring", "✅ Picked, renamed and default-filled fields"),
            ("Part 4 - Spread Operator", "✅ Cloned and merged records, concatenated lists"),
            ("Part 5 - Object Methods", "✅ Managed courses through the registry capability"),
            ("Bonus Task", "✅ Aggregated scores with an explicit empty-input failure"),
            ("Advanced Features", "✅ Enumerated entries, chained grades, nested lookups"),
        ]
        .into_iter()
        .collect();
        out.report("Lab Completion Status", summary);
        Ok(())
    }
}

/// Mutable state threaded through the sections of one run
struct LabState {
    student: Student,
    scores: ScoreList,
}

impl LabState {
    fn new(config: &LabConfig) -> Result<Self, LabError> {
        Ok(Self {
            student: fixtures::sample_student(),
            scores: ScoreList::new(config.scores.clone())?,
        })
    }
}

/// Sink wrapper counting and logging entries
struct Reporter<'a> {
    sink: &'a mut dyn PresentationSink,
    entries: usize,
}

impl<'a> Reporter<'a> {
    fn new(sink: &'a mut dyn PresentationSink) -> Self {
        Self { sink, entries: 0 }
    }

    fn section(&mut self, name: &str) {
        self.sink.section(name);
    }

    fn report(&mut self, title: &str, content: impl Into<Value>) {
        let content = content.into();
        tracing::debug!("Reporting '{}' ({})", title, content.kind());
        self.sink.report(title, &content);
        self.entries += 1;
    }
}

/// `userName`, `theme`, `notifications`, `firstCourse` and `otherCourses`
/// from the nested profile record; absent paths leave their keys out
fn nested_destructure(complex: &Record) -> Record {
    let profile_path: RecordPath = ["user", "profile"].into_iter().collect();
    let mut nested = Record::new();

    if let Some(profile) = extract_path(complex, &profile_path).and_then(Value::as_record) {
        nested.extend(pick(profile, &[PickField::new("name").renamed("userName")]));
    }
    if let Some(settings) =
        extract_path(complex, &profile_path.child("settings")).and_then(Value::as_record)
    {
        nested.extend(pick(
            settings,
            &[PickField::new("theme"), PickField::new("notifications")],
        ));
    }

    let courses = complex
        .get("courses")
        .and_then(Value::as_list)
        .unwrap_or_default();
    let (first, rest) = split_first(courses);
    if let Some(first) = first {
        nested.insert("firstCourse", first);
    }
    nested.insert("otherCourses", rest);
    nested
}

fn field(record: &Record, key: &str) -> Value {
    record.get(key).cloned().unwrap_or(Value::Null)
}

fn numbers(xs: Vec<f64>) -> Value {
    Value::List(xs.into_iter().map(Value::Number).collect())
}

#[allow(clippy::cast_precision_loss)]
fn count(n: usize) -> Value {
    Value::Number(n as f64)
}
