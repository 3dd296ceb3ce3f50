//! Students and their capabilities
//!
//! Behaviour is attached through fixed traits rather than per-instance
//! functions:
//! - [`Profile`]: identity and the one-line info summary
//! - [`HasCourses`]: course registry operations
//! - [`Gradeable`]: grade book access
//!
//! [`Student`] has all three. [`AdvancedStudent`] has courses and a profile
//! and adds study and graduation.

use chrono::NaiveDate;
use olab_model::{Record, Value, ValueKind};

use crate::error::RosterError;
use crate::gradebook::GradeBook;
use crate::registry::{AddOutcome, CourseRegistry, RemoveOutcome};

/// Identity shared by every student kind
pub trait Profile {
    fn name(&self) -> &str;

    fn age(&self) -> u32;

    fn is_enrolled(&self) -> bool;

    /// `Student: {name}, Age: {age}, Enrolled: Yes|No`
    fn display_info(&self) -> String {
        format!(
            "Student: {}, Age: {}, Enrolled: {}",
            self.name(),
            self.age(),
            if self.is_enrolled() { "Yes" } else { "No" }
        )
    }
}

/// Course list capability
pub trait HasCourses {
    fn course_registry(&self) -> &CourseRegistry;

    fn course_registry_mut(&mut self) -> &mut CourseRegistry;

    fn add_course(&mut self, name: &str) -> AddOutcome {
        self.course_registry_mut().add_course(name)
    }

    fn remove_course(&mut self, name: &str) -> RemoveOutcome {
        self.course_registry_mut().remove_course(name)
    }

    fn total_courses(&self) -> usize {
        self.course_registry().total_courses()
    }

    fn courses_matching(&self, substring: &str) -> Vec<String> {
        self.course_registry().courses_matching(substring)
    }
}

/// Grade book capability
pub trait Gradeable {
    fn grade_book(&self) -> &GradeBook;

    fn grade_book_mut(&mut self) -> &mut GradeBook;

    /// Rounded mean grade, `0` without grades
    fn average_grade(&self) -> f64 {
        self.grade_book().get_average()
    }
}

/// Enrolled student with courses and grades
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    age: u32,
    enrolled: bool,
    courses: CourseRegistry,
    grades: GradeBook,
}

impl Student {
    /// Create enrolled student without courses
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            enrolled: true,
            courses: CourseRegistry::new(),
            grades: GradeBook::new(),
        }
    }

    #[must_use]
    pub fn with_courses<I, S>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.courses = CourseRegistry::with_courses(courses);
        self
    }

    #[must_use]
    pub fn with_enrolled(mut self, enrolled: bool) -> Self {
        self.enrolled = enrolled;
        self
    }

    #[inline]
    #[must_use]
    pub fn courses(&self) -> &[String] {
        self.courses.courses()
    }

    /// Data fields as a record: `name`, `age`, `enrolled`, `courses`
    ///
    /// Capabilities are not data and do not appear.
    #[must_use]
    pub fn to_record(&self) -> Record {
        Record::new()
            .with("name", self.name.as_str())
            .with("age", self.age)
            .with("enrolled", self.enrolled)
            .with("courses", &self.courses)
    }

    /// Rebuild a student from [`Student::to_record`] output
    ///
    /// # Errors
    /// Returns error if a field is missing, has the wrong kind, or the age is
    /// not a whole non-negative number
    pub fn from_record(record: &Record) -> Result<Self, RosterError> {
        let name = require(record, "name", ValueKind::String)?
            .as_str()
            .unwrap_or_default()
            .to_string();
        let age = whole_age(require(record, "age", ValueKind::Number)?)?;
        let enrolled = require(record, "enrolled", ValueKind::Bool)?
            .as_bool()
            .unwrap_or_default();

        let mut courses = CourseRegistry::new();
        for course in require(record, "courses", ValueKind::List)?
            .as_list()
            .unwrap_or_default()
        {
            match course {
                Value::String(name) => {
                    courses.add_course(name.as_str());
                }
                other => {
                    return Err(RosterError::WrongKind {
                        field: "courses",
                        expected: ValueKind::String,
                        found: other.kind(),
                    })
                }
            }
        }

        Ok(Self {
            name,
            age,
            enrolled,
            courses,
            grades: GradeBook::new(),
        })
    }
}

impl Profile for Student {
    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn is_enrolled(&self) -> bool {
        self.enrolled
    }
}

impl HasCourses for Student {
    fn course_registry(&self) -> &CourseRegistry {
        &self.courses
    }

    fn course_registry_mut(&mut self) -> &mut CourseRegistry {
        &mut self.courses
    }
}

impl Gradeable for Student {
    fn grade_book(&self) -> &GradeBook {
        &self.grades
    }

    fn grade_book_mut(&mut self) -> &mut GradeBook {
        &mut self.grades
    }
}

/// Student built from a shared behaviour set, able to study and graduate
#[derive(Debug, Clone, PartialEq)]
pub struct AdvancedStudent {
    name: String,
    age: u32,
    enrolled: bool,
    courses: CourseRegistry,
    graduation_date: Option<NaiveDate>,
}

impl AdvancedStudent {
    /// Create enrolled student with an empty course list
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            enrolled: true,
            courses: CourseRegistry::new(),
            graduation_date: None,
        }
    }

    #[must_use]
    pub fn study(&self, hours: u32) -> String {
        format!("{} studied for {hours} hours", self.name)
    }

    /// Leave enrollment and record the graduation date
    ///
    /// # Errors
    /// Returns [`RosterError::AlreadyGraduated`] on a second call; the first
    /// date is kept
    pub fn graduate(&mut self, on: NaiveDate) -> Result<String, RosterError> {
        if let Some(date) = self.graduation_date {
            return Err(RosterError::AlreadyGraduated {
                name: self.name.clone(),
                date,
            });
        }
        self.enrolled = false;
        self.graduation_date = Some(on);
        tracing::info!(student = %self.name, date = %on, "student graduated");
        Ok(format!("{} graduated on {}", self.name, on.format("%Y-%m-%d")))
    }

    #[inline]
    #[must_use]
    pub fn graduation_date(&self) -> Option<NaiveDate> {
        self.graduation_date
    }

    /// Data fields, with `graduationDate` once graduated
    #[must_use]
    pub fn to_record(&self) -> Record {
        let mut record = Record::new()
            .with("name", self.name.as_str())
            .with("age", self.age)
            .with("enrolled", self.enrolled)
            .with("courses", &self.courses);
        if let Some(date) = self.graduation_date {
            record.insert("graduationDate", date.format("%Y-%m-%d").to_string());
        }
        record
    }
}

impl Profile for AdvancedStudent {
    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn is_enrolled(&self) -> bool {
        self.enrolled
    }
}

impl HasCourses for AdvancedStudent {
    fn course_registry(&self) -> &CourseRegistry {
        &self.courses
    }

    fn course_registry_mut(&mut self) -> &mut CourseRegistry {
        &mut self.courses
    }
}

fn require<'a>(
    record: &'a Record,
    field: &'static str,
    expected: ValueKind,
) -> Result<&'a Value, RosterError> {
    let value = record.get(field).ok_or(RosterError::MissingField(field))?;
    if value.kind() == expected {
        Ok(value)
    } else {
        Err(RosterError::WrongKind {
            field,
            expected,
            found: value.kind(),
        })
    }
}

fn whole_age(value: &Value) -> Result<u32, RosterError> {
    let age = value.as_f64().unwrap_or(f64::NAN);
    if age.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&age) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(age as u32)
    } else {
        Err(RosterError::InvalidAge(age))
    }
}
