//! Chainable grade book
//!
//! [`GradeBook::add_grade`] returns `&mut Self` so recordings chain:
//!
//! ```
//! # use olab_roster::GradeBook;
//! let mut book = GradeBook::new();
//! book.add_grade("JavaScript", 92).add_grade("Python", 88);
//! assert_eq!(book.get_average(), 90.0);
//! ```

use std::fmt::{self, Display, Formatter};

use indexmap::IndexMap;
use olab_model::{Record, Value};
use olab_transform::{average, round_to};

use crate::error::RosterError;

/// Decimal places used by [`GradeBook::get_average`]
pub const AVERAGE_PLACES: u32 = 2;

/// Finite grade value
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Grade(f64);

impl Grade {
    /// # Errors
    /// Returns [`RosterError::InvalidGrade`] for `NaN` and infinities
    #[inline]
    pub fn new(value: f64) -> Result<Self, RosterError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(RosterError::InvalidGrade(value))
        }
    }

    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<i32> for Grade {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl From<u32> for Grade {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl TryFrom<f64> for Grade {
    type Error = RosterError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Grade lookup result
///
/// A missing course is a value, not a failure. A recorded `0` is still
/// [`GradeLookup::Recorded`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradeLookup {
    Recorded(f64),
    NoGradeRecorded,
}

impl Display for GradeLookup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recorded(grade) => write!(f, "{}", Value::Number(*grade)),
            Self::NoGradeRecorded => f.write_str("No grade recorded"),
        }
    }
}

impl From<GradeLookup> for Value {
    fn from(lookup: GradeLookup) -> Self {
        match lookup {
            GradeLookup::Recorded(grade) => Value::Number(grade),
            GradeLookup::NoGradeRecorded => Value::String(lookup.to_string()),
        }
    }
}

/// Course → grade mapping owned by one builder
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeBook {
    grades: IndexMap<String, f64>,
}

impl GradeBook {
    /// Create new empty grade book
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a grade, returning the same book for chaining
    pub fn add_grade(&mut self, course: impl Into<String>, grade: impl Into<Grade>) -> &mut Self {
        let course = course.into();
        let grade = grade.into().value();
        tracing::debug!(course = %course, grade, "grade recorded");
        self.grades.insert(course, grade);
        self
    }

    /// Grade for `course`, or the [`GradeLookup::NoGradeRecorded`] sentinel
    #[must_use]
    pub fn get_grade(&self, course: &str) -> GradeLookup {
        self.grades
            .get(course)
            .map_or(GradeLookup::NoGradeRecorded, |g| GradeLookup::Recorded(*g))
    }

    /// Strict lookup
    ///
    /// # Errors
    /// Returns [`RosterError::GradeNotFound`] for an unknown course
    pub fn require_grade(&self, course: &str) -> Result<f64, RosterError> {
        self.grades
            .get(course)
            .copied()
            .ok_or_else(|| RosterError::GradeNotFound(course.to_string()))
    }

    /// Mean of all grades rounded to [`AVERAGE_PLACES`], `0` when empty
    ///
    /// Unlike [`olab_transform::average`], an empty book is a display case,
    /// not an error.
    #[must_use]
    pub fn get_average(&self) -> f64 {
        let grades: Vec<f64> = self.grades.values().copied().collect();
        average(&grades).map_or(0.0, |avg| round_to(avg, AVERAGE_PLACES))
    }

    /// Fresh copy of every grade as a record
    #[must_use]
    pub fn get_all_grades(&self) -> Record {
        self.grades
            .iter()
            .map(|(course, grade)| (course.clone(), Value::Number(*grade)))
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.grades.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }
}
