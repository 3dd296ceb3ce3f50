//! Error types for the roster
//!
//! Registry mutations never fail (they report an outcome instead); these
//! errors cover record decoding, strict grade lookups and graduation.

use chrono::NaiveDate;
use olab_model::ValueKind;

/// Roster error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RosterError {
    /// Required field absent from a student record
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// Field present with the wrong value kind
    #[error("field '{field}' has wrong kind: expected {expected}, found {found}")]
    WrongKind {
        field: &'static str,
        expected: ValueKind,
        found: ValueKind,
    },

    /// Age is not a non-negative whole number
    #[error("invalid age: {0}")]
    InvalidAge(f64),

    /// Grade is not a finite number
    #[error("invalid grade: {0}")]
    InvalidGrade(f64),

    /// Strict grade lookup for an unknown course
    #[error("grade not found: {0}")]
    GradeNotFound(String),

    /// Graduation requested twice
    #[error("{name} already graduated on {date}")]
    AlreadyGraduated { name: String, date: NaiveDate },
}
