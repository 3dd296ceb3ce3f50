//! Object Lab Roster
//!
//! Mutable, single-owner state for the lab:
//! - [`CourseRegistry`]: idempotent course list
//! - [`GradeBook`]: chainable course → grade builder
//! - [`Student`] / [`AdvancedStudent`]: concrete types carrying the
//!   [`Profile`], [`HasCourses`] and [`Gradeable`] capabilities
//!
//! # Example
//!
//! ```rust
//! use olab_roster::{HasCourses, Profile, Student};
//!
//! let mut student = Student::new("Alice Johnson", 21).with_courses(["JavaScript"]);
//! assert!(student.add_course("Python").is_added());
//! assert!(!student.add_course("Python").is_added());
//! assert_eq!(student.total_courses(), 2);
//! assert_eq!(student.display_info(), "Student: Alice Johnson, Age: 21, Enrolled: Yes");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod gradebook;
pub mod registry;
pub mod student;

pub use error::RosterError;
pub use gradebook::{Grade, GradeBook, GradeLookup, AVERAGE_PLACES};
pub use registry::{AddOutcome, CourseRegistry, RemoveOutcome};
pub use student::{AdvancedStudent, Gradeable, HasCourses, Profile, Student};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
