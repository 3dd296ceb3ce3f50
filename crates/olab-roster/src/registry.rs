//! Course registry
//!
//! Provides [`CourseRegistry`], an owned course list with idempotent add and
//! tolerant remove.

use std::fmt::{self, Display, Formatter};

use olab_model::{CourseList, Value};

/// Ordered list of course names with exact-match deduplication
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseRegistry {
    courses: CourseList,
}

impl CourseRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            courses: CourseList::new(),
        }
    }

    /// Create registry from initial courses
    ///
    /// Later exact duplicates are dropped, as if each course were added in turn.
    #[must_use]
    pub fn with_courses<I, S>(courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for course in courses {
            let course = course.into();
            if !registry.contains(&course) {
                registry.courses.push(course);
            }
        }
        registry
    }

    /// Append a course unless an exact match is already present
    pub fn add_course(&mut self, name: impl Into<String>) -> AddOutcome {
        let name = name.into();
        if self.contains(&name) {
            tracing::warn!(course = %name, "course already registered");
            return AddOutcome::AlreadyExists(name);
        }
        self.courses.push(name.clone());
        tracing::debug!(course = %name, total = self.courses.len(), "course added");
        AddOutcome::Added(name)
    }

    /// Remove the first exact match
    pub fn remove_course(&mut self, name: &str) -> RemoveOutcome {
        match self.courses.iter().position(|c| c == name) {
            Some(index) => {
                let removed = self.courses.remove(index);
                tracing::debug!(course = %removed, total = self.courses.len(), "course removed");
                RemoveOutcome::Removed(removed)
            }
            None => {
                tracing::warn!(course = %name, "course not registered");
                RemoveOutcome::NotFound(name.to_string())
            }
        }
    }

    /// Current number of courses
    #[inline]
    #[must_use]
    pub fn total_courses(&self) -> usize {
        self.courses.len()
    }

    /// Courses containing `substring`, ignoring case, in registry order
    #[must_use]
    pub fn courses_matching(&self, substring: &str) -> Vec<String> {
        let needle = substring.to_lowercase();
        self.courses
            .iter()
            .filter(|course| course.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Check for an exact match
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.courses.iter().any(|c| c == name)
    }

    #[inline]
    #[must_use]
    pub fn courses(&self) -> &[String] {
        &self.courses
    }
}

impl From<&CourseRegistry> for Value {
    fn from(registry: &CourseRegistry) -> Self {
        Value::from(registry.courses.clone())
    }
}

/// Result of [`CourseRegistry::add_course`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Course appended
    Added(String),

    /// Exact match already present, list unchanged
    AlreadyExists(String),
}

impl AddOutcome {
    #[inline]
    #[must_use]
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }
}

impl Display for AddOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added(name) => write!(f, "Course \"{name}\" added successfully!"),
            Self::AlreadyExists(name) => write!(f, "Course \"{name}\" already exists!"),
        }
    }
}

/// Result of [`CourseRegistry::remove_course`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// First exact match removed
    Removed(String),

    /// No exact match, list unchanged
    NotFound(String),
}

impl RemoveOutcome {
    #[inline]
    #[must_use]
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed(_))
    }
}

impl Display for RemoveOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Removed(name) => write!(f, "Course \"{name}\" removed successfully!"),
            Self::NotFound(name) => write!(f, "Course \"{name}\" not found!"),
        }
    }
}
