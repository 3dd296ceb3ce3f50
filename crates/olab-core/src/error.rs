//! Error types for the lab runner
//!
//! Provides error handling for:
//! - Configuration loading and validation
//! - Record model and aggregation failures inside a lab section
//! - Roster failures (decoding, graduation)
//! - Aborted runs, tagged with the section that failed

use olab_model::ModelError;
use olab_roster::RosterError;
use olab_transform::AggregateError;

/// Main lab error type
#[derive(Debug, thiserror::Error)]
pub enum LabError {
    /// Record model failure
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Aggregation failure
    #[error("aggregation failed: {0}")]
    Aggregate(#[from] AggregateError),

    /// Roster failure
    #[error("roster error: {0}")]
    Roster(#[from] RosterError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading a config file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A lab section failed and the run was aborted
    #[error("section '{section}' failed: {source}")]
    SectionFailed {
        /// Section that failed
        section: &'static str,
        /// The underlying error
        #[source]
        source: Box<LabError>,
    },
}

impl LabError {
    /// Wrap an error with the section it aborted
    #[inline]
    #[must_use]
    pub fn in_section(section: &'static str, error: LabError) -> Self {
        Self::SectionFailed {
            section,
            source: Box::new(error),
        }
    }

    /// Section that aborted the run, if any
    #[must_use]
    pub fn section(&self) -> Option<&'static str> {
        match self {
            Self::SectionFailed { section, .. } => Some(section),
            _ => None,
        }
    }

    /// Innermost error, unwrapping section tags
    #[must_use]
    pub fn root_cause(&self) -> &LabError {
        match self {
            Self::SectionFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Check if error comes from configuration
    #[inline]
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self.root_cause(), Self::Config(_) | Self::Io(_))
    }
}
