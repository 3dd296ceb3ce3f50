//! Lab configuration
//!
//! Every field has a default reproducing the reference lab run, so an empty
//! TOML file is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LabError;

/// Upper bound for [`LabConfig::decimal_places`]
pub const MAX_DECIMAL_PLACES: usize = 6;

/// Lab runner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabConfig {
    /// Scores used by the destructuring and aggregation sections
    pub scores: Vec<f64>,
    /// Courses concatenated onto the student's list
    pub new_courses: Vec<String>,
    /// Decimal places for rendered averages
    pub decimal_places: usize,
    /// Pretty-print records and lists in text sinks
    pub pretty_json: bool,
    /// Score analysis thresholds
    pub thresholds: ScoreThresholds,
    /// Defaults filled in by destructuring
    pub defaults: DestructureDefaults,
    /// Fields written into the cloned student
    pub clone_overrides: CloneOverrides,
}

impl LabConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With scores
    #[inline]
    #[must_use]
    pub fn with_scores(mut self, scores: Vec<f64>) -> Self {
        self.scores = scores;
        self
    }

    /// With new courses
    #[inline]
    #[must_use]
    pub fn with_new_courses(mut self, courses: Vec<String>) -> Self {
        self.new_courses = courses;
        self
    }

    /// With decimal places
    #[inline]
    #[must_use]
    pub fn with_decimal_places(mut self, places: usize) -> Self {
        self.decimal_places = places;
        self
    }

    /// With pretty JSON rendering
    #[inline]
    #[must_use]
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    /// Parse and validate TOML
    ///
    /// # Errors
    /// Returns [`LabError::Config`] for malformed TOML or invalid values
    pub fn from_toml_str(toml: &str) -> Result<Self, LabError> {
        let config: Self = toml::from_str(toml).map_err(|e| LabError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is invalid
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LabError> {
        let path = path.as_ref();
        tracing::debug!("Loading lab config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Render as TOML
    ///
    /// # Errors
    /// Returns [`LabError::Config`] if serialization fails
    pub fn to_toml_string(&self) -> Result<String, LabError> {
        toml::to_string_pretty(self).map_err(|e| LabError::Config(e.to_string()))
    }

    /// Check value ranges
    ///
    /// Empty `scores` is valid here; the average section rejects it at run
    /// time.
    ///
    /// # Errors
    /// Returns [`LabError::Config`] naming the first invalid field
    pub fn validate(&self) -> Result<(), LabError> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(LabError::Config(format!(
                "decimal_places must be at most {MAX_DECIMAL_PLACES}, got {}",
                self.decimal_places
            )));
        }
        if self.scores.iter().any(|s| !s.is_finite()) {
            return Err(LabError::Config("scores must be finite".to_string()));
        }
        let t = &self.thresholds;
        for (name, value) in [
            ("thresholds.high", t.high),
            ("thresholds.low", t.low),
            ("thresholds.pass", t.pass),
            ("thresholds.exceptional", t.exceptional),
            ("defaults.gpa", self.defaults.gpa),
            ("clone_overrides.gpa", self.clone_overrides.gpa),
        ] {
            if !value.is_finite() {
                return Err(LabError::Config(format!("{name} must be finite")));
            }
        }
        Ok(())
    }
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            scores: vec![85.0, 92.0, 78.0, 90.0, 88.0, 95.0],
            new_courses: vec![
                "Machine Learning".to_string(),
                "Cloud Computing".to_string(),
                "Mobile Development".to_string(),
            ],
            decimal_places: 2,
            pretty_json: true,
            thresholds: ScoreThresholds::default(),
            defaults: DestructureDefaults::default(),
            clone_overrides: CloneOverrides::default(),
        }
    }
}

/// Score analysis thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreThresholds {
    /// Scores at or above count as high
    pub high: f64,
    /// Scores below count as low
    pub low: f64,
    /// Every score must reach this to pass
    pub pass: f64,
    /// Any score at or above is exceptional
    pub exceptional: f64,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            high: 90.0,
            low: 80.0,
            pass: 70.0,
            exceptional: 95.0,
        }
    }
}

/// Defaults substituted for fields the student record lacks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DestructureDefaults {
    pub graduation_year: u32,
    pub gpa: f64,
}

impl Default for DestructureDefaults {
    fn default() -> Self {
        Self {
            graduation_year: 2025,
            gpa: 3.5,
        }
    }
}

/// Fields added to the cloned student
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CloneOverrides {
    pub graduation_year: u32,
    pub gpa: f64,
}

impl Default for CloneOverrides {
    fn default() -> Self {
        Self {
            graduation_year: 2025,
            gpa: 3.8,
        }
    }
}
