//! Score and course lists

use std::ops::Deref;

use serde::Serialize;

use crate::record::ModelError;
use crate::value::Value;

/// Ordered course names
///
/// Duplicates are a registry concern, not a type invariant.
pub type CourseList = Vec<String>;

/// Immutable ordered sequence of finite scores
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreList(Vec<f64>);

impl ScoreList {
    /// Create from raw scores
    ///
    /// # Errors
    /// Returns [`ModelError::NonFiniteNumber`] if any score is `NaN` or infinite
    pub fn new(scores: Vec<f64>) -> Result<Self, ModelError> {
        if let Some(bad) = scores.iter().find(|s| !s.is_finite()) {
            return Err(ModelError::NonFiniteNumber(*bad));
        }
        Ok(Self(scores))
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl Deref for ScoreList {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&ScoreList> for Value {
    fn from(scores: &ScoreList) -> Self {
        Self::List(scores.iter().copied().map(Value::Number).collect())
    }
}

impl<const N: usize> From<[u32; N]> for ScoreList {
    fn from(scores: [u32; N]) -> Self {
        Self(scores.iter().copied().map(f64::from).collect())
    }
}
