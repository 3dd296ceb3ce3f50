//! Numeric aggregation
//!
//! Every function defines its empty-input behaviour. Only [`average`] fails,
//! since no mean of zero scores exists.

/// Sum of all values, `0` for empty input
#[inline]
#[must_use]
pub fn sum(xs: &[f64]) -> f64 {
    xs.iter().sum()
}

/// Arithmetic mean
///
/// # Errors
/// Returns [`AggregateError::EmptyInput`] when `xs` is empty
pub fn average(xs: &[f64]) -> Result<f64, AggregateError> {
    if xs.is_empty() {
        return Err(AggregateError::EmptyInput { operation: "average" });
    }
    #[allow(clippy::cast_precision_loss)]
    let len = xs.len() as f64;
    Ok(sum(xs) / len)
}

/// Order-preserving filter
#[must_use]
pub fn filter_by<T: Clone>(xs: &[T], predicate: impl Fn(&T) -> bool) -> Vec<T> {
    xs.iter().filter(|x| predicate(x)).cloned().collect()
}

/// Universal quantifier, `true` for empty input
#[inline]
#[must_use]
pub fn all_satisfy<T>(xs: &[T], predicate: impl Fn(&T) -> bool) -> bool {
    xs.iter().all(predicate)
}

/// Existential quantifier, `false` for empty input
#[inline]
#[must_use]
pub fn any_satisfy<T>(xs: &[T], predicate: impl Fn(&T) -> bool) -> bool {
    xs.iter().any(predicate)
}

/// Round half away from zero to `places` decimals
#[must_use]
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
    (value * factor).round() / factor
}

/// Fixed-point rendering, `88` → `"88.00"` at two places
#[inline]
#[must_use]
pub fn format_fixed(value: f64, places: usize) -> String {
    format!("{value:.places$}")
}

/// Aggregation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregateError {
    /// No values to aggregate
    #[error("empty input: cannot compute {operation} of zero values")]
    EmptyInput {
        /// Aggregate that was requested
        operation: &'static str,
    },
}
