//! Record values
//!
//! [`Value`] is the tagged union every record slot holds. Numbers are checked
//! for finiteness when a value is built, never when it is read.

use std::fmt::{self, Display, Formatter};

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};

use crate::record::{ModelError, Record};

/// Largest magnitude at which an `f64` still round-trips through `i64` exactly
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A single value stored in a [`Record`] or a list
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicit null (JSON `null`, YAML `~`)
    Null,

    /// Boolean
    Bool(bool),

    /// Finite number
    ///
    /// Built directly, the variant is unchecked; a non-finite payload fails
    /// serialization and [`Value::validate`].
    Number(f64),

    /// Text
    String(String),

    /// Ordered sequence of values
    List(Vec<Value>),

    /// Nested record
    Record(Record),
}

impl Value {
    /// Build a number value
    ///
    /// # Errors
    /// Returns [`ModelError::NonFiniteNumber`] for `NaN` and infinities
    #[inline]
    pub fn number(n: f64) -> Result<Self, ModelError> {
        if n.is_finite() {
            Ok(Self::Number(n))
        } else {
            Err(ModelError::NonFiniteNumber(n))
        }
    }

    /// Kind tag of this value
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::List(_) => ValueKind::List,
            Self::Record(_) => ValueKind::Record,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Check if value is null
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Recursively check that every number is finite
    ///
    /// Decoders call this once after parsing, since YAML can spell `.nan`.
    ///
    /// # Errors
    /// Returns the first non-finite number found
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            Self::Number(n) if !n.is_finite() => Err(ModelError::NonFiniteNumber(*n)),
            Self::List(items) => items.iter().try_for_each(Self::validate),
            Self::Record(record) => record.values().try_for_each(Self::validate),
            _ => Ok(()),
        }
    }
}

/// Integral numbers serialize as integers so `21` never renders as `21.0`
fn as_exact_integer(n: f64) -> Option<i64> {
    if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER {
        #[allow(clippy::cast_possible_truncation)]
        Some(n as i64)
    } else {
        None
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) if !n.is_finite() => {
                Err(S::Error::custom(ModelError::NonFiniteNumber(*n)))
            }
            Self::Number(n) => match as_exact_integer(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            Self::String(s) => serializer.serialize_str(s),
            Self::List(items) => items.serialize(serializer),
            Self::Record(record) => record.serialize(serializer),
        }
    }
}

impl Display for Value {
    /// Scalars print bare, compound values print as compact JSON
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => match as_exact_integer(*n) {
                Some(i) => write!(f, "{i}"),
                None => write!(f, "{n}"),
            },
            Self::String(s) => f.write_str(s),
            Self::List(_) | Self::Record(_) => match serde_json::to_string(self) {
                Ok(json) => f.write_str(&json),
                Err(_) => write!(f, "{self:?}"),
            },
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl TryFrom<f64> for Value {
    type Error = ModelError;

    fn try_from(n: f64) -> Result<Self, Self::Error> {
        Self::number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Kind tag for [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    List,
    Record,
}

impl ValueKind {
    /// Lowercase kind name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::List => "list",
            Self::Record => "record",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchecked_nan_fails_serialization() {
        let record = Record::new().with("n", Value::Number(f64::NAN));
        assert!(matches!(record.to_json(), Err(ModelError::InvalidJson(_))));
        assert!(record.to_yaml().is_err());
        assert!(serde_json::to_string(&Value::Number(f64::INFINITY)).is_err());
    }

    #[test]
    fn unchecked_nan_still_displays() {
        let list = Value::List(vec![Value::Number(f64::NAN)]);
        assert!(list.to_string().contains("NaN"));
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn number_rejects_non_finite() {
        assert!(Value::number(1.5).is_ok());
        assert!(matches!(
            Value::number(f64::NAN),
            Err(ModelError::NonFiniteNumber(_))
        ));
        assert!(Value::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn kind_tags() {
        assert_eq!(Value::from(true).kind(), ValueKind::Bool);
        assert_eq!(Value::from("x").kind(), ValueKind::String);
        assert_eq!(Value::from(vec![1, 2]).kind(), ValueKind::List);
        assert_eq!(Value::from(Record::new()).kind(), ValueKind::Record);
        assert_eq!(ValueKind::Record.to_string(), "record");
    }

    #[test]
    fn display_integral_number_has_no_fraction() {
        assert_eq!(Value::from(21).to_string(), "21");
        assert_eq!(Value::number(3.8).unwrap().to_string(), "3.8");
    }

    #[test]
    fn display_compound_as_json() {
        let list = Value::from(vec!["JS", "Rust"]);
        assert_eq!(list.to_string(), r#"["JS","Rust"]"#);
    }

    #[test]
    fn serialize_integral_as_integer() {
        let json = serde_json::to_string(&Value::from(vec![85, 92])).unwrap();
        assert_eq!(json, "[85,92]");
    }

    #[test]
    fn deserialize_every_kind() {
        let value: Value =
            serde_json::from_str(r#"[null, true, 2.5, "s", [1], {"k": 1}]"#).unwrap();
        let kinds: Vec<_> = value.as_list().unwrap().iter().map(Value::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ValueKind::Null,
                ValueKind::Bool,
                ValueKind::Number,
                ValueKind::String,
                ValueKind::List,
                ValueKind::Record,
            ]
        );
    }

    #[test]
    fn validate_finds_nested_nan() {
        let nested = Value::List(vec![Value::Number(1.0), Value::Number(f64::NAN)]);
        assert!(nested.validate().is_err());
        assert!(Value::from(vec![1, 2]).validate().is_ok());
    }
}
