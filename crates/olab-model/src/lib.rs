//! Object Lab Record Model
//!
//! Typed, ordered records that stand in for loosely-shaped objects.
//!
//! # Core Concepts
//!
//! - [`Record`]: Ordered string-keyed mapping of [`Value`]s
//! - [`Value`]: Tagged union of null, boolean, number, string, list, record
//! - [`RecordPath`]: Hierarchical addressing into nested records
//! - [`ScoreList`]: Immutable list of finite scores
//!
//! # Example
//!
//! ```rust
//! use olab_model::{Record, Value};
//!
//! let student = Record::new()
//!     .with("name", "Alice Johnson")
//!     .with("age", 21)
//!     .with("courses", vec!["JavaScript", "Python"]);
//!
//! let json = student.to_json().unwrap();
//! let back = Record::from_json(&json).unwrap();
//! assert_eq!(back, student);
//! assert_eq!(back.get("age"), Some(&Value::from(21)));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod path;
mod record;
mod scores;
mod value;

pub use path::{PathError, RecordPath};
pub use record::{ModelError, Record};
pub use scores::{CourseList, ScoreList};
pub use value::{Value, ValueKind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
