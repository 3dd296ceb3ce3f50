//! Object Lab Transforms
//!
//! Pure functions over [`olab_model::Record`]s and numeric lists.
//!
//! # Core Concepts
//!
//! - [`clone_with_overrides`] / [`merge_records`] / [`merge_all`]: spread-style copies
//! - [`pick`] with [`PickField`]: rename and default-fill, the destructuring equivalent
//! - [`extract_path`]: nested lookup that never fails
//! - [`sum`], [`average`], [`filter_by`], [`all_satisfy`], [`any_satisfy`]: aggregation
//!
//! # Example
//!
//! ```rust
//! use olab_model::{Record, Value};
//! use olab_transform::{pick, PickField};
//!
//! let student = Record::new().with("age", 21);
//! let picked = pick(
//!     &student,
//!     &[
//!         PickField::new("age").renamed("studentAge"),
//!         PickField::new("gpa").or_default("n/a"),
//!     ],
//! );
//! assert_eq!(picked.get("studentAge"), Some(&Value::from(21)));
//! assert_eq!(picked.get("gpa"), Some(&Value::from("n/a")));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod aggregate;
mod transform;

pub use aggregate::{
    all_satisfy, any_satisfy, average, filter_by, format_fixed, round_to, sum, AggregateError,
};
pub use transform::{
    clone_with_overrides, concat_lists, extract_path, merge_all, merge_records, pick,
    split_first, take_leading, PickField,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
