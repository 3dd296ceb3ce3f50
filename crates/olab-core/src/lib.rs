//! Object Lab Runner
//!
//! Drives the record lab end to end and hands every result to a
//! presentation sink.
//!
//! # Core Concepts
//!
//! - [`LabRunner`]: Sequences the lab sections against fresh state
//! - [`PresentationSink`]: Append-only receiver of `(title, content)` entries
//! - [`LabConfig`]: TOML-backed scores, thresholds and defaults
//! - [`LabError`]: Failures, tagged with the section that aborted the run
//!
//! # Example
//!
//! ```rust
//! use olab_core::{LabConfig, LabRunner, MemorySink};
//!
//! let mut sink = MemorySink::new();
//! let summary = LabRunner::new(LabConfig::default()).run(&mut sink).unwrap();
//!
//! assert_eq!(summary.sections_completed, 8);
//! assert_eq!(sink.content("Average Score").and_then(|v| v.as_str()), Some("88.00"));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod fixtures;
pub mod runner;
pub mod sink;

pub use config::{CloneOverrides, DestructureDefaults, LabConfig, ScoreThresholds};
pub use error::LabError;
pub use runner::{section_names, LabRunner, LabSummary, ABORT_TITLE};
pub use sink::{ConsoleSink, JsonLinesSink, MemorySink, PresentationSink, SinkEntry, TracingSink};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
