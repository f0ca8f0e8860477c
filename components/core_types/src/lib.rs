//! Core data model for the cross-runtime benchmark harness.
//!
//! This crate provides the types shared by every harness component:
//! runtime descriptions, benchmark cases, measurements and the error
//! taxonomy used to contain failures at the (benchmark, runtime) level.
//!
//! # Overview
//!
//! - [`RuntimeSpec`] - A runtime's display name, invocation and file suffix
//! - [`BenchmarkCase`] - One named benchmark program
//! - [`Measurement`] - A duration in milliseconds or an unavailable marker
//! - [`MeasurementError`] - Why a single pair produced no duration
//! - [`ConfigError`] - Invalid static configuration
//!
//! # Examples
//!
//! ```
//! use core_types::{BenchmarkCase, Measurement, RuntimeSpec};
//!
//! let node = RuntimeSpec::new("Node(JIT)", &["node"], ".js");
//! let fib = BenchmarkCase::new("fib");
//!
//! assert_eq!(node.command_for(&fib), vec!["node".to_string(), "fib.js".to_string()]);
//! assert_eq!(Measurement::Millis(12.5).millis(), Some(12.5));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod measurement;
mod runtime;

pub use error::{ConfigError, MeasurementError};
pub use measurement::Measurement;
pub use runtime::{BenchmarkCase, RuntimeSpec};

/// Name of the synthetic aggregate row appended after all real benchmarks.
pub const GEOMETRIC_MEAN: &str = "Geometric Mean";
