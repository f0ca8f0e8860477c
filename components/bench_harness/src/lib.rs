//! Cross-runtime benchmark harness
//!
//! Runs the same benchmark programs under several language runtimes,
//! records each run's duration and ranks the runtimes per benchmark and by
//! geometric mean across the suite.
//!
//! - [`registry`] / [`suite`] - static configuration of runtimes and cases
//! - [`engine`] - runs one pair and extracts its duration
//! - [`matrix`] - result matrix and geometric-mean aggregation
//! - [`report`] / [`chart`] - ranking, tables, JSON and charts
//! - [`harness`] - the sequential sweep tying it together
//!
//! # Examples
//!
//! ```rust,no_run
//! use bench_harness::{harness, report, HarnessConfig};
//!
//! let config = HarnessConfig::default();
//! let (registry, suite) = harness::prepare(&config).unwrap();
//! let engine = harness::system_engine(&config);
//! let matrix = harness::Harness::new(&registry, &suite, engine).run().unwrap();
//! println!("{}", report::format_results(&matrix));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chart;
pub mod config;
pub mod engine;
pub mod harness;
pub mod matrix;
pub mod process;
pub mod registry;
pub mod report;
pub mod suite;

pub use chart::{ChartRequest, ChartSink, MemorySink, SvgChartSink};
pub use config::HarnessConfig;
pub use engine::{parse_self_reported, Engine, TimingMode};
pub use harness::Harness;
pub use matrix::{geometric_mean, MatrixError, ResultMatrix};
pub use process::{ProcessOutput, ProcessRunner, RunError, SystemRunner};
pub use registry::Registry;
pub use report::{rank, RankedReport, ReportError, AXIS_LABEL};
pub use suite::Suite;
