//! Error taxonomy for benchmark runs and configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a single (benchmark, runtime) pair produced no duration.
///
/// These never abort a sweep; they fill one result cell.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MeasurementError {
    /// Executable missing, failed to launch, or killed on timeout
    #[error("runtime unavailable: {reason}")]
    RuntimeUnavailable {
        /// What went wrong launching or waiting on the process
        reason: String,
    },

    /// The benchmark process exited unsuccessfully
    #[error("benchmark failed with {}", describe_exit(.exit_code))]
    BenchmarkFailure {
        /// Exit code, `None` when terminated by a signal
        exit_code: Option<i32>,
    },

    /// Timing line missing or not a number
    #[error("parse error: {reason}")]
    ParseError {
        /// Description of the malformed output
        reason: String,
    },
}

impl MeasurementError {
    /// Short stable label for tables and logs
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementError::RuntimeUnavailable { .. } => "RuntimeUnavailable",
            MeasurementError::BenchmarkFailure { .. } => "BenchmarkFailure",
            MeasurementError::ParseError { .. } => "ParseError",
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {}", c),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Invalid static configuration, rejected before any process is spawned.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No runtimes configured
    #[error("registry has no runtimes")]
    EmptyRegistry,

    /// Two runtimes share a display name
    #[error("duplicate runtime name '{0}'")]
    DuplicateRuntime(String),

    /// A runtime has nothing to execute
    #[error("runtime '{0}' has an empty invocation")]
    EmptyInvocation(String),

    /// Two benchmark cases share a name
    #[error("duplicate benchmark name '{0}'")]
    DuplicateBenchmark(String),

    /// A benchmark uses the name of the aggregate row
    #[error("benchmark name '{0}' is reserved")]
    ReservedName(String),

    /// A runtime or benchmark name is blank
    #[error("{0} name must not be empty")]
    EmptyName(&'static str),

    /// Filter names something that is not configured
    #[error("unknown {kind} '{name}'")]
    UnknownName {
        /// `runtime` or `benchmark`
        kind: &'static str,
        /// The unmatched name
        name: String,
    },

    /// Benchmark directory is missing or not a directory
    #[error("benchmark directory '{0}' does not exist or is not a directory")]
    NotADirectory(String),

    /// Config file extension is neither JSON nor YAML
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// Config file could not be read
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file contents are malformed
    #[error("invalid config: {0}")]
    Parse(String),
}
