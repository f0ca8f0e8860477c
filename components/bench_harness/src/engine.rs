//! Execution engine
//!
//! Runs one (benchmark, runtime) pair and turns the process result into a
//! [`Measurement`]. Every failure is contained in the returned value; the
//! engine never aborts a sweep.
//!
//! Two timing strategies exist. [`TimingMode::SelfReported`] trusts the
//! benchmark to print its own elapsed milliseconds as the last line of
//! output, which excludes process start-up and interpreter boot.
//! [`TimingMode::WallClock`] times the whole child process from outside and
//! therefore includes that overhead. Numbers from the two modes are not
//! comparable and must not be mixed in one run.

use crate::process::{ProcessOutput, ProcessRunner};
use core_types::{BenchmarkCase, Measurement, MeasurementError, RuntimeSpec};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// How a duration is obtained from a finished process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingMode {
    /// Parse the benchmark's own timing from its last output line
    #[default]
    SelfReported,
    /// Measure spawn-to-exit time in the harness
    WallClock,
}

impl TimingMode {
    /// Extract a duration in milliseconds from a finished process
    pub fn extract(&self, output: &ProcessOutput) -> Result<f64, MeasurementError> {
        match self {
            TimingMode::SelfReported => parse_self_reported(&output.stdout),
            TimingMode::WallClock => Ok(output.elapsed.as_secs_f64() * 1000.0),
        }
    }

    /// Label used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            TimingMode::SelfReported => "self-reported",
            TimingMode::WallClock => "wall-clock",
        }
    }
}

/// Parse the self-reported timing from captured output
///
/// Output is split on `'\n'` and the next-to-last piece is used; the last
/// piece is whatever follows the final terminator (normally empty). Output
/// without any terminator therefore has no timing line.
pub fn parse_self_reported(stdout: &str) -> Result<f64, MeasurementError> {
    let lines: Vec<&str> = stdout.split('\n').collect();
    if lines.len() < 2 {
        return Err(MeasurementError::ParseError {
            reason: "output has no terminated timing line".to_string(),
        });
    }

    let line = lines[lines.len() - 2].trim();
    let value: f64 = line.parse().map_err(|_| MeasurementError::ParseError {
        reason: format!("'{}' is not a number", line),
    })?;

    if !value.is_finite() || value < 0.0 {
        return Err(MeasurementError::ParseError {
            reason: format!("'{}' is not a non-negative duration", line),
        });
    }
    Ok(value)
}

/// Runs benchmark processes and interprets their results
pub struct Engine<R: ProcessRunner> {
    runner: R,
    timing: TimingMode,
    permissive: bool,
    bench_dir: Option<PathBuf>,
}

impl<R: ProcessRunner> Engine<R> {
    /// Create an engine with self-reported timing and strict exit handling
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            timing: TimingMode::default(),
            permissive: false,
            bench_dir: None,
        }
    }

    /// Select the timing strategy
    pub fn with_timing(mut self, timing: TimingMode) -> Self {
        self.timing = timing;
        self
    }

    /// Still parse output of processes that exit non-zero
    pub fn with_permissive(mut self, permissive: bool) -> Self {
        self.permissive = permissive;
        self
    }

    /// Working directory for benchmark processes
    pub fn with_bench_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.bench_dir = dir;
        self
    }

    /// The process runner
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// The active timing strategy
    pub fn timing(&self) -> TimingMode {
        self.timing
    }

    /// Run one benchmark under one runtime
    pub fn run(&self, benchmark: &BenchmarkCase, runtime: &RuntimeSpec) -> Measurement {
        let measurement: Measurement = self.measure(benchmark, runtime).into();
        match &measurement {
            Measurement::Millis(ms) => {
                info!(benchmark = %benchmark.name, runtime = %runtime.name, ms = *ms, "measured");
            }
            Measurement::Unavailable(reason) => {
                let reason = reason.as_ref().map(|e| e.to_string()).unwrap_or_default();
                warn!(benchmark = %benchmark.name, runtime = %runtime.name, %reason, "unavailable");
            }
        }
        measurement
    }

    fn measure(
        &self,
        benchmark: &BenchmarkCase,
        runtime: &RuntimeSpec,
    ) -> Result<f64, MeasurementError> {
        let command = runtime.command_for(benchmark);
        debug!(?command, "spawning");

        let output = self
            .runner
            .run(&command, self.bench_dir.as_deref())
            .map_err(|e| MeasurementError::RuntimeUnavailable {
                reason: e.to_string(),
            })?;

        if output.success {
            return self.timing.extract(&output);
        }

        let failure = MeasurementError::BenchmarkFailure {
            exit_code: output.exit_code,
        };
        if self.permissive {
            self.timing.extract(&output).map_err(|_| failure)
        } else {
            Err(failure)
        }
    }
}
