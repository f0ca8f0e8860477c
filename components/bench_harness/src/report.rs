//! Ranking and result formatting
//!
//! A [`RankedReport`] orders one row of the matrix fastest first. Ties keep
//! registry order and unavailable entries go last, still visible with their
//! failure reason.

use crate::chart::{ChartRequest, ChartSink};
use crate::engine::TimingMode;
use crate::matrix::ResultMatrix;
use core_types::{Measurement, MeasurementError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Axis label handed to every chart
pub const AXIS_LABEL: &str = "Time in milliseconds";

/// Errors raised while publishing results
#[derive(Debug, Error)]
pub enum ReportError {
    /// Chart or report file could not be written
    #[error("could not write report: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("could not serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

/// One runtime's place in a ranked benchmark row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Runtime display name
    pub runtime: String,
    /// Its measurement for this benchmark
    pub measurement: Measurement,
}

/// A benchmark row sorted ascending by duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedReport {
    /// Benchmark display name
    pub benchmark: String,
    /// Entries, fastest first
    pub entries: Vec<RankedEntry>,
}

impl RankedReport {
    /// Rank cells given in registry order
    pub fn from_row(benchmark: &str, row: &[(&str, &Measurement)]) -> Self {
        let mut entries: Vec<RankedEntry> = row
            .iter()
            .map(|(runtime, measurement)| RankedEntry {
                runtime: runtime.to_string(),
                measurement: (*measurement).clone(),
            })
            .collect();
        // sort_by is stable, so ties stay in registry order
        entries.sort_by(|a, b| a.measurement.rank_cmp(&b.measurement));
        Self {
            benchmark: benchmark.to_string(),
            entries,
        }
    }

    /// Runtime names in ranked order
    pub fn runtimes(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.runtime.as_str()).collect()
    }

    /// Chart input holding only entries with a duration
    pub fn chart_request(&self) -> ChartRequest {
        let (runtimes, durations): (Vec<String>, Vec<f64>) = self
            .entries
            .iter()
            .filter_map(|e| e.measurement.millis().map(|ms| (e.runtime.clone(), ms)))
            .unzip();
        ChartRequest {
            title: self.benchmark.clone(),
            runtimes,
            durations,
            axis_label: AXIS_LABEL.to_string(),
        }
    }
}

/// Rank one row of the matrix; `None` if the benchmark is unknown
pub fn rank(matrix: &ResultMatrix, benchmark: &str) -> Option<RankedReport> {
    matrix
        .row(benchmark)
        .map(|row| RankedReport::from_row(benchmark, &row))
}

/// Ranked reports for every row, aggregate last when present
pub fn rank_all(matrix: &ResultMatrix) -> Vec<RankedReport> {
    matrix
        .report_order()
        .into_iter()
        .filter_map(|b| rank(matrix, b))
        .collect()
}

/// Render one chart per row through `sink`; returns the number rendered
pub fn publish<S: ChartSink + ?Sized>(
    matrix: &ResultMatrix,
    sink: &mut S,
) -> Result<usize, ReportError> {
    let reports = rank_all(matrix);
    for report in &reports {
        sink.render(&report.chart_request())?;
    }
    Ok(reports.len())
}

/// A failed pair, for machine-readable output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureRecord {
    /// Benchmark name
    pub benchmark: String,
    /// Runtime name
    pub runtime: String,
    /// What went wrong
    pub error: MeasurementError,
}

/// Complete machine-readable result of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Timing strategy the numbers came from
    pub timing: TimingMode,
    /// Ranked rows, aggregate last
    pub results: Vec<RankedReport>,
    /// Failed pairs
    pub failures: Vec<FailureRecord>,
}

impl RunSummary {
    /// Summarize a matrix
    pub fn new(matrix: &ResultMatrix, timing: TimingMode) -> Self {
        Self {
            timing,
            results: rank_all(matrix),
            failures: matrix
                .failures()
                .into_iter()
                .map(|(benchmark, runtime, error)| FailureRecord {
                    benchmark: benchmark.to_string(),
                    runtime: runtime.to_string(),
                    error: error.clone(),
                })
                .collect(),
        }
    }
}

/// Format results as JSON
pub fn format_results_json(
    matrix: &ResultMatrix,
    timing: TimingMode,
) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(&RunSummary::new(matrix, timing))?)
}

/// Format results as human-readable ranked tables
pub fn format_results(matrix: &ResultMatrix) -> String {
    let mut output = String::new();

    for report in rank_all(matrix) {
        output.push_str(&format!("\n{}\n", report.benchmark));
        output.push_str(&format!(
            "{:<6} {:<24} {:>15}  {:<10}\n",
            "Rank", "Runtime", "Duration (ms)", "Status"
        ));
        output.push_str(&format!("{}\n", "=".repeat(60)));

        let mut rank = 0;
        for entry in &report.entries {
            match &entry.measurement {
                Measurement::Millis(ms) => {
                    rank += 1;
                    output.push_str(&format!(
                        "{:<6} {:<24} {:>12.2} ms  {:<10}\n",
                        rank, entry.runtime, ms, "✓ PASS"
                    ));
                }
                Measurement::Unavailable(reason) => {
                    output.push_str(&format!(
                        "{:<6} {:<24} {:>15}  {:<10}\n",
                        "-", entry.runtime, "-", "✗ FAIL"
                    ));
                    match reason {
                        Some(error) => output.push_str(&format!("  Error: {}\n", error)),
                        None => output.push_str("  Error: no successful runs\n"),
                    }
                }
            }
        }
    }

    output
}
