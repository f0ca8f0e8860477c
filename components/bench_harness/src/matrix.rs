//! Result matrix and geometric-mean aggregation
//!
//! The matrix holds exactly one [`Measurement`] per (benchmark, runtime)
//! pair. Once every pair is recorded, [`ResultMatrix::finalize`] derives the
//! `"Geometric Mean"` row and seals the matrix against further writes.

use crate::registry::Registry;
use crate::suite::Suite;
use core_types::{Measurement, MeasurementError, GEOMETRIC_MEAN};
use std::collections::HashMap;
use thiserror::Error;

/// Errors from misuse of a [`ResultMatrix`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Benchmark is not part of the suite
    #[error("unknown benchmark '{0}'")]
    UnknownBenchmark(String),

    /// Runtime is not part of the registry
    #[error("unknown runtime '{0}'")]
    UnknownRuntime(String),

    /// Aggregation requested before every pair was recorded
    #[error("no result recorded for benchmark '{benchmark}' on runtime '{runtime}'")]
    Incomplete {
        /// First benchmark with a missing cell
        benchmark: String,
        /// Runtime of that cell
        runtime: String,
    },

    /// Write attempted after aggregation
    #[error("result matrix is finalized")]
    Finalized,
}

/// Geometric mean of strictly collected durations
///
/// Computed as the n-th root of the product. When the product leaves the
/// representable range the equivalent mean of logarithms is used instead.
/// Returns `None` for an empty slice.
pub fn geometric_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let product: f64 = values.iter().product();

    let underflowed = product == 0.0 && values.iter().all(|v| *v > 0.0);
    if product.is_finite() && !underflowed {
        return Some(product.powf(1.0 / n));
    }

    let log_mean = values.iter().map(|v| v.ln()).sum::<f64>() / n;
    Some(log_mean.exp())
}

type Row = HashMap<String, Measurement>;

/// Measurements keyed by benchmark, then runtime
#[derive(Debug, Clone)]
pub struct ResultMatrix {
    benchmarks: Vec<String>,
    runtimes: Vec<String>,
    rows: HashMap<String, Row>,
    aggregate: Option<Row>,
}

impl ResultMatrix {
    /// Empty matrix shaped by a suite and a registry
    pub fn new(registry: &Registry, suite: &Suite) -> Self {
        Self::with_names(suite.names(), registry.names())
    }

    /// Empty matrix from benchmark and runtime names, both in display order
    pub fn with_names(benchmarks: Vec<String>, runtimes: Vec<String>) -> Self {
        let rows = benchmarks
            .iter()
            .map(|b| (b.clone(), Row::new()))
            .collect();
        Self {
            benchmarks,
            runtimes,
            rows,
            aggregate: None,
        }
    }

    /// Insert or overwrite the measurement for one pair
    pub fn record(
        &mut self,
        benchmark: &str,
        runtime: &str,
        measurement: Measurement,
    ) -> Result<(), MatrixError> {
        if self.aggregate.is_some() {
            return Err(MatrixError::Finalized);
        }
        if !self.runtimes.iter().any(|r| r == runtime) {
            return Err(MatrixError::UnknownRuntime(runtime.to_string()));
        }
        let row = self
            .rows
            .get_mut(benchmark)
            .ok_or_else(|| MatrixError::UnknownBenchmark(benchmark.to_string()))?;
        row.insert(runtime.to_string(), measurement);
        Ok(())
    }

    /// Measurement for a pair; `benchmark` may name the aggregate row
    pub fn get(&self, benchmark: &str, runtime: &str) -> Option<&Measurement> {
        self.row_map(benchmark).and_then(|row| row.get(runtime))
    }

    fn row_map(&self, benchmark: &str) -> Option<&Row> {
        if benchmark == GEOMETRIC_MEAN {
            self.aggregate.as_ref()
        } else {
            self.rows.get(benchmark)
        }
    }

    /// Recorded cells of one row in runtime declaration order
    pub fn row(&self, benchmark: &str) -> Option<Vec<(&str, &Measurement)>> {
        let row = self.row_map(benchmark)?;
        Some(
            self.runtimes
                .iter()
                .filter_map(|r| row.get(r).map(|m| (r.as_str(), m)))
                .collect(),
        )
    }

    /// Pairs with no recorded measurement, benchmark-major
    pub fn missing_pairs(&self) -> Vec<(String, String)> {
        let mut missing = Vec::new();
        for benchmark in &self.benchmarks {
            for runtime in &self.runtimes {
                if !self.rows[benchmark].contains_key(runtime) {
                    missing.push((benchmark.clone(), runtime.clone()));
                }
            }
        }
        missing
    }

    /// Check if every pair has a measurement
    pub fn is_complete(&self) -> bool {
        self.missing_pairs().is_empty()
    }

    /// Geometric mean of a runtime's available measurements
    ///
    /// Unavailable cells are left out of both the product and the count.
    pub fn geometric_mean(&self, runtime: &str) -> Measurement {
        let values: Vec<f64> = self
            .benchmarks
            .iter()
            .filter_map(|b| self.rows[b].get(runtime))
            .filter_map(Measurement::millis)
            .collect();

        match geometric_mean(&values) {
            Some(mean) => Measurement::Millis(mean),
            None => Measurement::Unavailable(None),
        }
    }

    /// Derive the aggregate row and seal the matrix
    ///
    /// Calling this again after success is a no-op.
    pub fn finalize(&mut self) -> Result<(), MatrixError> {
        if self.aggregate.is_some() {
            return Ok(());
        }
        if let Some((benchmark, runtime)) = self.missing_pairs().into_iter().next() {
            return Err(MatrixError::Incomplete { benchmark, runtime });
        }

        let aggregate = self
            .runtimes
            .iter()
            .map(|r| (r.clone(), self.geometric_mean(r)))
            .collect();
        self.aggregate = Some(aggregate);
        Ok(())
    }

    /// Check if the aggregate row exists
    pub fn is_finalized(&self) -> bool {
        self.aggregate.is_some()
    }

    /// Real benchmark names in suite order
    pub fn benchmarks(&self) -> &[String] {
        &self.benchmarks
    }

    /// Runtime names in registry order
    pub fn runtimes(&self) -> &[String] {
        &self.runtimes
    }

    /// Rows to report: real benchmarks, then the aggregate once finalized
    pub fn report_order(&self) -> Vec<&str> {
        let mut order: Vec<&str> = self.benchmarks.iter().map(String::as_str).collect();
        if self.aggregate.is_some() {
            order.push(GEOMETRIC_MEAN);
        }
        order
    }

    /// Failed pairs with their reasons, benchmark-major
    pub fn failures(&self) -> Vec<(&str, &str, &MeasurementError)> {
        let mut failures = Vec::new();
        for benchmark in &self.benchmarks {
            for runtime in &self.runtimes {
                if let Some(error) = self.rows[benchmark].get(runtime).and_then(Measurement::error) {
                    failures.push((benchmark.as_str(), runtime.as_str(), error));
                }
            }
        }
        failures
    }
}
