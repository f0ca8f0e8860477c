//! Per-pair measurement values.

use crate::MeasurementError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Outcome of measuring one (benchmark, runtime) pair.
///
/// `Unavailable` carries the failure that caused it. Derived values such as
/// the geometric mean of a runtime with no successful runs are unavailable
/// without a failure of their own, hence the `Option`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measurement {
    /// Duration in milliseconds
    Millis(f64),
    /// No usable duration
    Unavailable(Option<MeasurementError>),
}

impl Measurement {
    /// Unavailable because of a failed run
    pub fn failed(error: MeasurementError) -> Self {
        Measurement::Unavailable(Some(error))
    }

    /// The duration, if available
    pub fn millis(&self) -> Option<f64> {
        match self {
            Measurement::Millis(ms) => Some(*ms),
            Measurement::Unavailable(_) => None,
        }
    }

    /// Check if a duration is present
    pub fn is_available(&self) -> bool {
        matches!(self, Measurement::Millis(_))
    }

    /// The failure behind an unavailable measurement
    pub fn error(&self) -> Option<&MeasurementError> {
        match self {
            Measurement::Unavailable(Some(e)) => Some(e),
            _ => None,
        }
    }

    /// Ascending by duration, unavailable values last and equal to each other
    pub fn rank_cmp(&self, other: &Measurement) -> Ordering {
        match (self.millis(), other.millis()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl From<Result<f64, MeasurementError>> for Measurement {
    fn from(result: Result<f64, MeasurementError>) -> Self {
        match result {
            Ok(ms) => Measurement::Millis(ms),
            Err(e) => Measurement::failed(e),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Millis(ms) => write!(f, "{:.2} ms", ms),
            Measurement::Unavailable(_) => write!(f, "unavailable"),
        }
    }
}
