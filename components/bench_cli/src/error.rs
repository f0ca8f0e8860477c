//! Error types for the CLI

use bench_harness::{MatrixError, ReportError};
use core_types::ConfigError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or validated
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The sweep left the result matrix inconsistent
    #[error("result error: {0}")]
    Matrix(#[from] MatrixError),

    /// Results could not be written
    #[error("{0}")]
    Report(#[from] ReportError),

    /// Writing to the terminal failed
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
