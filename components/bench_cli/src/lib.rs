//! Cross-runtime benchmark CLI library
//!
//! Provides argument parsing and the top-level run routine for `xbench`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod cli;
pub mod error;

pub use app::{init_logging, run};
pub use cli::{Cli, Mode};
pub use error::{CliError, CliResult};
