//! Command-line arguments

use bench_harness::{HarnessConfig, Registry, Suite, TimingMode};
use clap::{Parser, ValueEnum};
use core_types::ConfigError;
use std::path::PathBuf;

/// Timing strategy as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Benchmarks print their own elapsed milliseconds as the last line
    SelfReported,
    /// The harness times the whole process, start-up included
    WallClock,
}

impl From<Mode> for TimingMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::SelfReported => TimingMode::SelfReported,
            Mode::WallClock => TimingMode::WallClock,
        }
    }
}

/// Compare language runtimes on a shared benchmark suite
#[derive(Debug, Parser)]
#[command(name = "xbench", version)]
pub struct Cli {
    /// JSON or YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory containing the benchmark sources
    #[arg(long)]
    pub bench_dir: Option<PathBuf>,

    /// Directory charts are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// How durations are measured
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Per-run timeout in seconds, 0 to wait forever
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Parse the output of runs that exit non-zero
    #[arg(long)]
    pub permissive: bool,

    /// Only run this runtime (repeatable)
    #[arg(short = 'r', long = "runtime")]
    pub runtimes: Vec<String>,

    /// Only run this benchmark (repeatable)
    #[arg(short = 'b', long = "benchmark")]
    pub benchmarks: Vec<String>,

    /// Build the suite from the files found in the benchmark directory
    #[arg(long)]
    pub discover: bool,

    /// Skip chart rendering
    #[arg(long)]
    pub no_charts: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with status 1 if any pair failed
    #[arg(long)]
    pub strict: bool,

    /// Log every spawned command
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Load the configured file (or defaults) and apply flag overrides
    pub fn resolve_config(&self) -> Result<HarnessConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => HarnessConfig::load(path)?,
            None => HarnessConfig::default(),
        };
        Ok(self.apply(config))
    }

    /// Overlay command-line flags on a configuration
    pub fn apply(&self, mut config: HarnessConfig) -> HarnessConfig {
        if let Some(dir) = &self.bench_dir {
            config.bench_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(mode) = self.mode {
            config.timing = mode.into();
        }
        if let Some(secs) = self.timeout {
            config.timeout_secs = Some(secs);
        }
        if self.permissive {
            config.permissive = true;
        }
        if self.discover {
            config.benchmarks.clear();
        }
        config
    }

    /// Validated registry and suite, narrowed by `--runtime`/`--benchmark`
    pub fn select(&self, config: &HarnessConfig) -> Result<(Registry, Suite), ConfigError> {
        let (mut registry, mut suite) = bench_harness::harness::prepare(config)?;
        if !self.runtimes.is_empty() {
            registry = registry.retain(&self.runtimes)?;
        }
        if !self.benchmarks.is_empty() {
            suite = suite.retain(&self.benchmarks)?;
        }
        Ok((registry, suite))
    }
}
