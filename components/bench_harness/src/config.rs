//! Harness configuration
//!
//! Static configuration is built once at startup and passed by reference
//! into the engine and reporter. It can come from defaults, a JSON file or
//! a YAML file.

use crate::engine::TimingMode;
use crate::registry::Registry;
use crate::suite::Suite;
use core_types::{ConfigError, RuntimeSpec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default per-run timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Everything a run needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Runtimes in declaration order
    pub runtimes: Vec<RuntimeSpec>,
    /// Benchmark names in display order; empty means discover from `bench_dir`
    pub benchmarks: Vec<String>,
    /// Timing strategy for the whole run
    pub timing: TimingMode,
    /// Per-run timeout; `None` waits forever
    pub timeout_secs: Option<u64>,
    /// Parse output of runs that exit non-zero
    pub permissive: bool,
    /// Directory benchmark files are resolved against
    pub bench_dir: Option<PathBuf>,
    /// Directory charts are written to
    pub output_dir: PathBuf,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            runtimes: vec![
                RuntimeSpec::new(
                    "Neptune",
                    &["../neptune-cli/target/release/neptune-cli"],
                    ".np",
                ),
                RuntimeSpec::new("NodeJS(JIT off)", &["node", "-jitless"], ".js"),
                RuntimeSpec::new("Ruby", &["ruby"], ".rb"),
                RuntimeSpec::new("Lua", &["lua"], ".lua"),
                RuntimeSpec::new("Node(JIT)", &["node"], ".js"),
            ],
            benchmarks: [
                "ack",
                "btree",
                "collatz",
                "fib",
                "nbody",
                "nested",
                "selection-sort",
                "sieve",
                "spect",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            timing: TimingMode::SelfReported,
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
            permissive: false,
            bench_dir: None,
            output_dir: PathBuf::from("."),
        }
    }
}

impl HarnessConfig {
    /// Load from a `.json`, `.yaml` or `.yml` file
    ///
    /// Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&text),
            Some("yaml") | Some("yml") => Self::from_yaml(&text),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parse JSON configuration text
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse YAML configuration text
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// The timeout as a duration; zero disables it
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Validated runtime registry
    pub fn registry(&self) -> Result<Registry, ConfigError> {
        Registry::new(self.runtimes.clone())
    }

    /// Validated suite; discovered from `bench_dir` when none is listed
    pub fn suite(&self, registry: &Registry) -> Result<Suite, ConfigError> {
        if self.benchmarks.is_empty() {
            let dir = self.bench_dir.clone().unwrap_or_else(|| PathBuf::from("."));
            Suite::discover(dir, registry)
        } else {
            Suite::new(&self.benchmarks)
        }
    }
}
