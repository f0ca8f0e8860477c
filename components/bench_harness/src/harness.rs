//! The benchmark sweep
//!
//! Runs every (benchmark, runtime) pair one after another, benchmark-major
//! and runtime-minor in declaration order, then aggregates. Pairs never
//! overlap: concurrent CPU-bound runs would distort each other's timings.

use crate::config::HarnessConfig;
use crate::engine::Engine;
use crate::matrix::{MatrixError, ResultMatrix};
use crate::process::{ProcessRunner, SystemRunner};
use crate::registry::Registry;
use crate::suite::Suite;
use core_types::ConfigError;
use tracing::info;

/// Drives an [`Engine`] over a suite and a registry
pub struct Harness<'a, R: ProcessRunner> {
    registry: &'a Registry,
    suite: &'a Suite,
    engine: Engine<R>,
}

impl<'a, R: ProcessRunner> Harness<'a, R> {
    /// Create a harness over borrowed configuration
    pub fn new(registry: &'a Registry, suite: &'a Suite, engine: Engine<R>) -> Self {
        Self {
            registry,
            suite,
            engine,
        }
    }

    /// The engine used for each pair
    pub fn engine(&self) -> &Engine<R> {
        &self.engine
    }

    /// Measure every pair and record it, without aggregating
    pub fn sweep(&self) -> Result<ResultMatrix, MatrixError> {
        let mut matrix = ResultMatrix::new(self.registry, self.suite);
        let total = self.registry.len() * self.suite.len();
        let mut done = 0;

        for benchmark in self.suite.iter() {
            for runtime in self.registry.iter() {
                done += 1;
                info!(
                    benchmark = %benchmark.name,
                    runtime = %runtime.name,
                    "[{}/{}] running",
                    done,
                    total
                );
                let measurement = self.engine.run(benchmark, runtime);
                matrix.record(&benchmark.name, &runtime.name, measurement)?;
            }
        }

        Ok(matrix)
    }

    /// Measure every pair, then append the geometric-mean row
    pub fn run(&self) -> Result<ResultMatrix, MatrixError> {
        let mut matrix = self.sweep()?;
        matrix.finalize()?;

        let failed = matrix.failures().len();
        info!(
            pairs = self.registry.len() * self.suite.len(),
            failed,
            timing = self.engine.timing().as_str(),
            "sweep complete"
        );
        Ok(matrix)
    }
}

/// Engine over real processes, configured from a [`HarnessConfig`]
pub fn system_engine(config: &HarnessConfig) -> Engine<SystemRunner> {
    Engine::new(SystemRunner::new().with_timeout(config.timeout()))
        .with_timing(config.timing)
        .with_permissive(config.permissive)
        .with_bench_dir(config.bench_dir.clone())
}

/// Validate a configuration into its registry and suite
pub fn prepare(config: &HarnessConfig) -> Result<(Registry, Suite), ConfigError> {
    let registry = config.registry()?;
    let suite = config.suite(&registry)?;
    Ok((registry, suite))
}
