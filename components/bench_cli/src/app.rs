//! Top-level run routine

use crate::cli::Cli;
use crate::error::CliResult;
use bench_harness::harness::{self, Harness};
use bench_harness::report::{format_results, format_results_json, publish};
use bench_harness::{SvgChartSink, TimingMode};
use std::io::Write;
use tracing::{info, warn, Level};

/// Install the stderr log subscriber
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the sweep described by `cli`, writing results to `out`
///
/// Returns `true` when every pair produced a measurement.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> CliResult<bool> {
    let config = cli.resolve_config()?;
    let (registry, suite) = cli.select(&config)?;

    if config.timing == TimingMode::WallClock {
        warn!("wall-clock timing includes process start-up; do not compare with self-reported results");
    }
    info!(
        runtimes = registry.len(),
        benchmarks = suite.len(),
        timing = config.timing.as_str(),
        "starting sweep"
    );

    let engine = harness::system_engine(&config);
    let matrix = Harness::new(&registry, &suite, engine).run()?;

    if cli.json {
        writeln!(out, "{}", format_results_json(&matrix, config.timing)?)?;
    } else {
        writeln!(out, "{}", format_results(&matrix))?;

        let pairs = registry.len() * suite.len();
        let failed = matrix.failures().len();
        writeln!(out, "\nSummary:")?;
        writeln!(out, "  Timing: {}", config.timing.as_str())?;
        writeln!(out, "  Pairs: {}", pairs)?;
        writeln!(out, "  Successful: {}", pairs - failed)?;
        writeln!(out, "  Failed: {}", failed)?;
    }

    if !cli.no_charts {
        let mut sink = SvgChartSink::new(&config.output_dir);
        let charts = publish(&matrix, &mut sink)?;
        info!(charts, dir = %config.output_dir.display(), "charts written");
    }

    Ok(matrix.failures().is_empty())
}
