//! Cross-runtime benchmark CLI
//!
//! Entry point for `xbench`. Parses arguments, installs logging and
//! delegates to [`bench_cli::run`].

use bench_cli::{init_logging, run, Cli};
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    let all_succeeded = run(&cli, &mut stdout.lock())?;

    if cli.strict && !all_succeeded {
        std::process::exit(1);
    }
    Ok(())
}
