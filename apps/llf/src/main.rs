mod cli;
mod output;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use llf_common::{AppConfig, LlfError};
use llf_scanner::{scan_largest, ScanFilters};
use log::debug;

use cli::Args;

const EXIT_USAGE: u8 = 1;
const EXIT_SCAN_FAILED: u8 = 2;

fn run(config: &AppConfig) -> Result<(), LlfError> {
    let filters = ScanFilters::from_config(config);
    debug!("scanning {} with {:?}", config.root.display(), filters);
    let report = scan_largest(&config.root, config.top, &filters)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::render(&report, config.output, config.size_format, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here and are not failures.
            // A failed write to stderr leaves nowhere to report it; the
            // exit status still carries the outcome.
            if e.print().is_err() {
                debug!("could not print usage");
            }
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = args.into_config();
    if let Err(e) = config.validate() {
        eprintln!("llf: {e}");
        eprintln!("Usage: llf [OPTIONS] [DIRECTORY]");
        return ExitCode::from(EXIT_USAGE);
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("llf: {e}");
            ExitCode::from(EXIT_SCAN_FAILED)
        }
    }
}
