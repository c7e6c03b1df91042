// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod options;
pub mod parsers;
pub mod presentation;

use crate::args::Args;
use crate::config::Config;
use crate::error::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging based on verbosity level.
///
/// `RUST_LOG` still takes precedence over the level picked here.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when embedded in tests.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

/// Run one aggregation for the parsed arguments and print the summary.
pub fn execute(args: Args) -> Result<()> {
    let format = args.format;
    let config = Config::try_from(args)?;
    log::debug!("resolved configuration: {config:?}");

    let summary = donation_tally_engine::run(&config)?;
    presentation::print_summary(&summary, &config, format)
}
