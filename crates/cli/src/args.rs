use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use donation_tally_engine::config::{DEFAULT_BATCH_SIZE, DEFAULT_CHANNEL_CAPACITY};

use crate::options::{OutputFormat, Variant};
use crate::parsers::LineNumberArg;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "donation_tally",
    version = crate::VERSION,
    about = "Single-pass statistics over a pipe-delimited donation file"
)]
pub struct Args {
    /// Pipe-delimited input file
    #[arg(value_hint = ValueHint::FilePath)]
    pub path: PathBuf,

    /// Reader implementation
    #[arg(long, value_enum, default_value = "sequential", help_heading = "Reader")]
    pub variant: Variant,

    /// Lines sent per message by the pipelined reader
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE, help_heading = "Reader")]
    pub batch_size: usize,

    /// Messages buffered between reader and aggregator
    #[arg(long, default_value_t = DEFAULT_CHANNEL_CAPACITY, help_heading = "Reader")]
    pub channel_capacity: usize,

    /// One-based lines whose name is captured (comma separated, repeatable; default 1,433,43244)
    #[arg(long = "capture-line", value_delimiter = ',', help_heading = "Aggregation")]
    pub capture_lines: Vec<LineNumberArg>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Output")]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Output")]
    pub quiet: bool,
}
