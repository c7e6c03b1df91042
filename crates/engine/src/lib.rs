// crates/engine/src/lib.rs
use std::time::Instant;

pub mod config;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod processor;
pub mod source;

pub use donation_tally_core::{DateBucket, NameCount, Summary, TallyOptions};

use crate::config::Config;
use crate::error::Result;
use crate::options::Variant;
use crate::pipeline::Pipelined;
use crate::processor::{FileReader, Sequential};

/// Build the reader selected by `config.variant`.
#[must_use]
pub fn reader_for(config: &Config) -> Box<dyn FileReader> {
    match config.variant {
        Variant::Sequential => Box::new(Sequential),
        Variant::Pipelined => Box::new(Pipelined::from(config)),
    }
}

/// Aggregate the file at `config.path` with the configured variant.
///
/// # Errors
///
/// Returns an error if the file cannot be read or any line is malformed. The
/// run is all-or-nothing; nothing is returned for a partially read file.
pub fn run(config: &Config) -> Result<Summary> {
    let reader = reader_for(config);
    log::debug!(
        "consuming '{}' with {}",
        config.path.display(),
        reader.description()
    );

    let started = Instant::now();
    let summary = reader.consume(&config.path, &config.tally)?;

    log::info!(
        "{}: {} lines, {} month buckets in {:?}",
        reader.description(),
        summary.total_lines,
        summary.donations.len(),
        started.elapsed()
    );
    Ok(summary)
}
