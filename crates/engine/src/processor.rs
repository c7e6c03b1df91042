use crate::error::{EngineError, Result};
use crate::options::Variant;
use crate::source;
use donation_tally_core::{Summary, Tally, TallyOptions};
use std::io::BufRead;
use std::path::Path;

/// One way of turning a file into a [`Summary`].
///
/// Implementations hold no state between runs; every call to
/// [`FileReader::consume`] starts from fresh counters.
pub trait FileReader {
    /// Label identifying the implementation in reports.
    fn description(&self) -> &'static str;

    /// Aggregate the file at `path` in a single pass.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable chunk or malformed line. No partial
    /// summary is returned.
    fn consume(&self, path: &Path, options: &TallyOptions) -> Result<Summary>;
}

/// Reads and aggregates on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl FileReader for Sequential {
    fn description(&self) -> &'static str {
        Variant::Sequential.description()
    }

    fn consume(&self, path: &Path, options: &TallyOptions) -> Result<Summary> {
        let reader = source::open(path)?;
        consume_reader(reader, options).map_err(|e| e.with_path(path))
    }
}

/// Aggregate every line of `reader` in order.
///
/// # Errors
///
/// Returns [`EngineError::Io`] when reading fails and
/// [`EngineError::MalformedLine`] for the first line that cannot be parsed.
pub fn consume_reader<R: BufRead>(mut reader: R, options: &TallyOptions) -> Result<Summary> {
    let mut tally = Tally::new(options);
    let mut line = String::new();

    while source::next_line(&mut reader, &mut line)? {
        observe(&mut tally, &line)?;
    }

    Ok(tally.finish())
}

pub(crate) fn observe(tally: &mut Tally<'_>, line: &str) -> Result<()> {
    tally
        .observe(line)
        .map_err(|source| EngineError::MalformedLine {
            line: tally.lines(),
            source,
        })
}
