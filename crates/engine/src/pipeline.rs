use crate::config::{Config, DEFAULT_BATCH_SIZE, DEFAULT_CHANNEL_CAPACITY};
use crate::error::{EngineError, Result};
use crate::options::Variant;
use crate::processor::{self, FileReader};
use crate::source;
use crossbeam_channel::{Receiver, Sender};
use donation_tally_core::{Summary, Tally, TallyOptions};
use std::io::{self, BufRead};
use std::path::Path;

/// Reads lines on a dedicated thread and aggregates them on the caller's thread.
///
/// Lines travel in source order, in batches, through one bounded channel, so
/// line numbering matches the sequential reader exactly.
#[derive(Debug, Clone, Copy)]
pub struct Pipelined {
    pub batch_size: usize,
    pub channel_capacity: usize,
}

impl Default for Pipelined {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl From<&Config> for Pipelined {
    fn from(config: &Config) -> Self {
        Self {
            batch_size: config.batch_size,
            channel_capacity: config.channel_capacity,
        }
    }
}

impl FileReader for Pipelined {
    fn description(&self) -> &'static str {
        Variant::Pipelined.description()
    }

    fn consume(&self, path: &Path, options: &TallyOptions) -> Result<Summary> {
        let reader = source::open(path)?;
        self.consume_reader(reader, options)
            .map_err(|e| e.with_path(path))
    }
}

impl Pipelined {
    /// Aggregate `reader` with reading moved off the calling thread.
    ///
    /// # Errors
    ///
    /// Same conditions as [`processor::consume_reader`]. When a malformed line
    /// and a later read failure both occur, the malformed line wins.
    pub fn consume_reader<R>(&self, reader: R, options: &TallyOptions) -> Result<Summary>
    where
        R: BufRead + Send,
    {
        let batch_size = self.batch_size.max(1);
        let (tx, rx) = crossbeam_channel::bounded(self.channel_capacity.max(1));

        std::thread::scope(|scope| {
            let producer = scope.spawn(move || read_batches(reader, batch_size, &tx));

            let folded = fold_batches(rx, options);

            let produced = producer
                .join()
                .map_err(|_| EngineError::Pipeline("reader thread panicked".to_string()))?;

            let summary = folded?;
            produced?;
            Ok(summary)
        })
    }
}

/// Send owned lines in batches until the source ends or the receiver hangs up.
fn read_batches<R: BufRead>(
    mut reader: R,
    batch_size: usize,
    tx: &Sender<Vec<String>>,
) -> io::Result<()> {
    let mut batch = Vec::with_capacity(batch_size);
    let mut line = String::new();

    while source::next_line(&mut reader, &mut line)? {
        batch.push(std::mem::take(&mut line));
        if batch.len() == batch_size {
            let full = std::mem::replace(&mut batch, Vec::with_capacity(batch_size));
            if tx.send(full).is_err() {
                // aggregator stopped on a malformed line
                return Ok(());
            }
        }
    }

    if !batch.is_empty() {
        let _ = tx.send(batch);
    }
    Ok(())
}

/// Takes the receiver by value so it is dropped on error, unblocking the reader.
fn fold_batches(rx: Receiver<Vec<String>>, options: &TallyOptions) -> Result<Summary> {
    let mut tally = Tally::new(options);
    for batch in rx {
        log::trace!("aggregating batch of {} lines", batch.len());
        for line in &batch {
            processor::observe(&mut tally, line)?;
        }
    }
    Ok(tally.finish())
}
