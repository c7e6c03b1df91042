use alloc::collections::BTreeMap;
use alloc::string::String;
use core::cmp::Ordering;

use hashbrown::HashMap;

use crate::bucket::DateBucket;
use crate::config::TallyOptions;
use crate::error::ParseError;
use crate::parser::Record;
use crate::stats::{NameCount, Summary};

/// Aggregation state for a single pass over a source.
///
/// Lines must be fed in source order; the capture map depends on it. The state
/// is consumed by [`Tally::finish`] and cannot be reused for another run.
#[derive(Debug)]
pub struct Tally<'a> {
    options: &'a TallyOptions,
    lines: u64,
    captured_names: BTreeMap<u64, String>,
    donations: HashMap<DateBucket, u64>,
    first_names: HashMap<String, u64>,
}

impl<'a> Tally<'a> {
    #[must_use]
    pub fn new(options: &'a TallyOptions) -> Self {
        Self {
            options,
            lines: 0,
            captured_names: BTreeMap::new(),
            donations: HashMap::new(),
            first_names: HashMap::new(),
        }
    }

    /// Lines observed so far, including a line that just failed to parse.
    #[inline]
    #[must_use]
    pub const fn lines(&self) -> u64 {
        self.lines
    }

    /// Fold one line (without its terminator) into the running counters.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] of a malformed line. The tally should be
    /// discarded afterwards.
    pub fn observe(&mut self, line: &str) -> Result<(), ParseError> {
        self.lines += 1;
        let record = Record::parse(line)?;

        if self.options.capture_lines.contains(&self.lines) {
            self.captured_names
                .insert(self.lines - 1, String::from(record.name));
        }

        if let Some(name) = record.first_name() {
            *self.first_names.entry_ref(name).or_insert(0) += 1;
        }

        *self.donations.entry(record.bucket).or_insert(0) += 1;
        Ok(())
    }

    /// Reduce the counters into the final [`Summary`].
    ///
    /// Ties for the most common first name go to the smallest name.
    #[must_use]
    pub fn finish(self) -> Summary {
        let most_common_first_name = self
            .first_names
            .into_iter()
            .max_by(|(a_name, a), (b_name, b)| by_count_then_name(*a, a_name, *b, b_name))
            .map(|(name, count)| NameCount { name, count });

        Summary {
            total_lines: self.lines,
            captured_names: self.captured_names,
            donations: self.donations.into_iter().collect(),
            most_common_first_name,
        }
    }
}

fn by_count_then_name(a: u64, a_name: &str, b: u64, b_name: &str) -> Ordering {
    a.cmp(&b).then_with(|| b_name.cmp(a_name))
}
