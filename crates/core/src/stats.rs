use alloc::collections::BTreeMap;
use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::bucket::DateBucket;

/// A first name and how many lines carried it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCount {
    pub name: String,
    pub count: u64,
}

/// Immutable result of one aggregation run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of lines consumed.
    pub total_lines: u64,
    /// Name column of each captured line, keyed by the zero-based line index.
    pub captured_names: BTreeMap<u64, String>,
    /// Lines per calendar month.
    #[serde(with = "bucket_counts")]
    pub donations: BTreeMap<DateBucket, u64>,
    /// Most frequent first name, absent when no line had one.
    pub most_common_first_name: Option<NameCount>,
}

impl Summary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn donations_in(&self, year: u16, month: u8) -> u64 {
        self.donations
            .get(&DateBucket::new(year, month))
            .copied()
            .unwrap_or(0)
    }
}

/// Buckets cannot be map keys in JSON, so they travel as a list of entries.
mod bucket_counts {
    use alloc::collections::BTreeMap;
    use alloc::vec::Vec;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::bucket::DateBucket;

    #[derive(Serialize, Deserialize)]
    struct Entry {
        year: u16,
        month: u8,
        count: u64,
    }

    pub fn serialize<S>(map: &BTreeMap<DateBucket, u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(map.iter().map(|(bucket, &count)| Entry {
            year: bucket.year(),
            month: bucket.month(),
            count,
        }))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<DateBucket, u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<Entry>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .map(|e| (DateBucket::new(e.year, e.month), e.count))
            .collect())
    }
}
