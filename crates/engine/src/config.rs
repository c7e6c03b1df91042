use crate::options::Variant;
use derive_builder::Builder;
use donation_tally_core::TallyOptions;
use std::path::PathBuf;

/// Lines handed from the reader thread to the aggregator in one message.
pub const DEFAULT_BATCH_SIZE: usize = 4096;
/// Batches that may be in flight between reader and aggregator.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    pub path: PathBuf,
    #[builder(default)]
    pub variant: Variant,
    #[builder(default)]
    pub tally: TallyOptions,
    #[builder(default = "DEFAULT_BATCH_SIZE")]
    pub batch_size: usize,
    #[builder(default = "DEFAULT_CHANNEL_CAPACITY")]
    pub channel_capacity: usize,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.batch_size == Some(0) {
            return Err("batch_size must be at least 1".to_string());
        }
        if self.channel_capacity == Some(0) {
            return Err("channel_capacity must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Config {
    /// Configuration with defaults for everything but the input path.
    #[must_use]
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            variant: Variant::default(),
            tally: TallyOptions::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_defaults() {
        let config = ConfigBuilder::default()
            .path("itcont.txt")
            .build()
            .unwrap();
        assert_eq!(config.variant, Variant::Sequential);
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(config.channel_capacity, DEFAULT_CHANNEL_CAPACITY);
        assert_eq!(config.tally, TallyOptions::default());
    }

    #[test]
    fn builder_requires_path() {
        assert!(ConfigBuilder::default().build().is_err());
    }

    #[test]
    fn builder_rejects_zero_batch() {
        let err = ConfigBuilder::default()
            .path("itcont.txt")
            .batch_size(0usize)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("batch_size"));
    }
}
