use std::path::{Path, PathBuf};

use donation_tally_core::ParseError;
use thiserror::Error;

use crate::config::ConfigBuilderError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed line {line}: {source}")]
    MalformedLine {
        line: u64,
        #[source]
        source: ParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Pipeline failure: {0}")]
    Pipeline(String),
}

impl EngineError {
    /// Attach `path` to a bare I/O error raised while reading it.
    #[must_use]
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            Self::Io(source) => Self::FileRead {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}

impl From<ConfigBuilderError> for EngineError {
    fn from(err: ConfigBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
