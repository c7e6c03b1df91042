use alloc::string::String;
use thiserror::Error;

/// Reasons a single record line cannot be aggregated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("field {index} is missing: line has only {found} fields")]
    MissingField { index: usize, found: usize },

    #[error("date field '{raw}' is not an 8-digit YYYYMMDD value")]
    InvalidDate { raw: String },
}
