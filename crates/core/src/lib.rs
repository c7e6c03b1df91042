//! Single-pass aggregation over pipe-delimited donation records.
//!
//! This crate has no I/O. Callers feed lines into a [`Tally`] in source order
//! and turn it into a [`Summary`] once the source is exhausted.

#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod bucket;
pub mod config;
pub mod error;
pub mod parser;
pub mod stats;
pub mod tally;

pub use bucket::DateBucket;
pub use config::{DEFAULT_CAPTURE_LINES, TallyOptions};
pub use error::ParseError;
pub use parser::{Columns, Record, first_name, split_columns};
pub use stats::{NameCount, Summary};
pub use tally::Tally;
