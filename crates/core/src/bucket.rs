use alloc::borrow::ToOwned;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

const DATE_LEN: usize = 8;

/// Calendar month a donation is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateBucket {
    year: u16,
    month: u8,
}

impl DateBucket {
    #[inline]
    #[must_use]
    pub const fn new(year: u16, month: u8) -> Self {
        Self { year, month }
    }

    #[inline]
    #[must_use]
    pub const fn year(self) -> u16 {
        self.year
    }

    #[inline]
    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Parse a raw `YYYYMMDD` field. The day digits must be present but are not
    /// interpreted, and the month is not range checked.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidDate`] unless `raw` is exactly eight ASCII digits.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let bytes = raw.as_bytes();
        if bytes.len() != DATE_LEN || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(ParseError::InvalidDate { raw: raw.to_owned() });
        }

        let year = bytes[0..4]
            .iter()
            .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
        let month = (bytes[4] - b'0') * 10 + (bytes[5] - b'0');
        Ok(Self::new(year, month))
    }
}

impl fmt::Display for DateBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
