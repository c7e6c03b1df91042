use memchr::memchr;

use crate::bucket::DateBucket;
use crate::error::ParseError;

/// Maximum number of positional columns a line is split into. Anything past the
/// eighth delimiter stays inside the last column.
pub const MAX_COLUMNS: usize = 9;
/// Zero-based column holding the date in `YYYYMMDD` form.
pub const DATE_COLUMN: usize = 4;
/// Zero-based column holding the donor name.
pub const NAME_COLUMN: usize = 7;

const COLUMN_DELIMITER: u8 = b'|';
const NAME_DELIMITER: &str = ", ";
const NAME_PARTS: usize = 3;

/// Positional view over one line, borrowing from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns<'a> {
    fields: [&'a str; MAX_COLUMNS],
    len: usize,
}

impl<'a> Columns<'a> {
    const fn empty() -> Self {
        Self {
            fields: [""; MAX_COLUMNS],
            len: 0,
        }
    }

    fn push(&mut self, field: &'a str) {
        self.fields[self.len] = field;
        self.len += 1;
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[&'a str] {
        &self.fields[..self.len]
    }

    /// Column at `index`, or [`ParseError::MissingField`] when the line is too short.
    ///
    /// # Errors
    ///
    /// Fails when the line has `index` columns or fewer.
    pub fn field(&self, index: usize) -> Result<&'a str, ParseError> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(ParseError::MissingField {
                index,
                found: self.len,
            })
    }
}

/// Whitespace as matched by the `\s` class around a pipe.
#[inline]
const fn is_pad(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Split `line` on whitespace-padded pipes into at most [`MAX_COLUMNS`] columns.
///
/// Padding is only stripped where it touches a pipe. A leading pipe produces an
/// empty first column and trailing empty columns are kept.
#[must_use]
pub fn split_columns(line: &str) -> Columns<'_> {
    let bytes = line.as_bytes();
    let mut columns = Columns::empty();
    let mut start = 0;

    while columns.len < MAX_COLUMNS - 1 {
        let Some(offset) = memchr(COLUMN_DELIMITER, &bytes[start..]) else {
            break;
        };
        let pipe = start + offset;

        let mut end = pipe;
        while end > start && is_pad(bytes[end - 1]) {
            end -= 1;
        }
        columns.push(&line[start..end]);

        start = pipe + 1;
        while start < bytes.len() && is_pad(bytes[start]) {
            start += 1;
        }
    }

    columns.push(&line[start..]);
    columns
}

/// First name of a `"Last, First Middle"` name column.
///
/// Returns `None` when there is no `", "` separated second part or that part is
/// blank.
#[must_use]
pub fn first_name(name: &str) -> Option<&str> {
    let mut parts = name.splitn(NAME_PARTS, NAME_DELIMITER);
    parts.next();
    let given = parts.next()?.trim();
    if given.is_empty() {
        return None;
    }
    given
        .split(' ')
        .next()
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// The parts of a line the aggregation cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub name: &'a str,
    pub bucket: DateBucket,
}

impl<'a> Record<'a> {
    /// # Errors
    ///
    /// Returns [`ParseError::MissingField`] for lines with fewer than eight columns
    /// and [`ParseError::InvalidDate`] for a malformed date column.
    pub fn parse(line: &'a str) -> Result<Self, ParseError> {
        let columns = split_columns(line);
        let name = columns.field(NAME_COLUMN)?;
        let bucket = DateBucket::parse(columns.field(DATE_COLUMN)?)?;
        Ok(Self { name, bucket })
    }

    #[must_use]
    pub fn first_name(&self) -> Option<&'a str> {
        first_name(self.name)
    }
}
