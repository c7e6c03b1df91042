use hashbrown::HashSet;

/// One-based line numbers whose name column is captured by default.
pub const DEFAULT_CAPTURE_LINES: [u64; 3] = [1, 433, 43244];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyOptions {
    /// One-based line numbers whose name column is kept in the summary.
    pub capture_lines: HashSet<u64>,
}

impl TallyOptions {
    #[must_use]
    pub fn with_capture_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        Self {
            capture_lines: lines.into_iter().collect(),
        }
    }
}

impl Default for TallyOptions {
    fn default() -> Self {
        Self::with_capture_lines(DEFAULT_CAPTURE_LINES)
    }
}
