use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reader implementation used for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Read and aggregate on the calling thread.
    #[default]
    Sequential,
    /// Read on a dedicated thread, aggregate on the calling thread.
    Pipelined,
}

impl Variant {
    pub const ALL: [Self; 2] = [Self::Sequential, Self::Pipelined];

    /// Short name accepted on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Pipelined => "pipelined",
        }
    }

    /// Human-readable label identifying the implementation.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Sequential => "Rust BufRead",
            Self::Pipelined => "Rust BufRead + reader thread",
        }
    }

    #[must_use]
    pub fn from_description(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.description().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(key))
            .or_else(|| Self::from_description(key))
            .ok_or_else(|| format!("Unknown variant: {key}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_descriptions() {
        assert_eq!("sequential".parse::<Variant>().unwrap(), Variant::Sequential);
        assert_eq!("PIPELINED".parse::<Variant>().unwrap(), Variant::Pipelined);
        assert_eq!("rust bufread".parse::<Variant>().unwrap(), Variant::Sequential);
        assert!("mmap".parse::<Variant>().is_err());
    }

    #[test]
    fn descriptions_are_unique() {
        assert_ne!(
            Variant::Sequential.description(),
            Variant::Pipelined.description()
        );
        for v in Variant::ALL {
            assert_eq!(Variant::from_description(v.description()), Some(v));
        }
    }
}
