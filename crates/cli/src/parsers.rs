use std::str::FromStr;

/// One-based line number, accepting `_` separators (e.g. `43_244`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineNumberArg(pub u64);

impl FromStr for LineNumberArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s.trim().replace('_', "");
        let value: u64 = cleaned
            .parse()
            .map_err(|_| format!("Invalid line number: {s}"))?;
        if value == 0 {
            return Err("Line numbers start at 1".to_string());
        }
        Ok(Self(value))
    }
}
