use std::fmt;
use std::str::FromStr;

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// Every level, in the order a version lists them.
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Parse the single-letter table spelling. Anything else is rejected.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "L" => Some(ECLevel::L),
            "M" => Some(ECLevel::M),
            "Q" => Some(ECLevel::Q),
            "H" => Some(ECLevel::H),
            _ => None,
        }
    }

    /// Single-letter spelling used in tables and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ECLevel::L => "L",
            ECLevel::M => "M",
            ECLevel::Q => "Q",
            ECLevel::H => "H",
        }
    }
}

impl fmt::Display for ECLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token is not one of `L`, `M`, `Q`, `H`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(pub String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bad ecc level {:?}", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for ECLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ECLevel::parse(s).ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/// Render a level sequence as `[L,M,Q]`.
pub fn format_levels(levels: &[ECLevel]) -> String {
    let names: Vec<&str> = levels.iter().map(ECLevel::as_str).collect();
    format!("[{}]", names.join(","))
}
