//! Run configuration and environment knobs.

use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::error::{Result, TableError};

/// Output path that selects standard output.
pub const STDOUT_SENTINEL: &str = "-";

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "QR_TABLEGEN_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

fn parse_env_string(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

static LOG_FILTER: OnceLock<String> = OnceLock::new();

/// Log filter directive (`QR_TABLEGEN_LOG`, default `warn`).
pub fn log_filter() -> &'static str {
    LOG_FILTER.get_or_init(|| parse_env_string(LOG_ENV, DEFAULT_LOG_FILTER))
}

/// Where the generated table goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn parse(value: &str) -> Self {
        if value == STDOUT_SENTINEL {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(value))
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => f.write_str("<stdout>"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Everything one conversion run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: OutputTarget,
    pub header_guard: String,
}

fn required(value: Option<String>, flag: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(TableError::Configuration(format!("--{flag} is required"))),
    }
}

impl RunConfig {
    /// Check that all three settings are present and non-empty.
    ///
    /// Output and guard are checked before input so that a missing guard is
    /// reported even when the input is missing too.
    pub fn new(
        input: Option<String>,
        output: Option<String>,
        header_guard: Option<String>,
    ) -> Result<Self> {
        let output = required(output, "output")?;
        let header_guard = required(header_guard, "header-guard")?;
        let input = required(input, "input")?;

        Ok(Self {
            input: PathBuf::from(input),
            output: OutputTarget::parse(&output),
            header_guard,
        })
    }
}
