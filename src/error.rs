//! Error types for table conversion.
//!
//! Parse errors carry the 1-based source line. Validation errors carry the
//! offending version (and level) together with the derived and declared values.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::{ECLevel, format_levels};

/// Every failure a conversion run can end with. None of them are recoverable.
#[derive(Error, Debug)]
pub enum TableError {
    /// A data line did not split into exactly six tab-separated fields.
    #[error("line {line}: expected 6 fields, got {found}")]
    MalformedRecord { line: usize, found: usize },

    /// A record continues a version before any version was opened.
    #[error("line {line}: missing version desc")]
    NoOpenVersion { line: usize },

    /// A record continues an ECC level before the current version has one.
    #[error("line {line}: missing version/ecc desc")]
    NoOpenEccLevel { line: usize },

    #[error("line {line}: bad version {value:?}: {reason}")]
    InvalidVersion {
        line: usize,
        value: String,
        reason: &'static str,
    },

    #[error("line {line}: bad {field} {value:?}")]
    InvalidCodewordCount {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: bad ecc level {value:?}")]
    InvalidEccLevel { line: usize, value: String },

    #[error("line {line}: bad block count {value:?}")]
    InvalidBlockCount { line: usize, value: String },

    #[error("line {line}: bad block code {value:?}: {reason}")]
    InvalidBlockCode {
        line: usize,
        value: String,
        reason: &'static str,
    },

    /// Blocks of one level do not add up to the version's codeword total.
    #[error("version {version}: {level}: derived total codewords {derived} != declared {declared}")]
    TotalCodewordMismatch {
        version: u8,
        level: ECLevel,
        derived: u64,
        declared: u64,
    },

    /// Blocks of one level do not add up to the level's ECC codeword count.
    #[error("version {version}: {level}: derived ecc codewords {derived} != declared {declared}")]
    EccCodewordMismatch {
        version: u8,
        level: ECLevel,
        derived: u64,
        declared: u64,
    },

    #[error(
        "version {}: expected levels {}, got {}",
        .version,
        format_levels(.expected),
        format_levels(.actual)
    )]
    LevelSequenceMismatch {
        version: u8,
        expected: Vec<ECLevel>,
        actual: Vec<ECLevel>,
    },

    /// Writing the generated table failed or was cut short.
    #[error("write failed: {0}")]
    Write(#[source] io::Error),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("{}: {}", .path.display(), .source)]
    Io { path: PathBuf, source: io::Error },

    #[error("no error characteristics for version {version} level {level}")]
    MissingCharacteristics { version: u8, level: ECLevel },
}

impl TableError {
    /// Source line of a parse-stage error.
    pub fn line(&self) -> Option<usize> {
        match self {
            TableError::MalformedRecord { line, .. }
            | TableError::NoOpenVersion { line }
            | TableError::NoOpenEccLevel { line }
            | TableError::InvalidVersion { line, .. }
            | TableError::InvalidCodewordCount { line, .. }
            | TableError::InvalidEccLevel { line, .. }
            | TableError::InvalidBlockCount { line, .. }
            | TableError::InvalidBlockCode { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, TableError>;
