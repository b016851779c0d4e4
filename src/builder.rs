//! Table builder: folds records into `VersionDesc -> EccDesc -> BlockDesc`.
//!
//! Blank version/level columns continue the most recently opened version and
//! level. A new version or level is only ever opened by an explicit value.
//! Within one record the columns are handled version first, then level,
//! then block group, so one line may open all three.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

use crate::error::{Result, TableError};
use crate::models::{BlockDesc, ECLevel, EccDesc, VersionDesc};
use crate::reader::{Fields, Record};

/// Highest Model 2 version.
pub const MAX_VERSION: u8 = 40;

static BLOCK_CODE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn block_code_pattern() -> &'static Regex {
    BLOCK_CODE_PATTERN.get_or_init(|| {
        Regex::new(r"^\(([0-9]+),([0-9]+)\)$").expect("block code pattern compiles")
    })
}

/// Parse an unsigned base-10 number made only of ASCII digits.
fn parse_number(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn parse_version(line: usize, token: &str) -> Result<u8> {
    let invalid = |reason| TableError::InvalidVersion {
        line,
        value: token.to_string(),
        reason,
    };
    let number = parse_number(token).ok_or_else(|| invalid("not a number"))?;
    match u8::try_from(number) {
        Ok(version) if (1..=MAX_VERSION).contains(&version) => Ok(version),
        _ => Err(invalid("out of range 1-40")),
    }
}

fn parse_codeword_count(line: usize, field: &'static str, token: &str) -> Result<u32> {
    parse_number(token).ok_or_else(|| TableError::InvalidCodewordCount {
        line,
        field,
        value: token.to_string(),
    })
}

fn parse_level(line: usize, token: &str) -> Result<ECLevel> {
    ECLevel::parse(token).ok_or_else(|| TableError::InvalidEccLevel {
        line,
        value: token.to_string(),
    })
}

fn parse_block_count(line: usize, token: &str) -> Result<u32> {
    match parse_number(token) {
        Some(count) if count >= 1 => Ok(count),
        _ => Err(TableError::InvalidBlockCount {
            line,
            value: token.to_string(),
        }),
    }
}

/// Parse a `(total,data)` block code into a block group of `count` blocks.
pub fn parse_block_code(line: usize, count: u32, token: &str) -> Result<BlockDesc> {
    let invalid = |reason| TableError::InvalidBlockCode {
        line,
        value: token.to_string(),
        reason,
    };

    let caps = block_code_pattern()
        .captures(token)
        .ok_or_else(|| invalid("expected (total,data)"))?;
    let codewords_total =
        parse_number(&caps[1]).ok_or_else(|| invalid("bad total codewords in block code"))?;
    let codewords_data =
        parse_number(&caps[2]).ok_or_else(|| invalid("bad data codewords in block code"))?;

    if codewords_total == 0 || codewords_data == 0 {
        return Err(invalid("codeword counts must be at least 1"));
    }
    if codewords_data > codewords_total {
        return Err(invalid("data codewords exceed total codewords"));
    }

    Ok(BlockDesc {
        count,
        codewords_total,
        codewords_data,
    })
}

/// Carry-over state for one conversion.
///
/// The current version is the last one pushed; the current level is the
/// last level of the current version.
#[derive(Debug, Default)]
pub struct TableBuilder {
    versions: Vec<VersionDesc>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one record.
    pub fn push(&mut self, record: &Record<'_>) -> Result<()> {
        match record {
            Record::Empty { .. } => Ok(()),
            Record::Data { line, fields } => self.push_fields(*line, fields),
        }
    }

    fn push_fields(&mut self, line: usize, fields: &Fields<'_>) -> Result<()> {
        if !fields.version.is_empty() {
            let version = parse_version(line, fields.version)?;
            if self.versions.iter().any(|v| v.version == version) {
                return Err(TableError::InvalidVersion {
                    line,
                    value: fields.version.to_string(),
                    reason: "duplicate version",
                });
            }
            let total = parse_codeword_count(line, "total codewords", fields.total_codewords)?;
            debug!(line, version, total_codewords = total, "opened version");
            self.versions.push(VersionDesc::new(version, total));
        }

        let current = self
            .versions
            .last_mut()
            .ok_or(TableError::NoOpenVersion { line })?;

        if !fields.ecc_level.is_empty() {
            let level = parse_level(line, fields.ecc_level)?;
            let ecc = parse_codeword_count(line, "ecc codewords", fields.ecc_codewords)?;
            current.levels.push(EccDesc::new(level, ecc));
        }

        let level = current
            .levels
            .last_mut()
            .ok_or(TableError::NoOpenEccLevel { line })?;

        if !fields.block_count.is_empty() {
            let count = parse_block_count(line, fields.block_count)?;
            level.blocks.push(parse_block_code(line, count, fields.block_code)?);
        }

        Ok(())
    }

    /// Finish building and hand over the versions in table order.
    pub fn finish(self) -> Vec<VersionDesc> {
        self.versions
    }
}

/// Fold a record sequence into version descriptions.
pub fn build_versions(records: &[Record<'_>]) -> Result<Vec<VersionDesc>> {
    let mut builder = TableBuilder::new();
    for record in records {
        builder.push(record)?;
    }
    let versions = builder.finish();

    let groups: usize = versions
        .iter()
        .flat_map(|v| &v.levels)
        .map(|l| l.blocks.len())
        .sum();
    info!(versions = versions.len(), block_groups = groups, "built table");
    Ok(versions)
}
