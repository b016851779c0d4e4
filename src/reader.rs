//! Line reader: splits table text into records.
//!
//! Each line yields one record, so record positions stay aligned with
//! 1-based source line numbers. Blank lines and `#` comments become
//! [`Record::Empty`]; everything else must have exactly six tab-separated fields.

use crate::error::{Result, TableError};

/// Number of tab-separated columns in a data line.
pub const FIELD_COUNT: usize = 6;

/// Marks a comment line when it is the first character.
pub const COMMENT_MARKER: char = '#';

/// The six raw columns of a data line, in table order. Blank means "".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields<'a> {
    pub version: &'a str,
    pub total_codewords: &'a str,
    pub ecc_level: &'a str,
    pub ecc_codewords: &'a str,
    pub block_count: &'a str,
    pub block_code: &'a str,
}

impl<'a> Fields<'a> {
    pub fn new(columns: [&'a str; FIELD_COUNT]) -> Self {
        let [
            version,
            total_codewords,
            ecc_level,
            ecc_codewords,
            block_count,
            block_code,
        ] = columns;
        Self {
            version,
            total_codewords,
            ecc_level,
            ecc_codewords,
            block_count,
            block_code,
        }
    }
}

/// One input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record<'a> {
    /// Blank or comment line; carries no data
    Empty { line: usize },
    Data { line: usize, fields: Fields<'a> },
}

/// Split one line into a record. `line` is the 1-based source line number.
pub fn parse_line(line: usize, text: &str) -> Result<Record<'_>> {
    if text.is_empty() || text.starts_with(COMMENT_MARKER) {
        return Ok(Record::Empty { line });
    }

    let columns: Vec<&str> = text.split('\t').collect();
    let found = columns.len();
    let columns: [&str; FIELD_COUNT] = columns
        .try_into()
        .map_err(|_| TableError::MalformedRecord { line, found })?;

    Ok(Record::Data {
        line,
        fields: Fields::new(columns),
    })
}

/// Split table text into records, stopping at the first malformed line.
pub fn read_records(text: &str) -> Result<Vec<Record<'_>>> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| parse_line(idx + 1, line))
        .collect()
}
