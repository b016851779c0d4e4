//! rust_qr_ecc - QR code error correction characteristics tables
//!
//! Reads the tab-separated table of Reed-Solomon block layouts per version
//! and error correction level, checks that every row adds up, and emits the
//! result as a static array literal for a compiled consumer.
//!
//! Pipeline: [`reader`] -> [`builder`] -> [`validate`] -> [`emit`].

/// Fold records into version/level/block descriptions
pub mod builder;
/// Run configuration and environment knobs
pub mod config;
/// Static table emitter
pub mod emit;
/// Error taxonomy
pub mod error;
/// Core data structures (ECLevel, VersionDesc, ErrorTable, etc.)
pub mod models;
/// Line reader for the tab-separated table format
pub mod reader;
/// Helpers for the command line tool
pub mod tools;
/// Cross-field consistency checks
pub mod validate;

pub use error::{Result, TableError};
pub use models::{BlockDesc, ECLevel, EccDesc, ErrorTable, VersionDesc};

use std::io::Write;

/// The ISO/IEC 18004 Model 2 table for versions 1-40.
pub const BUNDLED_TABLE: &str = include_str!("../data/qr_error_characteristics.tsv");

/// Read, build and validate a table from its text.
pub fn parse_table(text: &str) -> Result<ErrorTable> {
    let records = reader::read_records(text)?;
    let versions = builder::build_versions(&records)?;
    validate::validate(versions)
}

/// Parse the bundled table.
pub fn bundled_table() -> Result<ErrorTable> {
    parse_table(BUNDLED_TABLE)
}

/// Convert table text into a C/C++ header written to `out`.
///
/// Returns the number of bytes written. Nothing is written if the table
/// fails to parse or validate.
pub fn convert<W: Write + ?Sized>(text: &str, header_guard: &str, out: &mut W) -> Result<usize> {
    let table = parse_table(text)?;
    emit::write_table(&table, header_guard, out)
}
