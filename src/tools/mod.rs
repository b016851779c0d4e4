//! File-level helpers used by the `qrtablegen` binary.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::config::{OutputTarget, RunConfig};
use crate::emit::write_table;
use crate::error::{Result, TableError};
use crate::models::ErrorTable;
use crate::parse_table;

/// What a successful run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub versions: usize,
    pub bytes_written: usize,
}

/// Read a table file as UTF-8 text.
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the table to `path`, then flush and sync the file before returning.
pub fn write_table_file<P: AsRef<Path>>(table: &ErrorTable, guard: &str, path: P) -> Result<usize> {
    let path = path.as_ref();
    let io_error = |source| TableError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut out = BufWriter::new(file);
    let written = write_table(table, guard, &mut out)?;
    let file = out
        .into_inner()
        .map_err(|err| TableError::Write(err.into_error()))?;
    file.sync_all().map_err(io_error)?;
    Ok(written)
}

/// Write the table to standard output and flush it.
pub fn write_table_stdout(table: &ErrorTable, guard: &str) -> Result<usize> {
    let mut out = io::stdout().lock();
    let written = write_table(table, guard, &mut out)?;
    out.flush().map_err(TableError::Write)?;
    Ok(written)
}

/// Read, build, validate and emit. Nothing is written unless the table is valid.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let text = load_input(&config.input)?;
    let table = parse_table(&text)?;

    let bytes_written = match &config.output {
        OutputTarget::Stdout => write_table_stdout(&table, &config.header_guard)?,
        OutputTarget::File(path) => write_table_file(&table, &config.header_guard, path)?,
    };

    info!(
        input = %config.input.display(),
        output = %config.output,
        versions = table.len(),
        bytes_written,
        "conversion finished"
    );
    Ok(RunSummary {
        versions: table.len(),
        bytes_written,
    })
}
