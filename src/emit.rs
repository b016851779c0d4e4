//! Emits a validated table as a static array literal.
//!
//! Output is a preamble, one row per version, and a postamble. Only the guard
//! placeholder and the data rows are generated; the rest of the template is
//! fixed text. Every write must be accepted in full.

use std::fmt::Write as _;
use std::io::{self, Write};

use tracing::info;

use crate::error::{Result, TableError};
use crate::models::{ErrorTable, VersionDesc};

/// Token replaced by the header guard in the template text.
pub const GUARD_PLACEHOLDER: &str = "GUARD";

const HEADER_PREAMBLE: &str = r#"
#ifndef GUARD
#define GUARD 1

#include "qrcode/qr_error_characteristics.impl.h"

static const ErrorCharacteristicsDesc kQRErrorCharacteristics[] = {
"#;

const HEADER_POSTAMBLE: &str = r#"
};

#endif // GUARD
"#;

/// Fixed text surrounding the generated rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template<'a> {
    pub preamble: &'a str,
    pub postamble: &'a str,
    /// Replaced everywhere in the preamble and postamble
    pub placeholder: &'a str,
}

impl Template<'static> {
    /// C/C++ header declaring `kQRErrorCharacteristics`.
    pub const C_HEADER: Template<'static> = Template {
        preamble: HEADER_PREAMBLE,
        postamble: HEADER_POSTAMBLE,
        placeholder: GUARD_PLACEHOLDER,
    };
}

impl Default for Template<'static> {
    fn default() -> Self {
        Template::C_HEADER
    }
}

impl Template<'_> {
    /// The guard is inserted verbatim.
    pub fn preamble_for(&self, guard: &str) -> String {
        self.preamble.replace(self.placeholder, guard)
    }

    pub fn postamble_for(&self, guard: &str) -> String {
        self.postamble.replace(self.placeholder, guard)
    }
}

/// Render one version row: `{V, { {{{count,total,data},...}},... } },`
pub fn render_version(desc: &VersionDesc) -> String {
    let mut row = format!("{{{}, {{ ", desc.version);
    for level in &desc.levels {
        row.push_str("{{");
        for block in &level.blocks {
            // Writing into a String cannot fail.
            let _ = write!(
                row,
                "{{{},{},{}}},",
                block.count, block.codewords_total, block.codewords_data
            );
        }
        row.push_str("}},");
    }
    row.push_str("} },\n");
    row
}

/// Write `text` with a single call, treating a partial write as fatal.
fn write_checked<W: Write + ?Sized>(out: &mut W, text: &str) -> Result<usize> {
    let written = out.write(text.as_bytes()).map_err(TableError::Write)?;
    if written != text.len() {
        return Err(TableError::Write(io::Error::new(
            io::ErrorKind::WriteZero,
            format!("short write: {written} of {} bytes", text.len()),
        )));
    }
    Ok(written)
}

/// Emit `table` through `template`. Returns the number of bytes written.
pub fn write_table_with<W: Write + ?Sized>(
    table: &ErrorTable,
    template: &Template<'_>,
    guard: &str,
    out: &mut W,
) -> Result<usize> {
    let mut total = write_checked(out, &template.preamble_for(guard))?;
    for desc in table.versions() {
        total += write_checked(out, &render_version(desc))?;
    }
    total += write_checked(out, &template.postamble_for(guard))?;

    info!(versions = table.len(), bytes = total, "emitted table");
    Ok(total)
}

/// Emit `table` as a C/C++ header guarded by `guard`.
pub fn write_table<W: Write + ?Sized>(table: &ErrorTable, guard: &str, out: &mut W) -> Result<usize> {
    write_table_with(table, &Template::C_HEADER, guard, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlockDesc, ECLevel, EccDesc};
    use crate::validate::validate;

    fn version_1() -> VersionDesc {
        let mut v = VersionDesc::new(1, 26);
        for (level, ecc, data) in [
            (ECLevel::L, 7, 19),
            (ECLevel::M, 10, 16),
            (ECLevel::Q, 13, 13),
            (ECLevel::H, 17, 9),
        ] {
            let mut desc = EccDesc::new(level, ecc);
            desc.blocks.push(BlockDesc {
                count: 1,
                codewords_total: 26,
                codewords_data: data,
            });
            v.levels.push(desc);
        }
        v
    }

    /// Accepts at most `limit` bytes per call.
    struct ChokedWriter {
        limit: usize,
        data: Vec<u8>,
    }

    impl Write for ChokedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(self.limit);
            self.data.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_render_version_row() {
        assert_eq!(
            render_version(&version_1()),
            "{1, { {{{1,26,19},}},{{{1,26,16},}},{{{1,26,13},}},{{{1,26,9},}},} },\n"
        );
    }

    #[test]
    fn test_render_multiple_groups() {
        let mut v = VersionDesc::new(5, 134);
        let mut q = EccDesc::new(ECLevel::Q, 72);
        q.blocks.push(BlockDesc {
            count: 2,
            codewords_total: 33,
            codewords_data: 15,
        });
        q.blocks.push(BlockDesc {
            count: 2,
            codewords_total: 34,
            codewords_data: 16,
        });
        v.levels.push(q);
        assert_eq!(render_version(&v), "{5, { {{{2,33,15},{2,34,16},}},} },\n");
    }

    #[test]
    fn test_guard_substituted_everywhere() {
        let table = validate(vec![version_1()]).unwrap();
        let mut out = Vec::new();
        let written = write_table(&table, "QR_EC_DATA_H_", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(written, text.len());
        assert!(!text.contains(GUARD_PLACEHOLDER));
        assert!(text.starts_with("\n#ifndef QR_EC_DATA_H_\n#define QR_EC_DATA_H_ 1\n"));
        assert!(text.contains("kQRErrorCharacteristics[] = {\n{1, { "));
        assert!(text.ends_with("} },\n\n};\n\n#endif // QR_EC_DATA_H_\n"));
    }

    #[test]
    fn test_guard_inserted_verbatim() {
        let template = Template {
            preamble: "open GUARD GUARD\n",
            postamble: "close GUARD\n",
            placeholder: "GUARD",
        };
        let table = ErrorTable::default();
        let mut out = Vec::new();
        write_table_with(&table, &template, "not a valid identifier!", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "open not a valid identifier! not a valid identifier!\nclose not a valid identifier!\n"
        );
    }

    #[test]
    fn test_short_write_is_fatal() {
        let table = validate(vec![version_1()]).unwrap();
        let mut out = ChokedWriter {
            limit: 8,
            data: Vec::new(),
        };
        let err = write_table(&table, "G", &mut out).unwrap_err();
        match err {
            TableError::Write(source) => {
                assert_eq!(source.kind(), io::ErrorKind::WriteZero);
                assert!(source.to_string().contains("short write"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(out.data.len(), 8);
    }

    #[test]
    fn test_write_error_is_reported() {
        let table = validate(vec![version_1()]).unwrap();
        let err = write_table(&table, "G", &mut BrokenWriter).unwrap_err();
        assert!(matches!(err, TableError::Write(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
