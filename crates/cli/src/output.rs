// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CSV serialization of report rows.

use std::borrow::Cow;
use std::io::Write;

/// Quote a field when it contains a delimiter, quote, or line break,
/// doubling embedded quotes (RFC 4180).
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains(['"', ',', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Write rows as CSV to any writer.
pub fn write_rows<W: Write>(writer: &mut W, rows: &[Vec<String>]) -> std::io::Result<()> {
    for row in rows {
        for (index, field) in row.iter().enumerate() {
            if index > 0 {
                writer.write_all(b",")?;
            }
            writer.write_all(escape(field).as_bytes())?;
        }
        writer.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
