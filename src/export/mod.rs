//! CSV spreadsheet export.

use crate::store::ExportRow;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Header row for the export spreadsheet.
const HEADERS: [&str; 6] = [
    "word",
    "notes",
    "pos",
    "definition",
    "review_count",
    "last_reviewed",
];

/// Writes export rows as CSV to the given writer.
///
/// Rows are written in the order supplied by the store: most recently
/// reviewed first, one row per meaning, with a word lacking meanings
/// appearing once with empty meaning fields.
pub fn write_csv<W: Write>(rows: &[ExportRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADERS)
        .context("failed to write CSV header")?;

    for row in rows {
        csv_writer
            .write_record([
                row.text.as_str(),
                row.notes.as_str(),
                row.pos.as_deref().unwrap_or(""),
                row.definition.as_deref().unwrap_or(""),
                &row.review_count.to_string(),
                row.last_reviewed.as_str(),
            ])
            .with_context(|| format!("failed to write CSV row for '{}'", row.text))?;
    }

    csv_writer.flush().context("failed to flush CSV output")?;
    Ok(())
}

/// Writes export rows as CSV to a file.
pub fn write_csv_file(rows: &[ExportRow], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create export file: {}", path.display()))?;
    write_csv(rows, file)
}
