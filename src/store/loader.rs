//! Table Loader
//!
//! Reads the tab-separated sequence table into a [`RecordStore`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{LoadSummary, RecordStore, Row};
use crate::error::{GeneError, Result};
use crate::input::lossy_lines;

/// Minimum number of tab-separated fields in a row
const ROW_FIELDS: usize = 3;

/// Outcome of parsing one table line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedRow {
    Row(Row),
    Blank,
    Malformed,
}

/// Parse one table line
///
/// Fields are trimmed. Fields past the third are ignored.
pub fn parse_row(line: &str) -> ParsedRow {
    if line.trim().is_empty() {
        return ParsedRow::Blank;
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < ROW_FIELDS {
        return ParsedRow::Malformed;
    }

    ParsedRow::Row(Row::new(
        fields[0].trim(),
        fields[1].trim(),
        fields[2].trim(),
    ))
}

/// Read a whole table from a buffered reader
///
/// Skipped lines are counted in the summary, never reported as errors.
/// Invalid UTF-8 is replaced, not rejected. A read failure aborts the load.
pub fn read_table<R: BufRead>(reader: R) -> Result<(RecordStore, LoadSummary)> {
    let mut summary = LoadSummary::default();
    let mut rows = Vec::new();

    for (number, line) in lossy_lines(reader).enumerate() {
        let line = line?;
        match parse_row(&line) {
            ParsedRow::Row(row) => rows.push(row),
            ParsedRow::Blank => summary.blank_lines += 1,
            ParsedRow::Malformed => {
                tracing::debug!("Skipping malformed table row {}: {:?}", number + 1, line);
                summary.malformed_rows += 1;
            }
        }
    }

    summary.records_loaded = rows.len();
    let store = RecordStore::load(rows);

    tracing::info!(
        "Loaded {} records ({} distinct proteins), skipped {} malformed and {} blank lines",
        summary.records_loaded,
        store.distinct_names(),
        summary.malformed_rows,
        summary.blank_lines
    );

    Ok((store, summary))
}

/// Open and read a table file
pub fn load_table_file(path: &Path) -> Result<(RecordStore, LoadSummary)> {
    let file = File::open(path)
        .map_err(|e| GeneError::Table(format!("Cannot open {}: {}", path.display(), e)))?;

    read_table(BufReader::new(file))
        .map_err(|e| GeneError::Table(format!("Cannot read {}: {}", path.display(), e)))
}
