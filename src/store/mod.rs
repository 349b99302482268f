//! Record Store Module
//!
//! In-memory table of decoded protein records.
//!
//! ## Responsibilities
//! - Decode each row's sequence once, at load time
//! - Keep every record in input order (search output depends on it)
//! - Index protein names case-insensitively, last row wins
//! - Stay read-only after load
//!
//! ## Table Format
//! ```text
//! protein<TAB>organism<TAB>rle-encoded-sequence
//! ```
//! Blank lines and lines with fewer than three fields are skipped.

mod table;
mod loader;

pub use table::RecordStore;
pub use loader::{parse_row, read_table, load_table_file, ParsedRow};

/// A decoded protein record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Lookup key, compared case-insensitively
    pub protein: String,

    pub organism: String,

    /// Decoded amino-acid chain
    pub sequence: String,
}

/// A table row before decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub protein: String,
    pub organism: String,

    /// Sequence as written in the table (run-length encoded)
    pub encoded: String,
}

impl Row {
    pub fn new(
        protein: impl Into<String>,
        organism: impl Into<String>,
        encoded: impl Into<String>,
    ) -> Self {
        Self {
            protein: protein.into(),
            organism: organism.into(),
            encoded: encoded.into(),
        }
    }
}

/// Counts gathered while reading a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Rows turned into records
    pub records_loaded: usize,

    /// Empty or whitespace-only lines
    pub blank_lines: usize,

    /// Lines with fewer than three fields
    pub malformed_rows: usize,
}
