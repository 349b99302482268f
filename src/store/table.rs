//! RecordStore implementation
//!
//! Vec of records in input order plus a HashMap name index.

use std::collections::HashMap;

use super::{Record, Row};
use crate::rle;

/// Frozen, queryable collection of records for one batch run
///
/// Built once by [`RecordStore::load`]; every public method takes `&self`.
#[derive(Debug, Default)]
pub struct RecordStore {
    /// All records, including ones shadowed in the index
    records: Vec<Record>,

    /// ASCII-lowercased protein name → position in `records`
    index: HashMap<String, usize>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from rows, decoding each sequence
    ///
    /// Duplicate protein names are all kept in order; the index points at
    /// the last one.
    pub fn load<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Row>,
    {
        let mut store = Self::new();
        for row in rows {
            store.append(row);
        }
        store
    }

    fn append(&mut self, row: Row) {
        let record = Record {
            sequence: rle::decode(&row.encoded),
            protein: row.protein,
            organism: row.organism,
        };

        let position = self.records.len();
        if let Some(previous) = self.index.insert(fold_name(&record.protein), position) {
            tracing::debug!(
                "Protein {} at row {} shadows row {}",
                record.protein,
                position + 1,
                previous + 1
            );
        }
        self.records.push(record);
    }

    /// Case-insensitive exact match on protein name
    pub fn find_by_name(&self, name: &str) -> Option<&Record> {
        self.index
            .get(&fold_name(name))
            .map(|&position| &self.records[position])
    }

    /// All records in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records (duplicates included)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct protein names
    pub fn distinct_names(&self) -> usize {
        self.index.len()
    }
}

fn fold_name(name: &str) -> String {
    name.to_ascii_lowercase()
}
