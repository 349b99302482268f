//! Engine Module
//!
//! The query engine that answers commands against a [`RecordStore`].
//!
//! ## Responsibilities
//! - Substring search over every record, in store order
//! - Fixed-alignment difference between two named proteins
//! - Most frequent letter in a named protein
//!
//! None of the queries fail: a missing protein or an empty sequence comes
//! back as a variant of the outcome type.

use std::collections::BTreeMap;

use crate::protocol::{Command, Response};
use crate::store::{Record, RecordStore};

/// A record matched by [`QueryEngine::search`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub organism: String,
    pub protein: String,
}

impl From<&Record> for SearchHit {
    fn from(record: &Record) -> Self {
        Self {
            organism: record.organism.clone(),
            protein: record.protein.clone(),
        }
    }
}

/// Which operand(s) of a diff could not be resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingNames {
    First(String),
    Second(String),
    Both(String, String),
}

impl MissingNames {
    /// Missing names in operand order
    pub fn names(&self) -> Vec<&str> {
        match self {
            MissingNames::First(name) | MissingNames::Second(name) => vec![name.as_str()],
            MissingNames::Both(first, second) => vec![first.as_str(), second.as_str()],
        }
    }
}

/// Result of [`QueryEngine::diff`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    /// Positional mismatches plus the length difference
    Distance(usize),
    Missing(MissingNames),
}

/// Result of [`QueryEngine::mode`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeOutcome {
    /// Most frequent letter and how often it occurs
    Found { symbol: char, count: usize },

    /// The sequence has no letters at all
    NoSymbol,

    Missing(String),
}

/// Stateless queries over a borrowed store
///
/// Borrowing `&RecordStore` keeps the store frozen for the engine's lifetime.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    store: &'a RecordStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Execute a parsed command
    ///
    /// Routes commands to the matching query and wraps the result for the
    /// report.
    pub fn execute(&self, command: &Command) -> Response {
        match command {
            Command::Search { pattern } => Response::from(self.search(pattern)),
            Command::Diff { first, second } => Response::from(self.diff(first, second)),
            Command::Mode { protein } => Response::from(self.mode(protein)),
        }
    }

    /// Records whose sequence contains `pattern`
    ///
    /// Case-sensitive, contiguous. Shadowed duplicates are searched too.
    pub fn search(&self, pattern: &str) -> Vec<SearchHit> {
        self.store
            .records()
            .iter()
            .filter(|record| record.sequence.contains(pattern))
            .map(SearchHit::from)
            .collect()
    }

    /// Difference between two proteins' sequences
    ///
    /// Counts positions where the characters differ over the shorter length,
    /// then adds the length difference. No gaps are inserted.
    pub fn diff(&self, first: &str, second: &str) -> DiffOutcome {
        let a = self.store.find_by_name(first);
        let b = self.store.find_by_name(second);

        match (a, b) {
            (Some(a), Some(b)) => {
                DiffOutcome::Distance(sequence_distance(&a.sequence, &b.sequence))
            }
            (None, None) => DiffOutcome::Missing(MissingNames::Both(
                first.to_string(),
                second.to_string(),
            )),
            (None, Some(_)) => DiffOutcome::Missing(MissingNames::First(first.to_string())),
            (Some(_), None) => DiffOutcome::Missing(MissingNames::Second(second.to_string())),
        }
    }

    /// Most frequent letter in a protein's sequence
    ///
    /// Non-letters are ignored. Ties go to the smallest letter.
    pub fn mode(&self, protein: &str) -> ModeOutcome {
        match self.store.find_by_name(protein) {
            Some(record) => modal_symbol(&record.sequence),
            None => ModeOutcome::Missing(protein.to_string()),
        }
    }
}

/// Hamming-style count with a length penalty
pub fn sequence_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mismatches = a.iter().zip(&b).filter(|(x, y)| x != y).count();
    mismatches + a.len().abs_diff(b.len())
}

fn modal_symbol(sequence: &str) -> ModeOutcome {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for c in sequence.chars().filter(|c| c.is_alphabetic()) {
        *counts.entry(c).or_insert(0) += 1;
    }

    // Ascending key order plus a strict comparison keeps the smallest on ties
    let mut best: Option<(char, usize)> = None;
    for (&symbol, &count) in &counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((symbol, count));
        }
    }

    match best {
        Some((symbol, count)) => ModeOutcome::Found { symbol, count },
        None => ModeOutcome::NoSymbol,
    }
}
