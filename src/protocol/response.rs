//! Response definitions
//!
//! Content of one report block.

use crate::engine::{DiffOutcome, ModeOutcome, SearchHit};

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Search matches in store order; empty renders as NOT FOUND
    Hits(Vec<SearchHit>),

    /// Diff result
    Distance(usize),

    /// Protein names not in the store, in operand order
    Missing(Vec<String>),

    /// Mode result
    Mode { symbol: char, count: usize },

    /// Mode over a sequence with no letters
    NoSymbol,

    /// Unknown or incomplete command
    Empty,
}

impl Response {
    /// Content lines, without the block header or separator
    pub fn lines(&self) -> Vec<String> {
        match self {
            Response::Hits(hits) if hits.is_empty() => vec![" NOT FOUND".to_string()],
            Response::Hits(hits) => hits
                .iter()
                .map(|hit| format!(" {} ({}) ", hit.organism, hit.protein))
                .collect(),
            Response::Distance(distance) => vec![format!(" {} ", distance)],
            Response::Missing(names) => vec![format!(" MISSING: {} ", names.join(" "))],
            Response::Mode { symbol, count } => vec![format!(" {} {} ", symbol, count)],
            Response::NoSymbol => vec![format!(" {} {} ", ' ', 0)],
            Response::Empty => Vec::new(),
        }
    }
}

impl From<Vec<SearchHit>> for Response {
    fn from(hits: Vec<SearchHit>) -> Self {
        Response::Hits(hits)
    }
}

impl From<DiffOutcome> for Response {
    fn from(outcome: DiffOutcome) -> Self {
        match outcome {
            DiffOutcome::Distance(distance) => Response::Distance(distance),
            DiffOutcome::Missing(missing) => {
                Response::Missing(missing.names().into_iter().map(String::from).collect())
            }
        }
    }
}

impl From<ModeOutcome> for Response {
    fn from(outcome: ModeOutcome) -> Self {
        match outcome {
            ModeOutcome::Found { symbol, count } => Response::Mode { symbol, count },
            ModeOutcome::NoSymbol => Response::NoSymbol,
            ModeOutcome::Missing(name) => Response::Missing(vec![name]),
        }
    }
}
