//! # GeneQuery
//!
//! A batch query tool over a table of protein records with:
//! - Run-length encoded amino-acid sequences decoded on load
//! - Case-insensitive lookup by protein name
//! - Substring search, positional difference and modal-symbol queries
//! - A tab-delimited command script producing a formatted report
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Command Script                            │
//! │              (one tab-delimited command/line)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Dispatcher                               │
//! │          (parse → execute → write report block)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!                ┌─────────────┐
//!                │ QueryEngine │
//!                │ (read-only) │
//!                └──────┬──────┘
//!                       │
//!                       ▼
//!                ┌─────────────┐          ┌─────────────┐
//!                │ RecordStore │ ◄─────── │  RLE Codec  │
//!                │  (frozen)   │   load   │  (decode)   │
//!                └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod input;
pub mod rle;
pub mod store;
pub mod engine;
pub mod protocol;
pub mod dispatcher;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{GeneError, Result};
pub use config::Config;
pub use store::{Record, RecordStore};
pub use engine::QueryEngine;
pub use dispatcher::{BatchSummary, Dispatcher};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of GeneQuery
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
