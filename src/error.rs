//! Error types for GeneQuery
//!
//! Only file and stream boundaries fail. Missing proteins, malformed rows and
//! unknown operations are ordinary outcomes and never show up here.

use thiserror::Error;

/// Result type alias using GeneError
pub type Result<T> = std::result::Result<T, GeneError>;

/// Unified error type for GeneQuery operations
#[derive(Debug, Error)]
pub enum GeneError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Sequence table error: {0}")]
    Table(String),

    #[error("Command script error: {0}")]
    Script(String),

    // -------------------------------------------------------------------------
    // Output Errors
    // -------------------------------------------------------------------------
    #[error("Report error: {context}")]
    Report {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
