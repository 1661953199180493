//! Error types for sexagenary base calculations.

use thiserror::Error;

/// Errors from symbol parsing and classification-table loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaseError {
    /// Text is not a recognised stem, branch, ganji or category.
    #[error("invalid symbol: {0}")]
    InvalidSymbol(String),
    /// A classification table is malformed.
    #[error("invalid table: {0}")]
    InvalidTable(String),
    /// I/O error while reading a table file.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for BaseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for BaseError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidTable(e.to_string())
    }
}
