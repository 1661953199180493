//! Error types for chart and projection queries.

use saju_base::BaseError;
use saju_calendar::CalendarError;
use saju_config::ConfigError;
use thiserror::Error;

/// Errors from engine construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Malformed or partial birth input; rejected before any lookup.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Calendar lookup or table load failed (includes `NotFound`).
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    /// Classification table load failed.
    #[error(transparent)]
    Base(#[from] BaseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SearchError {
    /// Whether this is a date outside the calendar table's coverage.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Calendar(CalendarError::NotFound(_)))
    }
}
