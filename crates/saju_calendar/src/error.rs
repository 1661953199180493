//! Error types for calendar and solar-term tables.

use chrono::NaiveDate;
use saju_base::BaseError;
use thiserror::Error;

/// Errors from table loading and date resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Date is outside the ephemeris table's coverage.
    #[error("date {0} is not covered by the calendar table")]
    NotFound(NaiveDate),
    /// A table row or timestamp could not be parsed.
    #[error("calendar parse error: {0}")]
    Parse(String),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),
    /// A ganji cell was not a valid stem-branch pair.
    #[error(transparent)]
    Base(#[from] BaseError),
}

impl From<std::io::Error> for CalendarError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<csv::Error> for CalendarError {
    fn from(e: csv::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<serde_json::Error> for CalendarError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
