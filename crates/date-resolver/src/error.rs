//! Error types for date-resolver operations.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A historical lookup pointed past the reference date.
    ///
    /// `date` is `None` when the query was rejected lexically, before any
    /// date was resolved.
    #[error("Attendance is not available for future dates.")]
    FutureDate { date: Option<NaiveDate> },
}

pub type Result<T> = std::result::Result<T, ResolverError>;
