//! Error types for civil-time conversion.

use thiserror::Error;

/// Errors from civil date/time validation and UT conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The (year, month, day) triple is not a real Gregorian calendar day.
    #[error("invalid date {year:04}-{month:02}-{day:02}: {reason}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        reason: &'static str,
    },
    /// Hour, minute or second out of range.
    #[error("invalid time: {0}")]
    InvalidTime(&'static str),
    /// UTC offset outside [-14, +14] hours or not finite.
    #[error("invalid UTC offset {0} h: must lie in [-14, +14]")]
    InvalidOffset(f64),
}
