//! Error types for the workday calendar.
//!
//! The classification core never fails: unknown regions, missing weekday
//! flags and unrecognized absence labels all degrade to a safe default.
//! Errors only surface at the edges of the crate, when the holiday dataset
//! is loaded, when user-entered times are parsed, and when API requests are
//! validated.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for the workday calendar.
///
/// # Example
///
/// ```
/// use workday_calendar::error::CalendarError;
///
/// let error = CalendarError::DatasetNotFound {
///     path: "/missing/calendar.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Holiday dataset not found: /missing/calendar.yaml");
/// ```
#[derive(Debug, Error)]
pub enum CalendarError {
    /// A dataset file or directory was not found at the specified path.
    #[error("Holiday dataset not found: {path}")]
    DatasetNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A dataset file could not be parsed.
    #[error("Failed to parse holiday dataset '{path}': {message}")]
    DatasetParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A requested date range ends before it starts.
    #[error("Invalid date range: {to} is before {from}")]
    InvalidDateRange {
        /// The start of the range.
        from: NaiveDateTime,
        /// The end of the range.
        to: NaiveDateTime,
    },

    /// A requested date range covers more days than a single request may.
    #[error("Date range too large: {days} days requested, at most {max} allowed")]
    RangeTooLarge {
        /// The number of days the range covers.
        days: u64,
        /// The largest accepted number of days.
        max: u64,
    },

    /// A time string was not in `HH:MM` form.
    #[error("Invalid time '{value}': {message}")]
    InvalidTime {
        /// The rejected input.
        value: String,
        /// A description of what made the input invalid.
        message: String,
    },
}

/// A type alias for Results that return CalendarError.
pub type CalendarResult<T> = Result<T, CalendarError>;
