//! Error types for the Attendance Engine.
//!
//! The work-hours computation itself is total and never fails. Errors only
//! arise at the edges: loading configuration, and validating records and
//! month keys before they reach the calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::InvalidTime {
///     field: "clock_in".to_string(),
///     value: "25:00".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time for 'clock_in': 25:00");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A time-of-day field is not a valid `HH:MM` wall-clock value.
    #[error("Invalid time for '{field}': {value}")]
    InvalidTime {
        /// The record field holding the bad value.
        field: String,
        /// The value as it was supplied.
        value: String,
    },

    /// A work record is incomplete or inconsistent.
    #[error("Invalid work record on {date}: {message}")]
    InvalidRecord {
        /// The work date of the offending record.
        date: NaiveDate,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A month key is not in `YYYY-MM` form.
    #[error("Invalid month '{value}': expected YYYY-MM")]
    InvalidMonth {
        /// The month key as it was supplied.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
