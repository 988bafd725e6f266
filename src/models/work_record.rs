//! Work record model.
//!
//! A [`WorkRecord`] is one day's raw attendance entry as kept by the record
//! store: the date plus wall-clock strings for clock-in, clock-out and an
//! optional break.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::calculation::parse_clock_time;
use crate::error::{EngineError, EngineResult};

/// One day's raw clock-in/clock-out entry.
///
/// Times are kept exactly as supplied so they can be echoed back in reports.
/// `clock_out` earlier than `clock_in` means the shift crossed midnight.
///
/// # Example
///
/// ```
/// use attendance_engine::models::WorkRecord;
/// use chrono::{NaiveDate, Weekday};
///
/// let record = WorkRecord::new(
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     "09:00",
///     "18:00",
///     Some(("12:00", "13:00")),
/// );
/// assert_eq!(record.weekday(), Weekday::Thu);
/// assert!(record.has_break());
/// assert!(record.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// The calendar date the shift started on.
    pub work_date: NaiveDate,
    /// Clock-in time, `HH:MM`.
    pub clock_in: String,
    /// Clock-out time, `HH:MM`.
    pub clock_out: String,
    /// Break start time, `HH:MM`.
    #[serde(default)]
    pub break_start: Option<String>,
    /// Break end time, `HH:MM`.
    #[serde(default)]
    pub break_end: Option<String>,
}

impl WorkRecord {
    /// Creates a record; `break_window` is `(start, end)`.
    pub fn new(
        work_date: NaiveDate,
        clock_in: impl Into<String>,
        clock_out: impl Into<String>,
        break_window: Option<(&str, &str)>,
    ) -> Self {
        let (break_start, break_end) = match break_window {
            Some((start, end)) => (Some(start.to_string()), Some(end.to_string())),
            None => (None, None),
        };

        Self {
            work_date,
            clock_in: clock_in.into(),
            clock_out: clock_out.into(),
            break_start,
            break_end,
        }
    }

    /// Returns the day of the week of the work date.
    pub fn weekday(&self) -> Weekday {
        self.work_date.weekday()
    }

    /// Returns the break as `(start, end)` when both ends are set.
    pub fn break_window(&self) -> Option<(&str, &str)> {
        let start = non_empty(self.break_start.as_deref())?;
        let end = non_empty(self.break_end.as_deref())?;
        Some((start, end))
    }

    /// Returns `true` if the record has a complete break.
    pub fn has_break(&self) -> bool {
        self.break_window().is_some()
    }

    /// Checks the record the way the data-entry form does.
    ///
    /// Clock-in and clock-out must be present and well formed, and the break
    /// must have both ends or neither. Empty strings count as unset.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidRecord`] for a missing clock time or a half break
    /// - [`EngineError::InvalidTime`] for a value that is not `HH:MM`
    pub fn validate(&self) -> EngineResult<()> {
        let clock_in = non_empty(Some(self.clock_in.as_str()))
            .ok_or_else(|| self.invalid("clock_in is required"))?;
        let clock_out = non_empty(Some(self.clock_out.as_str()))
            .ok_or_else(|| self.invalid("clock_out is required"))?;

        parse_clock_time("clock_in", clock_in)?;
        parse_clock_time("clock_out", clock_out)?;

        match (
            non_empty(self.break_start.as_deref()),
            non_empty(self.break_end.as_deref()),
        ) {
            (Some(start), Some(end)) => {
                parse_clock_time("break_start", start)?;
                parse_clock_time("break_end", end)?;
                Ok(())
            }
            (Some(_), None) => Err(self.invalid("break_start is set but break_end is not")),
            (None, Some(_)) => Err(self.invalid("break_end is set but break_start is not")),
            (None, None) => Ok(()),
        }
    }

    fn invalid(&self, message: &str) -> EngineError {
        EngineError::InvalidRecord {
            date: self.work_date,
            message: message.to_string(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
