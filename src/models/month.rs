//! Calendar month model.
//!
//! A [`Month`] is the reporting window for an attendance book: every record
//! with `start_date() <= work_date < next_month_start()`.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar month, written `YYYY-MM`.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Month;
/// use chrono::NaiveDate;
///
/// let month: Month = "2026-12".parse().unwrap();
/// assert_eq!(month.start_date(), NaiveDate::from_ymd_opt(2026, 12, 1).unwrap());
/// assert_eq!(month.next_month_start(), NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
/// assert_eq!(month.to_string(), "2026-12");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    start: NaiveDate,
    next_start: NaiveDate,
}

impl Month {
    /// Creates a month from its year and 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMonth`] when `month` is outside 1-12 or
    /// the date is out of chrono's range.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidMonth {
            value: format!("{year:04}-{month:02}"),
        };

        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_start = start
            .checked_add_months(Months::new(1))
            .ok_or_else(invalid)?;

        Ok(Self { start, next_start })
    }

    /// Returns the month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let next_start = start
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX);
        Self { start, next_start }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.start.year()
    }

    /// The month number, 1-12.
    pub fn month(&self) -> u32 {
        self.start.month()
    }

    /// The first day of the month.
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// The first day of the following month (exclusive end of the range).
    pub fn next_month_start(&self) -> NaiveDate {
        self.next_start
    }

    /// Returns `true` if `date` falls within this month.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.next_start
    }

    /// Iterates over every day of the month.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(|d| *d < self.next_start)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for Month {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidMonth {
            value: s.to_string(),
        };

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Month::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for Month {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.to_string()
    }
}
