//! Public holiday models.
//!
//! The engine does not decide which days are holidays. It asks a
//! [`HolidayOracle`]; the stock implementation is a [`HolidayCalendar`]
//! loaded from configuration and optionally extended per request.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Month;

/// A named public holiday.
///
/// # Example
///
/// ```
/// use attendance_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 11, 3).unwrap(),
///     name: "Culture Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The holiday's name.
    pub name: String,
}

/// Answers whether a date is a public holiday.
///
/// Lookups cannot fail: a date with no match is simply a regular day.
pub trait HolidayOracle {
    /// Returns the holiday's name if `date` is a public holiday.
    fn holiday_name(&self, date: NaiveDate) -> Option<&str>;

    /// Returns `true` if `date` is a public holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_name(date).is_some()
    }
}

/// A set of public holidays keyed by date.
///
/// When two entries share a date the first one wins.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{HolidayCalendar, HolidayOracle, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new(vec![PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     name: "New Year's Day".to_string(),
/// }]);
///
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
/// assert_eq!(
///     calendar.holiday_name(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()),
///     Some("New Year's Day")
/// );
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: BTreeMap<NaiveDate, String>,
}

impl HolidayCalendar {
    /// Builds a calendar from a list of holidays.
    pub fn new(holidays: impl IntoIterator<Item = PublicHoliday>) -> Self {
        let mut calendar = Self::default();
        calendar.extend(holidays);
        calendar
    }

    /// Adds holidays, keeping existing names for dates already present.
    pub fn extend(&mut self, holidays: impl IntoIterator<Item = PublicHoliday>) {
        for holiday in holidays {
            self.holidays.entry(holiday.date).or_insert(holiday.name);
        }
    }

    /// Returns the holidays falling within `month`, in date order.
    pub fn holidays_in(&self, month: &Month) -> Vec<PublicHoliday> {
        self.holidays
            .range(month.start_date()..month.next_month_start())
            .map(|(date, name)| PublicHoliday {
                date: *date,
                name: name.clone(),
            })
            .collect()
    }

    /// Number of holidays in the calendar.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns `true` if the calendar has no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl HolidayOracle for HolidayCalendar {
    fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.holidays.get(&date).map(String::as_str)
    }
}

impl<T: HolidayOracle + ?Sized> HolidayOracle for &T {
    fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        (**self).holiday_name(date)
    }
}
