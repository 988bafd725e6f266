//! Monthly summary models.
//!
//! A month is summarized into eight buckets: one per weekday and one for
//! public holidays. A holiday is counted in the holiday bucket only, never in
//! the bucket of the weekday it falls on. Every bucket is always present so a
//! report has the same shape whether or not anybody worked on a Sunday.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::CalculatedWorkHours;

/// Weekdays in bucket order, Sunday first.
pub const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Identifies a summary bucket.
///
/// Serialized as the lowercase weekday name (`"sunday"` ... `"saturday"`) or
/// `"holiday"`.
///
/// # Example
///
/// ```
/// use attendance_engine::models::BucketKey;
/// use chrono::Weekday;
///
/// assert_eq!(BucketKey::Weekday(Weekday::Tue).to_string(), "tuesday");
/// assert_eq!(BucketKey::Holiday.to_string(), "holiday");
/// assert_eq!(BucketKey::all().count(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BucketKey {
    /// Non-holiday days falling on this weekday.
    Weekday(Weekday),
    /// Public holidays, whatever their weekday.
    Holiday,
}

impl BucketKey {
    /// All bucket keys in report order: Sunday to Saturday, then holiday.
    pub fn all() -> impl Iterator<Item = BucketKey> {
        WEEKDAYS_FROM_SUNDAY
            .into_iter()
            .map(BucketKey::Weekday)
            .chain(std::iter::once(BucketKey::Holiday))
    }

    /// The bucket a day lands in.
    pub fn for_day(weekday: Weekday, is_holiday: bool) -> Self {
        if is_holiday {
            BucketKey::Holiday
        } else {
            BucketKey::Weekday(weekday)
        }
    }

    /// The serialized name of the bucket.
    pub fn label(&self) -> &'static str {
        match self {
            BucketKey::Weekday(Weekday::Sun) => "sunday",
            BucketKey::Weekday(Weekday::Mon) => "monday",
            BucketKey::Weekday(Weekday::Tue) => "tuesday",
            BucketKey::Weekday(Weekday::Wed) => "wednesday",
            BucketKey::Weekday(Weekday::Thu) => "thursday",
            BucketKey::Weekday(Weekday::Fri) => "friday",
            BucketKey::Weekday(Weekday::Sat) => "saturday",
            BucketKey::Holiday => "holiday",
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for BucketKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        BucketKey::all()
            .find(|key| key.label() == value)
            .ok_or_else(|| format!("unknown bucket '{value}'"))
    }
}

impl From<BucketKey> for String {
    fn from(key: BucketKey) -> Self {
        key.label().to_string()
    }
}

/// Work-hour totals for a month, overall and per bucket.
///
/// `totals` includes holiday days, so it always equals the sum of all eight
/// buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Sum over every day of the month.
    pub totals: CalculatedWorkHours,
    /// Non-holiday days by weekday, indexed Sunday = 0 to Saturday = 6.
    pub weekdays: [CalculatedWorkHours; 7],
    /// Public holidays.
    pub holiday: CalculatedWorkHours,
    /// Number of days summed.
    pub day_count: u32,
}

impl MonthlySummary {
    /// Adds one day's figures to its bucket and to the monthly totals.
    pub fn record(&mut self, key: BucketKey, hours: CalculatedWorkHours) {
        *self.bucket_mut(key) += hours;
        self.totals += hours;
        self.day_count += 1;
    }

    /// Returns the figures of one bucket.
    pub fn bucket(&self, key: BucketKey) -> &CalculatedWorkHours {
        match key {
            BucketKey::Weekday(day) => &self.weekdays[day.num_days_from_sunday() as usize],
            BucketKey::Holiday => &self.holiday,
        }
    }

    fn bucket_mut(&mut self, key: BucketKey) -> &mut CalculatedWorkHours {
        match key {
            BucketKey::Weekday(day) => &mut self.weekdays[day.num_days_from_sunday() as usize],
            BucketKey::Holiday => &mut self.holiday,
        }
    }

    /// Iterates over all eight buckets in report order.
    pub fn buckets(&self) -> impl Iterator<Item = (BucketKey, &CalculatedWorkHours)> + '_ {
        BucketKey::all().map(move |key| (key, self.bucket(key)))
    }
}
