//! Monthly aggregation into weekday and holiday buckets.

use crate::models::{BucketKey, HolidayOracle, MonthlySummary, WorkRecord};

use super::day_classifier::calculate_work_hours;

/// Summarizes days whose holiday status is already known.
///
/// Each `(record, is_holiday)` pair is classified and added to the holiday
/// bucket when `is_holiday` is set, otherwise to the bucket of its weekday.
/// Every day also counts towards the monthly totals.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::summarize_days;
/// use attendance_engine::models::{BucketKey, WorkRecord};
/// use chrono::{NaiveDate, Weekday};
///
/// // 2026-01-13 and 2026-01-20 are Tuesdays
/// let first = WorkRecord::new(NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(), "09:00", "17:00", None);
/// let second = WorkRecord::new(NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(), "09:00", "19:00", None);
///
/// let summary = summarize_days([(&first, false), (&second, false)]);
/// let tuesday = summary.bucket(BucketKey::Weekday(Weekday::Tue));
/// assert_eq!(tuesday.total_work_minutes, 1080);
/// assert_eq!(tuesday.overtime_minutes, 120);
/// assert!(summary.bucket(BucketKey::Holiday).is_zero());
/// ```
pub fn summarize_days<'a, I>(days: I) -> MonthlySummary
where
    I: IntoIterator<Item = (&'a WorkRecord, bool)>,
{
    let mut summary = MonthlySummary::default();

    for (record, is_holiday) in days {
        let hours = calculate_work_hours(record);
        summary.record(BucketKey::for_day(record.weekday(), is_holiday), hours);
    }

    summary
}

/// Summarizes a month of records, asking `holidays` about each work date.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::summarize_month;
/// use attendance_engine::models::{BucketKey, HolidayCalendar, PublicHoliday, WorkRecord};
/// use chrono::{NaiveDate, Weekday};
///
/// let calendar = HolidayCalendar::new(vec![PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     name: "Coming of Age Day".to_string(),
/// }]);
///
/// // A Monday that is a holiday
/// let records = vec![WorkRecord::new(
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     "10:00",
///     "15:00",
///     None,
/// )];
///
/// let summary = summarize_month(&records, &calendar);
/// assert_eq!(summary.bucket(BucketKey::Holiday).total_work_minutes, 300);
/// assert!(summary.bucket(BucketKey::Weekday(Weekday::Mon)).is_zero());
/// assert_eq!(summary.totals.total_work_minutes, 300);
/// ```
pub fn summarize_month<H>(records: &[WorkRecord], holidays: &H) -> MonthlySummary
where
    H: HolidayOracle + ?Sized,
{
    summarize_days(
        records
            .iter()
            .map(|record| (record, holidays.is_holiday(record.work_date))),
    )
}
