//! Monthly attendance report.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{calculate_work_hours, minutes_to_decimal_hours, summarize_days};
use crate::models::{
    BucketKey, CalculatedWorkHours, FormattedHours, HolidayOracle, Month, MonthlySummary,
    PublicHoliday, WorkRecord,
};

/// One row of the daily table.
///
/// The four time fields are the record's values, untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// The work date.
    pub work_date: NaiveDate,
    /// Day of the week of the work date.
    pub weekday: Weekday,
    /// Name of the public holiday, if the date is one.
    pub holiday_name: Option<String>,
    /// Clock-in time as recorded.
    pub clock_in: String,
    /// Clock-out time as recorded.
    pub clock_out: String,
    /// Break start as recorded.
    pub break_start: Option<String>,
    /// Break end as recorded.
    pub break_end: Option<String>,
    /// Computed minutes for the day.
    pub hours: CalculatedWorkHours,
    /// `hours` rendered as `H:MM`.
    pub formatted: FormattedHours,
}

impl DailyEntry {
    fn new(record: &WorkRecord, holiday_name: Option<&str>) -> Self {
        let hours = calculate_work_hours(record);
        Self {
            work_date: record.work_date,
            weekday: record.weekday(),
            holiday_name: holiday_name.map(str::to_string),
            clock_in: record.clock_in.clone(),
            clock_out: record.clock_out.clone(),
            break_start: record.break_start.clone(),
            break_end: record.break_end.clone(),
            formatted: hours.formatted(),
            hours,
        }
    }

    /// Returns `true` if the work date is a public holiday.
    pub fn is_holiday(&self) -> bool {
        self.holiday_name.is_some()
    }

    /// The break as `start-end`, or `-` when there is none.
    pub fn break_label(&self) -> String {
        match (self.break_start.as_deref(), self.break_end.as_deref()) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
                format!("{start}-{end}")
            }
            _ => "-".to_string(),
        }
    }
}

/// The monthly totals row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsRow {
    /// Summed minutes.
    pub hours: CalculatedWorkHours,
    /// `hours` rendered as `H:MM`.
    pub formatted: FormattedHours,
    /// Total worked time in hours, two decimal places.
    pub total_decimal_hours: Decimal,
}

/// One row of the weekday/holiday table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketRow {
    /// Which bucket this row is.
    pub bucket: BucketKey,
    /// Summed minutes.
    pub hours: CalculatedWorkHours,
    /// `hours` rendered as `H:MM`.
    pub formatted: FormattedHours,
}

/// Everything an export renderer needs for one individual's month.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{HolidayCalendar, Month, WorkRecord};
/// use attendance_engine::report::MonthlyReport;
/// use chrono::NaiveDate;
///
/// let month: Month = "2026-01".parse().unwrap();
/// let records = vec![WorkRecord::new(
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     "22:00",
///     "06:00",
///     None,
/// )];
///
/// let report = MonthlyReport::build("Sato", month, &records, &HolidayCalendar::default());
/// assert_eq!(report.days.len(), 1);
/// assert_eq!(report.days[0].formatted.night_work, "7:00");
/// assert_eq!(report.totals_row.formatted.total_work, "8:00");
/// assert_eq!(report.bucket_rows.len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Display name of the individual.
    pub individual_name: String,
    /// The reported month.
    pub month: Month,
    /// Public holidays within the month.
    pub holidays: Vec<PublicHoliday>,
    /// One entry per record, in date order.
    pub days: Vec<DailyEntry>,
    /// Raw monthly totals and buckets.
    pub summary: MonthlySummary,
    /// Totals table.
    pub totals_row: TotalsRow,
    /// Weekday table, Sunday to Saturday, then the holiday row.
    pub bucket_rows: Vec<BucketRow>,
}

impl MonthlyReport {
    /// Builds the report for `records`, ordering them by work date.
    ///
    /// `records` are expected to be the individual's records for `month`;
    /// no filtering happens here.
    pub fn build<H>(
        individual_name: impl Into<String>,
        month: Month,
        records: &[WorkRecord],
        holidays: &H,
    ) -> Self
    where
        H: HolidayOracle + ?Sized,
    {
        let mut ordered: Vec<&WorkRecord> = records.iter().collect();
        ordered.sort_by_key(|record| record.work_date);

        let days: Vec<DailyEntry> = ordered
            .iter()
            .map(|record| DailyEntry::new(record, holidays.holiday_name(record.work_date)))
            .collect();

        let summary = summarize_days(
            ordered
                .iter()
                .zip(&days)
                .map(|(record, day)| (*record, day.is_holiday())),
        );

        let month_holidays = month
            .days()
            .filter_map(|date| {
                holidays.holiday_name(date).map(|name| PublicHoliday {
                    date,
                    name: name.to_string(),
                })
            })
            .collect();

        let totals_row = TotalsRow {
            hours: summary.totals,
            formatted: summary.totals.formatted(),
            total_decimal_hours: minutes_to_decimal_hours(summary.totals.total_work_minutes),
        };

        let bucket_rows = summary
            .buckets()
            .map(|(bucket, hours)| BucketRow {
                bucket,
                hours: *hours,
                formatted: hours.formatted(),
            })
            .collect();

        Self {
            individual_name: individual_name.into(),
            month,
            holidays: month_holidays,
            days,
            summary,
            totals_row,
            bucket_rows,
        }
    }
}
