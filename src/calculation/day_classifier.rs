//! Per-day classification of worked minutes.
//!
//! Combines net duration and night work for one record, then splits the day
//! at the 8-hour regular-time threshold.

use crate::models::{CalculatedWorkHours, WorkRecord};

use super::night_work::calculate_night_work_minutes;
use super::work_duration::calculate_total_work_minutes;

/// Regular-time threshold per day, in minutes (8 hours).
pub const DAILY_REGULAR_MINUTES: u32 = 8 * 60;

/// Splits a day's net minutes into `(within_8_hours, overtime_minutes)`.
///
/// The two parts always add back up to `total_minutes`.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::split_at_threshold;
///
/// assert_eq!(split_at_threshold(420), (420, 0));
/// assert_eq!(split_at_threshold(480), (480, 0));
/// assert_eq!(split_at_threshold(870), (480, 390));
/// ```
pub fn split_at_threshold(total_minutes: u32) -> (u32, u32) {
    let within = total_minutes.min(DAILY_REGULAR_MINUTES);
    let overtime = total_minutes.saturating_sub(DAILY_REGULAR_MINUTES);
    (within, overtime)
}

/// Computes the four work-hour figures for a single record.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_work_hours;
/// use attendance_engine::models::WorkRecord;
/// use chrono::NaiveDate;
///
/// let record = WorkRecord::new(
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     "08:00",
///     "23:00",
///     Some(("22:00", "22:30")),
/// );
///
/// let hours = calculate_work_hours(&record);
/// assert_eq!(hours.total_work_minutes, 870);
/// assert_eq!(hours.night_work_minutes, 30);
/// assert_eq!(hours.within_8_hours, 480);
/// assert_eq!(hours.overtime_minutes, 390);
/// ```
pub fn calculate_work_hours(record: &WorkRecord) -> CalculatedWorkHours {
    let break_start = record.break_start.as_deref();
    let break_end = record.break_end.as_deref();

    let total_work_minutes =
        calculate_total_work_minutes(&record.clock_in, &record.clock_out, break_start, break_end);
    let night_work_minutes =
        calculate_night_work_minutes(&record.clock_in, &record.clock_out, break_start, break_end);
    let (within_8_hours, overtime_minutes) = split_at_threshold(total_work_minutes);

    CalculatedWorkHours {
        total_work_minutes,
        night_work_minutes,
        within_8_hours,
        overtime_minutes,
    }
}
