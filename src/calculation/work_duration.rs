//! Net worked time for a single day.

use super::time_arithmetic::{duration_minutes, time_to_minutes};

/// Resolves an optional break into its bounds in minutes since midnight.
///
/// A break counts only when both ends are present and non-empty; an empty
/// string is how an untouched form field arrives.
pub(super) fn break_bounds(break_start: Option<&str>, break_end: Option<&str>) -> Option<(u32, u32)> {
    let start = break_start.filter(|s| !s.trim().is_empty())?;
    let end = break_end.filter(|s| !s.trim().is_empty())?;
    Some((time_to_minutes(start), time_to_minutes(end)))
}

/// Calculates net worked minutes from clock-in/clock-out and an optional break.
///
/// The gross duration wraps past midnight when `clock_out` is earlier than
/// `clock_in`. The break is subtracted only when both of its ends are set,
/// and the result is clamped at zero when the break is longer than the shift.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_total_work_minutes;
///
/// // 09:00 -> 18:00 with a one hour lunch
/// assert_eq!(
///     calculate_total_work_minutes("09:00", "18:00", Some("12:00"), Some("13:00")),
///     480
/// );
///
/// // Overnight without a break
/// assert_eq!(calculate_total_work_minutes("22:00", "06:00", None, None), 480);
/// ```
pub fn calculate_total_work_minutes(
    clock_in: &str,
    clock_out: &str,
    break_start: Option<&str>,
    break_end: Option<&str>,
) -> u32 {
    let gross = duration_minutes(time_to_minutes(clock_in), time_to_minutes(clock_out));

    match break_bounds(break_start, break_end) {
        Some((start, end)) => gross.saturating_sub(duration_minutes(start, end)),
        None => gross,
    }
}
