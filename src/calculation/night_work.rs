//! Night work detection.
//!
//! Minutes worked between 22:00 and 05:00 are tracked separately for the
//! late-night premium. The night window itself wraps midnight, so an interval
//! is measured against two legs: the early-morning leg `[00:00, 05:00)` of the
//! work date, and the late leg `[22:00, 05:00 next day)` expressed on a
//! timeline that runs past 1440.

use super::time_arithmetic::{MINUTES_PER_DAY, time_to_minutes};
use super::work_duration::break_bounds;

/// Start of the night window (22:00) in minutes since midnight.
pub const NIGHT_START_MINUTES: u32 = 22 * 60;

/// End of the night window (05:00) in minutes since midnight.
pub const NIGHT_END_MINUTES: u32 = 5 * 60;

/// Returns how many minutes of `start..end` fall inside the night window.
///
/// An `end` earlier than `start` is moved onto the next day first, matching
/// [`duration_minutes`](super::duration_minutes).
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::night_overlap;
///
/// assert_eq!(night_overlap(1320, 360), 420); // 22:00 -> 06:00
/// assert_eq!(night_overlap(540, 1020), 0); // 09:00 -> 17:00
/// assert_eq!(night_overlap(180, 420), 120); // 03:00 -> 07:00
/// ```
pub fn night_overlap(start: u32, end: u32) -> u32 {
    let start = i64::from(start);
    let mut end = i64::from(end);
    let day = i64::from(MINUTES_PER_DAY);
    let night_start = i64::from(NIGHT_START_MINUTES);
    let night_end = i64::from(NIGHT_END_MINUTES);

    if end < start {
        end += day;
    }

    let mut minutes = 0;

    if start < night_end {
        minutes += end.min(night_end) - start;
    }

    if end > night_start {
        minutes += end.min(day + night_end) - start.max(night_start);
    }

    u32::try_from(minutes.max(0)).unwrap_or(0)
}

/// Calculates the night minutes of a shift, net of any break.
///
/// The break's own night overlap is subtracted from the shift's as is, and
/// only the final figure is floored at zero. A break lying outside the shift
/// can therefore zero out the night minutes instead of being reported.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_night_work_minutes;
///
/// // 08:00 -> 23:00 with a 22:00-22:30 break: 60 night minutes minus 30
/// assert_eq!(
///     calculate_night_work_minutes("08:00", "23:00", Some("22:00"), Some("22:30")),
///     30
/// );
/// ```
pub fn calculate_night_work_minutes(
    clock_in: &str,
    clock_out: &str,
    break_start: Option<&str>,
    break_end: Option<&str>,
) -> u32 {
    let shift_night = night_overlap(time_to_minutes(clock_in), time_to_minutes(clock_out));

    match break_bounds(break_start, break_end) {
        Some((start, end)) => shift_night.saturating_sub(night_overlap(start, end)),
        None => shift_night,
    }
}
