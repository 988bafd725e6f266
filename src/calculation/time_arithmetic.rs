//! Wall-clock arithmetic on minutes since midnight.
//!
//! Work records carry times of day as `HH:MM` strings with no date attached.
//! Every interval is read as starting on the work date; an end that is
//! earlier than its start means the interval crossed midnight exactly once.

use chrono::{NaiveTime, Timelike};

use crate::error::{EngineError, EngineResult};

/// Number of minutes in a calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Converts an `HH:MM` wall-clock string into minutes since midnight.
///
/// Only the first two `:`-separated components are read, so `HH:MM:SS`
/// values coming from the record store work unchanged. The function is
/// total: a missing or non-numeric component counts as zero. Callers that
/// need to reject malformed input should use [`parse_clock_time`] first.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::time_to_minutes;
///
/// assert_eq!(time_to_minutes("00:00"), 0);
/// assert_eq!(time_to_minutes("09:30"), 570);
/// assert_eq!(time_to_minutes("23:59"), 1439);
/// assert_eq!(time_to_minutes("22:00:00"), 1320);
/// ```
pub fn time_to_minutes(time: &str) -> u32 {
    let mut parts = time
        .split(':')
        .map(|part| part.trim().parse::<u32>().unwrap_or(0));
    let hours = parts.next().unwrap_or(0);
    let minutes = parts.next().unwrap_or(0);

    hours.saturating_mul(60).saturating_add(minutes)
}

/// Returns the length in minutes of the interval from `start` to `end`.
///
/// When `end` is earlier than `start` the interval is taken to cross
/// midnight once, so the result is never negative.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::duration_minutes;
///
/// assert_eq!(duration_minutes(540, 1020), 480); // 09:00 -> 17:00
/// assert_eq!(duration_minutes(1320, 360), 480); // 22:00 -> 06:00
/// assert_eq!(duration_minutes(600, 600), 0);
/// ```
pub fn duration_minutes(start: u32, end: u32) -> u32 {
    if end >= start {
        end - start
    } else {
        end.saturating_add(MINUTES_PER_DAY).saturating_sub(start)
    }
}

/// Parses a wall-clock value strictly, returning minutes since midnight.
///
/// Accepts `HH:MM` and `HH:MM:SS` (seconds are dropped). Anything else,
/// including hours past 23 or minutes past 59, is an
/// [`EngineError::InvalidTime`] naming `field`.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::parse_clock_time;
///
/// assert_eq!(parse_clock_time("clock_in", "08:15").unwrap(), 495);
/// assert_eq!(parse_clock_time("clock_in", "08:15:59").unwrap(), 495);
/// assert!(parse_clock_time("clock_in", "24:00").is_err());
/// ```
pub fn parse_clock_time(field: &str, value: &str) -> EngineResult<u32> {
    let trimmed = value.trim();
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| EngineError::InvalidTime {
            field: field.to_string(),
            value: value.to_string(),
        })?;

    Ok(time.hour() * 60 + time.minute())
}
