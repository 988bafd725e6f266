//! Display helpers for minute counts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Renders a minute count as `H:MM`.
///
/// Hours are not padded and may exceed 24; minutes are always two digits.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::format_hours_minutes;
///
/// assert_eq!(format_hours_minutes(75), "1:15");
/// assert_eq!(format_hours_minutes(480), "8:00");
/// assert_eq!(format_hours_minutes(9_605), "160:05");
/// ```
pub fn format_hours_minutes(minutes: u32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// Converts minutes to hours as a decimal rounded to two places.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::minutes_to_decimal_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(minutes_to_decimal_hours(90), Decimal::new(150, 2));
/// assert_eq!(minutes_to_decimal_hours(20), Decimal::new(33, 2));
/// ```
pub fn minutes_to_decimal_hours(minutes: u32) -> Decimal {
    (Decimal::from(minutes) / Decimal::from(60))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
