//! Calculation logic for the Attendance Engine.
//!
//! This module contains the work-hours computation: wall-clock arithmetic
//! with overnight wraparound, net worked time, night work inside the
//! 22:00-05:00 window, the 8-hour regular-time split, monthly aggregation by
//! weekday and holiday, and display formatting of minute counts.
//!
//! Everything here is pure and infallible over well-formed input.

mod day_classifier;
mod format;
mod monthly_summary;
mod night_work;
mod time_arithmetic;
mod work_duration;

pub use day_classifier::{DAILY_REGULAR_MINUTES, calculate_work_hours, split_at_threshold};
pub use format::{format_hours_minutes, minutes_to_decimal_hours};
pub use monthly_summary::{summarize_days, summarize_month};
pub use night_work::{
    NIGHT_END_MINUTES, NIGHT_START_MINUTES, calculate_night_work_minutes, night_overlap,
};
pub use time_arithmetic::{MINUTES_PER_DAY, duration_minutes, parse_clock_time, time_to_minutes};
pub use work_duration::calculate_total_work_minutes;
