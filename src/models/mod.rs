//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod holiday;
mod month;
mod summary;
mod work_hours;
mod work_record;

pub use holiday::{HolidayCalendar, HolidayOracle, PublicHoliday};
pub use month::Month;
pub use summary::{BucketKey, MonthlySummary, WEEKDAYS_FROM_SUNDAY};
pub use work_hours::{CalculatedWorkHours, FormattedHours};
pub use work_record::WorkRecord;
