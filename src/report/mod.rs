//! Report models for the Attendance Engine.
//!
//! A [`MonthlyReport`] gathers the per-day table, the monthly totals and the
//! weekday/holiday table for one individual's month, already formatted for
//! display. Rendering it to a document is left to the consumer.

mod monthly;

pub use monthly::{BucketRow, DailyEntry, MonthlyReport, TotalsRow};
