//! Attendance Engine for Japanese work-hour records
//!
//! This crate turns daily clock-in/clock-out records into worked, night,
//! within-8-hours and overtime minutes, and aggregates them into monthly
//! attendance reports bucketed by weekday and public holiday.
//!
//! # Example
//!
//! ```
//! use attendance_engine::calculation::{calculate_work_hours, format_hours_minutes};
//! use attendance_engine::models::WorkRecord;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
//! let record = WorkRecord::new(date, "09:00", "18:00", Some(("12:00", "13:00")));
//!
//! let hours = calculate_work_hours(&record);
//! assert_eq!(format_hours_minutes(hours.total_work_minutes), "8:00");
//! assert_eq!(hours.overtime_minutes, 0);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
