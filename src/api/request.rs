//! Request types for the Attendance Engine API.
//!
//! This module defines the JSON request structures for the `/calculate/day`
//! and `/reports/monthly` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{PublicHoliday, WorkRecord};

/// One work record as sent by a client.
///
/// Break fields may be omitted, `null`, or `""`; all three mean no break.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkRecordRequest {
    /// The work date.
    pub work_date: NaiveDate,
    /// Clock-in time, `HH:MM`.
    pub clock_in: String,
    /// Clock-out time, `HH:MM`.
    pub clock_out: String,
    /// Break start time, `HH:MM`.
    #[serde(default)]
    pub break_start: Option<String>,
    /// Break end time, `HH:MM`.
    #[serde(default)]
    pub break_end: Option<String>,
}

/// Request body for the `/reports/monthly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReportRequest {
    /// Display name of the individual the records belong to.
    pub individual_name: String,
    /// The reported month, `YYYY-MM`.
    pub month: String,
    /// The individual's records for that month.
    #[serde(default)]
    pub records: Vec<WorkRecordRequest>,
    /// Extra holidays to apply on top of the configured calendar.
    #[serde(default)]
    pub additional_holidays: Vec<PublicHolidayRequest>,
}

/// Public holiday information in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicHolidayRequest {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The holiday's name.
    pub name: String,
}

impl From<WorkRecordRequest> for WorkRecord {
    fn from(req: WorkRecordRequest) -> Self {
        WorkRecord {
            work_date: req.work_date,
            clock_in: req.clock_in,
            clock_out: req.clock_out,
            break_start: req.break_start,
            break_end: req.break_end,
        }
    }
}

impl From<PublicHolidayRequest> for PublicHoliday {
    fn from(req: PublicHolidayRequest) -> Self {
        PublicHoliday {
            date: req.date,
            name: req.name,
        }
    }
}
