//! HTTP API module for the Attendance Engine.
//!
//! This module provides the REST endpoints for single-day calculations,
//! monthly attendance reports and holiday lookups.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{MonthlyReportRequest, PublicHolidayRequest, WorkRecordRequest};
pub use response::{
    ApiError, ApiErrorResponse, DayCalculationResponse, HolidayResponse, MonthlyReportResponse,
};
pub use state::AppState;
