//! Response types for the Attendance Engine API.
//!
//! This module defines the success bodies, the error response structure,
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{CalculatedWorkHours, FormattedHours};
use crate::report::MonthlyReport;

/// Response body for `/calculate/day`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCalculationResponse {
    /// The work date of the record.
    pub work_date: NaiveDate,
    /// Day of the week of the work date.
    pub weekday: Weekday,
    /// Name of the public holiday, if the date is one.
    pub holiday_name: Option<String>,
    /// Computed minutes.
    pub hours: CalculatedWorkHours,
    /// `hours` rendered as `H:MM`.
    pub formatted: FormattedHours,
    /// Net worked time in hours, two decimal places.
    pub total_decimal_hours: Decimal,
}

/// Response body for `/reports/monthly`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReportResponse {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Version of the engine that produced the report.
    pub engine_version: String,
    /// Time spent building the report, in microseconds.
    pub duration_us: u64,
    /// The report itself.
    pub report: MonthlyReport,
}

/// Response body for `/holidays/:date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayResponse {
    /// The date asked about.
    pub date: NaiveDate,
    /// Whether the date is a public holiday.
    pub is_holiday: bool,
    /// The holiday's name, if any.
    pub name: Option<String>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid date error response for a path parameter.
    pub fn invalid_date(value: &str) -> Self {
        Self::with_details(
            "INVALID_DATE",
            format!("Invalid date: {}", value),
            "Dates must be written as YYYY-MM-DD",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidTime { field, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIME",
                    format!("Invalid time for '{}': {}", field, value),
                    "Times must be written as HH:MM in 24-hour format",
                ),
            },
            EngineError::InvalidRecord { date, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RECORD",
                    format!("Invalid work record on {}: {}", date, message),
                    "The work record contains incomplete or inconsistent data",
                ),
            },
            EngineError::InvalidMonth { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MONTH",
                    format!("Invalid month '{}'", value),
                    "Months must be written as YYYY-MM",
                ),
            },
        }
    }
}
