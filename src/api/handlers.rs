//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::borrow::Cow;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_work_hours, minutes_to_decimal_hours};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayCalendar, HolidayOracle, Month, WorkRecord};
use crate::report::MonthlyReport;

use super::request::{MonthlyReportRequest, WorkRecordRequest};
use super::response::{
    ApiError, ApiErrorResponse, DayCalculationResponse, HolidayResponse, MonthlyReportResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate/day", post(calculate_day_handler))
        .route("/reports/monthly", post(monthly_report_handler))
        .route("/holidays/:date", get(holiday_handler))
        .with_state(state)
}

/// Handler for POST /calculate/day.
///
/// Validates a single work record and returns its computed hours.
async fn calculate_day_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkRecordRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing day calculation request");

    let record: WorkRecord = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match calculate_day(&record, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                work_date = %result.work_date,
                total_work_minutes = result.hours.total_work_minutes,
                night_work_minutes = result.hours.night_work_minutes,
                overtime_minutes = result.hours.overtime_minutes,
                "Day calculation completed"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Day calculation rejected"
            );
            error_response(err)
        }
    }
}

/// Handler for POST /reports/monthly.
///
/// Builds the monthly attendance report for one individual.
async fn monthly_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthlyReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match build_monthly_report(request, state.config(), start_time) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                report_id = %response.report_id,
                month = %response.report.month,
                days = response.report.days.len(),
                total_work_minutes = response.report.summary.totals.total_work_minutes,
                duration_us = response.duration_us,
                "Monthly report completed"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Monthly report rejected"
            );
            error_response(err)
        }
    }
}

/// Handler for GET /holidays/:date.
async fn holiday_handler(State(state): State<AppState>, Path(date): Path<String>) -> Response {
    let Ok(date) = NaiveDate::parse_from_str(&date, "%Y-%m-%d") else {
        warn!(value = %date, "Invalid holiday lookup date");
        return json_response(StatusCode::BAD_REQUEST, ApiError::invalid_date(&date));
    };

    let name = state.config().holiday_name(date).map(str::to_string);
    json_response(
        StatusCode::OK,
        HolidayResponse {
            date,
            is_holiday: name.is_some(),
            name,
        },
    )
}

fn calculate_day(
    record: &WorkRecord,
    config: &ConfigLoader,
) -> EngineResult<DayCalculationResponse> {
    record.validate()?;

    let hours = calculate_work_hours(record);
    Ok(DayCalculationResponse {
        work_date: record.work_date,
        weekday: record.weekday(),
        holiday_name: config.holiday_name(record.work_date).map(str::to_string),
        hours,
        formatted: hours.formatted(),
        total_decimal_hours: minutes_to_decimal_hours(hours.total_work_minutes),
    })
}

fn build_monthly_report(
    request: MonthlyReportRequest,
    config: &ConfigLoader,
    start_time: Instant,
) -> EngineResult<MonthlyReportResponse> {
    let month: Month = request.month.parse()?;

    let records: Vec<WorkRecord> = request.records.into_iter().map(Into::into).collect();
    for record in &records {
        record.validate()?;
        if !month.contains_date(record.work_date) {
            return Err(EngineError::InvalidRecord {
                date: record.work_date,
                message: format!("work date is outside {}", month),
            });
        }
    }

    let calendar: Cow<'_, HolidayCalendar> = if request.additional_holidays.is_empty() {
        Cow::Borrowed(config.calendar())
    } else {
        let mut calendar = config.calendar().clone();
        calendar.extend(request.additional_holidays.into_iter().map(Into::into));
        Cow::Owned(calendar)
    };

    let report = MonthlyReport::build(request.individual_name, month, &records, &*calendar);

    Ok(MonthlyReportResponse {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        duration_us: start_time.elapsed().as_micros() as u64,
        report,
    })
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: EngineError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, including the field name
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}
