//! Integration tests for the Attendance Engine HTTP API.
//!
//! This test suite covers:
//! - Single-day calculations (regular, overnight, night overlap, overtime)
//! - Break handling (absent, empty, longer than the shift)
//! - Monthly reports (totals, weekday and holiday buckets, ordering)
//! - Holiday lookups
//! - Error cases

use std::str::FromStr;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/jp").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn post_day(body: Value) -> (StatusCode, Value) {
    post_json(create_router_for_test(), "/calculate/day", body).await
}

async fn post_report(body: Value) -> (StatusCode, Value) {
    post_json(create_router_for_test(), "/reports/monthly", body).await
}

async fn get_holiday(date: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(format!("/holidays/{}", date))
        .body(Body::empty())
        .unwrap();
    send(create_router_for_test(), request).await
}

fn create_record(date: &str, clock_in: &str, clock_out: &str, brk: Option<(&str, &str)>) -> Value {
    match brk {
        Some((start, end)) => json!({
            "work_date": date,
            "clock_in": clock_in,
            "clock_out": clock_out,
            "break_start": start,
            "break_end": end
        }),
        None => json!({
            "work_date": date,
            "clock_in": clock_in,
            "clock_out": clock_out
        }),
    }
}

fn assert_minutes(hours: &Value, total: u64, night: u64, within: u64, overtime: u64) {
    assert_eq!(hours["total_work_minutes"], total, "total_work_minutes");
    assert_eq!(hours["night_work_minutes"], night, "night_work_minutes");
    assert_eq!(hours["within_8_hours"], within, "within_8_hours");
    assert_eq!(hours["overtime_minutes"], overtime, "overtime_minutes");
}

fn assert_formatted(formatted: &Value, total: &str, night: &str, within: &str, overtime: &str) {
    assert_eq!(formatted["total_work"], total);
    assert_eq!(formatted["night_work"], night);
    assert_eq!(formatted["within_8_hours"], within);
    assert_eq!(formatted["overtime"], overtime);
}

fn january_records() -> Value {
    json!([
        create_record("2026-01-18", "09:00", "13:00", None),
        create_record("2026-01-15", "22:00", "06:00", None),
        create_record("2026-01-01", "09:00", "18:00", Some(("12:00", "13:00"))),
        create_record("2026-01-17", "08:00", "23:00", Some(("22:00", "22:30"))),
    ])
}

// =============================================================================
// SECTION 1: Single Day Calculations
// =============================================================================

#[tokio::test]
async fn test_day_regular_shift_with_lunch_break() {
    let (status, result) = post_day(create_record(
        "2026-01-15",
        "09:00",
        "18:00",
        Some(("12:00", "13:00")),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_minutes(&result["hours"], 480, 0, 480, 0);
    assert_formatted(&result["formatted"], "8:00", "0:00", "8:00", "0:00");
    assert_eq!(
        normalize_decimal(result["total_decimal_hours"].as_str().unwrap()),
        "8"
    );
    assert!(result["holiday_name"].is_null());
}

#[tokio::test]
async fn test_day_overnight_shift_without_break() {
    let (status, result) = post_day(create_record("2026-01-15", "22:00", "06:00", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_minutes(&result["hours"], 480, 420, 480, 0);
    assert_formatted(&result["formatted"], "8:00", "7:00", "8:00", "0:00");
}

#[tokio::test]
async fn test_day_break_inside_night_window() {
    let (status, result) = post_day(create_record(
        "2026-01-15",
        "08:00",
        "23:00",
        Some(("22:00", "22:30")),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_minutes(&result["hours"], 870, 30, 480, 390);
    assert_formatted(&result["formatted"], "14:30", "0:30", "8:00", "6:30");
    assert_eq!(
        normalize_decimal(result["total_decimal_hours"].as_str().unwrap()),
        "14.5"
    );
}

#[tokio::test]
async fn test_day_early_morning_shift_counts_night_before_five() {
    let (status, result) = post_day(create_record("2026-01-15", "03:00", "09:00", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_minutes(&result["hours"], 360, 120, 360, 0);
}

#[tokio::test]
async fn test_day_identical_clock_times_yield_zero() {
    let (status, result) = post_day(create_record("2026-01-15", "23:00", "23:00", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_minutes(&result["hours"], 0, 0, 0, 0);
    assert_formatted(&result["formatted"], "0:00", "0:00", "0:00", "0:00");
}

#[tokio::test]
async fn test_day_break_longer_than_shift_clamps_to_zero() {
    let (status, result) = post_day(create_record(
        "2026-01-15",
        "09:00",
        "10:00",
        Some(("08:00", "12:00")),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_minutes(&result["hours"], 0, 0, 0, 0);
}

#[tokio::test]
async fn test_day_empty_break_strings_mean_no_break() {
    let (status, result) = post_day(create_record(
        "2026-01-15",
        "09:00",
        "18:00",
        Some(("", "")),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_minutes(&result["hours"], 540, 0, 480, 60);
    assert_formatted(&result["formatted"], "9:00", "0:00", "8:00", "1:00");
}

#[tokio::test]
async fn test_day_accepts_seconds_in_stored_times() {
    let (status, result) = post_day(create_record(
        "2026-01-15",
        "09:00:00",
        "18:00:00",
        Some(("12:00:00", "13:00:00")),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_minutes(&result["hours"], 480, 0, 480, 0);
}

#[tokio::test]
async fn test_day_on_public_holiday_reports_name() {
    let (status, result) = post_day(create_record("2026-01-01", "09:00", "12:00", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["holiday_name"], "New Year's Day");
    assert_eq!(result["work_date"], "2026-01-01");
}

// =============================================================================
// SECTION 2: Single Day Error Cases
// =============================================================================

#[tokio::test]
async fn test_day_invalid_clock_time_rejected() {
    let (status, result) = post_day(create_record("2026-01-15", "25:00", "18:00", None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_TIME");
    assert!(result["message"].as_str().unwrap().contains("clock_in"));
}

#[tokio::test]
async fn test_day_non_numeric_time_rejected() {
    let (status, result) = post_day(create_record("2026-01-15", "09:00", "6pm", None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_TIME");
}

#[tokio::test]
async fn test_day_half_break_rejected() {
    let body = json!({
        "work_date": "2026-01-15",
        "clock_in": "09:00",
        "clock_out": "18:00",
        "break_start": "12:00"
    });
    let (status, result) = post_day(body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_RECORD");
    assert!(result["message"].as_str().unwrap().contains("break_end"));
}

#[tokio::test]
async fn test_day_empty_clock_in_rejected() {
    let (status, result) = post_day(create_record("2026-01-15", "", "18:00", None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_RECORD");
    assert!(result["message"].as_str().unwrap().contains("clock_in is required"));
}

#[tokio::test]
async fn test_day_missing_field_is_validation_error() {
    let body = json!({
        "work_date": "2026-01-15",
        "clock_in": "09:00"
    });
    let (status, result) = post_day(body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
    assert!(result["message"].as_str().unwrap().contains("clock_out"));
}

#[tokio::test]
async fn test_day_malformed_json_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/calculate/day")
        .header("Content-Type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, result) = send(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_day_missing_content_type_rejected() {
    let body = create_record("2026-01-15", "09:00", "18:00", None);
    let request = Request::builder()
        .method("POST")
        .uri("/calculate/day")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, result) = send(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MISSING_CONTENT_TYPE");
}

// =============================================================================
// SECTION 3: Monthly Reports
// =============================================================================

#[tokio::test]
async fn test_monthly_report_envelope() {
    let (status, result) = post_report(json!({
        "individual_name": "Sato Hanako",
        "month": "2026-01",
        "records": january_records()
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(uuid::Uuid::parse_str(result["report_id"].as_str().unwrap()).is_ok());
    assert_eq!(result["engine_version"], env!("CARGO_PKG_VERSION"));
    assert!(result["generated_at"].is_string());
    assert_eq!(result["report"]["individual_name"], "Sato Hanako");
    assert_eq!(result["report"]["month"], "2026-01");
}

#[tokio::test]
async fn test_monthly_report_totals() {
    let (status, result) = post_report(json!({
        "individual_name": "Sato Hanako",
        "month": "2026-01",
        "records": january_records()
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    let report = &result["report"];
    assert_eq!(report["summary"]["day_count"], 4);
    assert_minutes(&report["totals_row"]["hours"], 2070, 450, 1680, 390);
    assert_formatted(&report["totals_row"]["formatted"], "34:30", "7:30", "28:00", "6:30");
    assert_eq!(
        normalize_decimal(report["totals_row"]["total_decimal_hours"].as_str().unwrap()),
        "34.5"
    );
}

#[tokio::test]
async fn test_monthly_report_days_sorted_by_date() {
    let (_, result) = post_report(json!({
        "individual_name": "Sato Hanako",
        "month": "2026-01",
        "records": january_records()
    }))
    .await;

    let days = result["report"]["days"].as_array().unwrap();
    let dates: Vec<&str> = days
        .iter()
        .map(|day| day["work_date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2026-01-01", "2026-01-15", "2026-01-17", "2026-01-18"]);
    assert_eq!(days[0]["holiday_name"], "New Year's Day");
    assert_eq!(days[0]["clock_in"], "09:00");
    assert!(days[1]["holiday_name"].is_null());
}

#[tokio::test]
async fn test_monthly_report_weekday_and_holiday_buckets() {
    let (_, result) = post_report(json!({
        "individual_name": "Sato Hanako",
        "month": "2026-01",
        "records": january_records()
    }))
    .await;

    let rows = result["report"]["bucket_rows"].as_array().unwrap();
    let labels: Vec<&str> = rows.iter().map(|row| row["bucket"].as_str().unwrap()).collect();
    assert_eq!(
        labels,
        vec![
            "sunday",
            "monday",
            "tuesday",
            "wednesday",
            "thursday",
            "friday",
            "saturday",
            "holiday"
        ]
    );

    assert_minutes(&rows[0]["hours"], 240, 0, 240, 0);
    assert_minutes(&rows[1]["hours"], 0, 0, 0, 0);
    // New Year's Day is a Thursday but lands only in the holiday bucket
    assert_minutes(&rows[4]["hours"], 480, 420, 480, 0);
    assert_minutes(&rows[6]["hours"], 870, 30, 480, 390);
    assert_minutes(&rows[7]["hours"], 480, 0, 480, 0);
    assert_eq!(rows[6]["formatted"]["overtime"], "6:30");
}

#[tokio::test]
async fn test_monthly_report_lists_month_holidays() {
    let (_, result) = post_report(json!({
        "individual_name": "Sato Hanako",
        "month": "2026-01",
        "records": []
    }))
    .await;

    let holidays = result["report"]["holidays"].as_array().unwrap();
    assert_eq!(holidays.len(), 2);
    assert_eq!(holidays[0]["date"], "2026-01-01");
    assert_eq!(holidays[1]["name"], "Coming of Age Day");
}

#[tokio::test]
async fn test_monthly_report_empty_month_is_all_zero() {
    let (status, result) = post_report(json!({
        "individual_name": "Sato Hanako",
        "month": "2026-02",
        "records": []
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    let report = &result["report"];
    assert_eq!(report["summary"]["day_count"], 0);
    assert_minutes(&report["totals_row"]["hours"], 0, 0, 0, 0);
    assert_eq!(report["bucket_rows"].as_array().unwrap().len(), 8);
    assert!(report["days"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_monthly_report_additional_holiday_moves_bucket() {
    let (status, result) = post_report(json!({
        "individual_name": "Sato Hanako",
        "month": "2026-01",
        "records": january_records(),
        "additional_holidays": [
            { "date": "2026-01-15", "name": "Company Anniversary" }
        ]
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    let report = &result["report"];
    let rows = report["bucket_rows"].as_array().unwrap();
    assert_minutes(&rows[4]["hours"], 0, 0, 0, 0);
    assert_minutes(&rows[7]["hours"], 960, 420, 960, 0);
    assert_eq!(report["holidays"].as_array().unwrap().len(), 3);
    assert_eq!(report["days"][1]["holiday_name"], "Company Anniversary");
}

#[tokio::test]
async fn test_monthly_report_additional_holiday_does_not_leak() {
    let _ = post_report(json!({
        "individual_name": "Sato Hanako",
        "month": "2026-01",
        "records": [],
        "additional_holidays": [
            { "date": "2026-01-15", "name": "Company Anniversary" }
        ]
    }))
    .await;

    let (_, result) = get_holiday("2026-01-15").await;
    assert_eq!(result["is_holiday"], false);
}

// =============================================================================
// SECTION 4: Monthly Report Error Cases
// =============================================================================

#[tokio::test]
async fn test_monthly_report_invalid_month_rejected() {
    for month in ["2026-13", "January", "2026/01"] {
        let (status, result) = post_report(json!({
            "individual_name": "Sato Hanako",
            "month": month,
            "records": []
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "month {}", month);
        assert_eq!(result["code"], "INVALID_MONTH", "month {}", month);
    }
}

#[tokio::test]
async fn test_monthly_report_record_outside_month_rejected() {
    let (status, result) = post_report(json!({
        "individual_name": "Sato Hanako",
        "month": "2026-01",
        "records": [create_record("2026-02-02", "09:00", "18:00", None)]
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_RECORD");
    assert!(result["message"].as_str().unwrap().contains("2026-02-02"));
}

#[tokio::test]
async fn test_monthly_report_invalid_record_time_rejected() {
    let (status, result) = post_report(json!({
        "individual_name": "Sato Hanako",
        "month": "2026-01",
        "records": [create_record("2026-01-15", "09:00", "18:75", None)]
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_TIME");
}

#[tokio::test]
async fn test_monthly_report_missing_name_is_validation_error() {
    let (status, result) = post_report(json!({
        "month": "2026-01",
        "records": []
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

// =============================================================================
// SECTION 5: Holiday Lookups
// =============================================================================

#[tokio::test]
async fn test_holiday_lookup_substitute_holiday() {
    let (status, result) = get_holiday("2026-05-06").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["date"], "2026-05-06");
    assert_eq!(result["is_holiday"], true);
    assert_eq!(result["name"], "Substitute Holiday");
}

#[tokio::test]
async fn test_holiday_lookup_regular_day() {
    let (status, result) = get_holiday("2026-05-07").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["is_holiday"], false);
    assert!(result["name"].is_null());
}

#[tokio::test]
async fn test_holiday_lookup_invalid_date() {
    let (status, result) = get_holiday("2026-02-30").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_DATE");
}
