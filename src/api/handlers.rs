//! HTTP request handlers for the workday calendar API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Datelike, NaiveDate, NaiveTime};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calendar::{
    AbsenceBook, blank_time_entry, classify_range, date_range, month_range, range_length,
    weekday_name,
};
use crate::error::CalendarError;
use crate::models::{Absence, LegendEntry, Profile, Region, TimeEntry, legend, region_code};

use super::request::{CalendarRequest, HolidayQuery, MonthRequest, TimeSheetRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalendarDay, CalendarResponse, CalendarSummary, DatasetInfo,
    HolidayInfo, RegionInfo, TimeSheetResponse,
};
use super::state::AppState;

/// Largest number of days a single `/calendar` request may cover.
pub const MAX_RANGE_DAYS: u64 = 366 * 5;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calendar", post(calendar_handler))
        .route("/calendar/month", post(month_handler))
        .route("/time-entries/month", post(time_sheet_handler))
        .route("/regions", get(regions_handler))
        .route("/holidays", get(holidays_handler))
        .route("/dataset", get(dataset_handler))
        .route("/absence-types", get(absence_types_handler))
        .with_state(state)
}

/// Handler for POST /calendar.
///
/// Classifies every day between `from` and `to`, up to [`MAX_RANGE_DAYS`] days.
async fn calendar_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalendarRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calendar request");

    let request = match extract_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    if request.to < request.from {
        warn!(
            correlation_id = %correlation_id,
            from = %request.from,
            to = %request.to,
            "Rejected reversed date range"
        );
        return error_response(CalendarError::InvalidDateRange {
            from: request.from,
            to: request.to,
        });
    }

    let length = range_length(request.from, request.to);
    if length > MAX_RANGE_DAYS {
        warn!(
            correlation_id = %correlation_id,
            days = length,
            max = MAX_RANGE_DAYS,
            "Rejected oversized date range"
        );
        return error_response(CalendarError::RangeTooLarge {
            days: length,
            max: MAX_RANGE_DAYS,
        });
    }

    let days = date_range(request.from, request.to);
    json_response(
        build_calendar(
            &state,
            &request.profile,
            &days,
            request.absences,
            correlation_id,
        )
        .await,
    )
}

/// Handler for POST /calendar/month.
///
/// Classifies every day of the month containing `month`.
async fn month_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing month request");

    let request = match extract_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let days = month_range(request.month);
    json_response(
        build_calendar(
            &state,
            &request.profile,
            &days,
            request.absences,
            correlation_id,
        )
        .await,
    )
}

/// Handler for POST /time-entries/month.
///
/// Returns a blank time sheet with each day's workday flag pre-filled.
async fn time_sheet_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimeSheetRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing time sheet request");

    let request = match extract_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let entries: Vec<TimeEntry> = month_range(request.month)
        .into_iter()
        .map(|day| blank_time_entry(&request.profile, day, state.holidays()))
        .collect();
    let response = TimeSheetResponse::new(entries);

    info!(
        correlation_id = %correlation_id,
        year = request.month.year(),
        month = request.month.month(),
        workdays = response.totals.workdays,
        "Time sheet created"
    );

    json_response(response)
}

/// Handler for GET /regions.
async fn regions_handler() -> Json<Vec<RegionInfo>> {
    Json(Region::ALL.into_iter().map(RegionInfo::from).collect())
}

/// Handler for GET /holidays.
///
/// Lists the holidays of one state between two days, inclusive.
async fn holidays_handler(
    State(state): State<AppState>,
    query: Result<Query<HolidayQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Invalid holiday query");
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::validation_error(rejection.body_text())),
            )
                .into_response();
        }
    };

    if query.to < query.from {
        return error_response(CalendarError::InvalidDateRange {
            from: query.from.and_time(NaiveTime::MIN),
            to: query.to.and_time(NaiveTime::MIN),
        });
    }

    let code = region_code(&query.state);
    let holidays: Vec<HolidayInfo> = state
        .dataset()
        .holidays_between(query.from, query.to)
        .into_iter()
        .filter(|record| record.is_flagged(code))
        .map(HolidayInfo::from)
        .collect();

    json_response(holidays)
}

/// Handler for GET /dataset.
async fn dataset_handler(State(state): State<AppState>) -> Json<DatasetInfo> {
    let dataset = state.dataset();
    Json(DatasetInfo::new(
        dataset.metadata(),
        dataset.holidays().len(),
        dataset.holidays().coverage(),
    ))
}

/// Handler for GET /absence-types.
async fn absence_types_handler() -> Json<Vec<LegendEntry>> {
    Json(legend())
}

/// Classifies `days` for a profile and wraps the result for the response.
async fn build_calendar(
    state: &AppState,
    profile: &Profile,
    days: &[NaiveDate],
    absences: Vec<Absence>,
    correlation_id: Uuid,
) -> CalendarResponse {
    let start_time = Instant::now();
    let book: AbsenceBook = absences.into_iter().collect();
    let locale = state.locale();

    let days: Vec<CalendarDay> = classify_range(profile, days, state.holidays(), &book)
        .await
        .into_iter()
        .map(|classification| {
            let weekday = weekday_name(classification.date.weekday(), locale);
            CalendarDay::new(classification, weekday)
        })
        .collect();

    let summary = CalendarSummary {
        workdays: days.iter().filter(|d| d.classification.is_workday).count(),
        holidays: days.iter().filter(|d| d.classification.is_holiday).count(),
        absences: days
            .iter()
            .filter(|d| d.classification.absence_type.is_some())
            .count(),
    };

    info!(
        correlation_id = %correlation_id,
        state = %profile.state,
        days = days.len(),
        workdays = summary.workdays,
        duration_us = start_time.elapsed().as_micros(),
        "Calendar classified successfully"
    );

    CalendarResponse {
        request_id: correlation_id,
        region_code: region_code(&profile.state).to_string(),
        days,
        summary,
    }
}

/// Unwraps a JSON payload or turns the rejection into a 400 response.
fn extract_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
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
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

fn json_response<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: CalendarError) -> Response {
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
