//! Response types for the workday calendar API.
//!
//! This module defines the success payloads, the error response structures
//! and the mapping from [`CalendarError`] to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::Locale;
use crate::config::CalendarMetadata;
use crate::error::CalendarError;
use crate::models::{DayClassification, HolidayRecord, MonthlyTotals, Region, TimeEntry};

/// One day of a calendar response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The classification of the day.
    #[serde(flatten)]
    pub classification: DayClassification,
    /// The weekday name in the dataset locale.
    pub weekday: String,
    /// The background color to paint the day with, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

impl CalendarDay {
    /// Wraps a classification with its display fields.
    pub fn new(classification: DayClassification, weekday: &str) -> Self {
        let highlight = classification.highlight().map(str::to_string);
        Self {
            classification,
            weekday: weekday.to_string(),
            highlight,
        }
    }
}

/// Counts over a calendar response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSummary {
    /// Days that are workdays.
    pub workdays: usize,
    /// Days that are public holidays.
    pub holidays: usize,
    /// Days with a recorded absence.
    pub absences: usize,
}

/// Response body for the calendar endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarResponse {
    /// Correlation ID of the request.
    pub request_id: Uuid,
    /// The short code the profile state resolved to.
    pub region_code: String,
    /// The classified days in ascending order.
    pub days: Vec<CalendarDay>,
    /// Counts over `days`.
    pub summary: CalendarSummary,
}

/// Response body for the time sheet endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSheetResponse {
    /// One blank entry per day of the month.
    pub entries: Vec<TimeEntry>,
    /// Totals over `entries`.
    pub totals: MonthlyTotals,
    /// `totals.working_minutes` in hours.
    pub working_hours: Decimal,
    /// `totals.available_minutes` in hours.
    pub available_hours: Decimal,
}

impl TimeSheetResponse {
    /// Builds the response, totalling `entries`.
    pub fn new(entries: Vec<TimeEntry>) -> Self {
        let totals = MonthlyTotals::from_entries(&entries);
        Self {
            working_hours: totals.working_hours(),
            available_hours: totals.available_hours(),
            entries,
            totals,
        }
    }
}

/// Description of the loaded holiday dataset, as returned by `/dataset`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// ISO country code of the dataset.
    pub country: String,
    /// Human-readable name of the dataset.
    pub name: String,
    /// The dataset version.
    pub version: String,
    /// Where the holiday data was taken from.
    pub source_url: String,
    /// Locale used for weekday names.
    pub locale: Locale,
    /// Number of holiday records.
    pub records: usize,
    /// Earliest date with a holiday record.
    pub first_date: Option<NaiveDate>,
    /// Latest date with a holiday record.
    pub last_date: Option<NaiveDate>,
}

impl DatasetInfo {
    /// Describes a dataset from its metadata, record count and date coverage.
    pub fn new(
        metadata: &CalendarMetadata,
        records: usize,
        coverage: Option<(NaiveDate, NaiveDate)>,
    ) -> Self {
        Self {
            country: metadata.country.clone(),
            name: metadata.name.clone(),
            version: metadata.version.clone(),
            source_url: metadata.source_url.clone(),
            locale: metadata.locale,
            records,
            first_date: coverage.map(|(first, _)| first),
            last_date: coverage.map(|(_, last)| last),
        }
    }
}

/// A public holiday as listed by `/holidays`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayInfo {
    /// The day of the holiday.
    pub date: NaiveDate,
    /// The holiday name, if the dataset has one.
    pub name: Option<String>,
}

impl From<&HolidayRecord> for HolidayInfo {
    fn from(record: &HolidayRecord) -> Self {
        Self {
            date: record.date,
            name: record.name.clone(),
        }
    }
}

/// A federal state as listed by `/regions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionInfo {
    /// Full state name.
    pub name: String,
    /// Dataset short code.
    pub code: String,
}

impl From<Region> for RegionInfo {
    fn from(region: Region) -> Self {
        Self {
            name: region.name().to_string(),
            code: region.code().to_string(),
        }
    }
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

impl From<CalendarError> for ApiErrorResponse {
    fn from(error: CalendarError) -> Self {
        match error {
            CalendarError::DatasetNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DATASET_ERROR",
                    "Holiday dataset error",
                    format!("Holiday dataset not found: {}", path),
                ),
            },
            CalendarError::DatasetParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DATASET_ERROR",
                    "Holiday dataset parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            CalendarError::InvalidDateRange { from, to } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE_RANGE",
                    format!("Invalid date range: {} is before {}", to, from),
                    "The end of the range must not be before its start",
                ),
            },
            CalendarError::RangeTooLarge { days, max } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RANGE_TOO_LARGE",
                    format!("Date range too large: {} days requested", days),
                    format!("A single request may cover at most {} days", max),
                ),
            },
            CalendarError::InvalidTime { value, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIME",
                    format!("Invalid time '{}': {}", value, message),
                    "Times must be given as HH:MM",
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_date_range_is_bad_request() {
        let from = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let api_error: ApiErrorResponse = CalendarError::InvalidDateRange { from, to }.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_DATE_RANGE");
    }

    #[test]
    fn test_range_too_large_is_bad_request() {
        let api_error: ApiErrorResponse = CalendarError::RangeTooLarge {
            days: 4_000,
            max: 1_830,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "RANGE_TOO_LARGE");
        assert_eq!(
            api_error.error.details.as_deref(),
            Some("A single request may cover at most 1830 days")
        );
    }

    #[test]
    fn test_dataset_error_is_server_error() {
        let api_error: ApiErrorResponse = CalendarError::DatasetNotFound {
            path: "/data".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "DATASET_ERROR");
    }

    #[test]
    fn test_calendar_day_flattens_classification() {
        let day = CalendarDay::new(
            DayClassification {
                date: NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
                is_workday: false,
                is_holiday: true,
                absence_type: None,
                absence_color: None,
            },
            "Samstag",
        );
        let json = serde_json::to_string(&day).unwrap();
        assert!(json.contains("\"date\":\"2024-01-06\""));
        assert!(json.contains("\"is_holiday\":true"));
        assert!(json.contains("\"weekday\":\"Samstag\""));
        assert!(json.contains("\"highlight\":\"#f5f5f5\""));
    }

    #[test]
    fn test_time_sheet_response_reports_decimal_hours() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let mut entry = TimeEntry::new(date, true);
        entry.working_time = 450;
        entry.available_time = 90;

        let response = TimeSheetResponse::new(vec![entry, TimeEntry::new(date, false)]);

        assert_eq!(response.totals.workdays, 1);
        assert_eq!(response.working_hours, Decimal::new(75, 1));
        assert_eq!(response.available_hours, Decimal::new(15, 1));
    }

    #[test]
    fn test_dataset_info_without_records_has_no_coverage() {
        let metadata = CalendarMetadata {
            country: "DE".to_string(),
            name: "Test".to_string(),
            version: "1".to_string(),
            source_url: "https://example.org".to_string(),
            locale: Locale::English,
        };
        let info = DatasetInfo::new(&metadata, 0, None);
        assert_eq!(info.records, 0);
        assert_eq!(info.first_date, None);
        assert_eq!(info.last_date, None);
        assert_eq!(info.locale, Locale::English);
    }

    #[test]
    fn test_region_info_from_region() {
        let info = RegionInfo::from(Region::Hamburg);
        assert_eq!(info.name, "Hamburg");
        assert_eq!(info.code, "hh");
    }
}
