//! Response types for the portal engine API.
//!
//! This module defines the success payloads plus the error response
//! structures and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::attendance::{DayClass, LeaveSpan};
use crate::error::EngineError;
use crate::models::{DocumentType, LeavePeriod, Page};

/// Response body for the `/documents/paginate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginateResponse {
    /// Which page profile was applied.
    pub document_type: DocumentType,
    /// Number of pages produced.
    pub page_count: usize,
    /// The pages, blocks in render order.
    pub pages: Vec<Page>,
}

/// One day cell of an attendance sheet response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCell {
    /// The calendar day.
    pub date: NaiveDate,
    /// Classification code shown in the sheet cell.
    pub class: String,
    /// For leave cells: "full", "morning", or "afternoon".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave: Option<String>,
}

impl DayCell {
    /// Builds a cell from a derived day classification.
    pub fn from_class(date: NaiveDate, class: DayClass) -> Self {
        let (code, leave) = match class {
            DayClass::Locked => ("locked", None),
            DayClass::Holiday => ("holiday", None),
            DayClass::Present => ("present", None),
            DayClass::Late => ("late", None),
            DayClass::OnLeave(span) => ("on_leave", Some(span_label(span))),
            DayClass::UnpaidLeave(span) => ("unpaid_leave", Some(span_label(span))),
            DayClass::Absent => ("absent", None),
            DayClass::Missing => ("missing", None),
            DayClass::Blank => ("blank", None),
        };
        Self {
            date,
            class: code.to_string(),
            leave: leave.map(str::to_string),
        }
    }
}

fn span_label(span: LeaveSpan) -> &'static str {
    match span {
        LeaveSpan::Full => "full",
        LeaveSpan::Half(LeavePeriod::Morning) => "morning",
        LeaveSpan::Half(LeavePeriod::Afternoon) => "afternoon",
    }
}

/// Response body for the `/attendance/sheet` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetResponse {
    /// The user the sheet is for.
    pub user_id: String,
    /// Target year.
    pub year: i32,
    /// Target month.
    pub month: u32,
    /// One cell per calendar day of the month.
    pub days: Vec<DayCell>,
    /// Count of Present and Late days, the time-salary numerator.
    pub work_days: u32,
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
            EngineError::ImportRejected { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "IMPORT_REJECTED",
                    "Attendance import rejected",
                    message,
                ),
            },
            EngineError::StoreError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    format!("Store operation failed for '{}'", path),
                    message,
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Payroll calculation failed",
                    message,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_import_rejected_maps_to_bad_request() {
        let engine_error = EngineError::ImportRejected {
            message: "no day header row found".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "IMPORT_REJECTED");
    }

    #[test]
    fn test_config_error_maps_to_internal_error() {
        let engine_error = EngineError::ConfigNotFound {
            path: "/missing/layout.yaml".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_day_cell_codes() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

        let cell = DayCell::from_class(date, DayClass::Late);
        assert_eq!(cell.class, "late");
        assert_eq!(cell.leave, None);

        let cell = DayCell::from_class(
            date,
            DayClass::OnLeave(LeaveSpan::Half(LeavePeriod::Afternoon)),
        );
        assert_eq!(cell.class, "on_leave");
        assert_eq!(cell.leave.as_deref(), Some("afternoon"));

        let cell = DayCell::from_class(date, DayClass::UnpaidLeave(LeaveSpan::Full));
        assert_eq!(cell.class, "unpaid_leave");
        assert_eq!(cell.leave.as_deref(), Some("full"));
    }

    #[test]
    fn test_day_cell_skips_leave_field_when_none() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let json = serde_json::to_string(&DayCell::from_class(date, DayClass::Present)).unwrap();
        assert!(!json.contains("leave"));
    }
}
