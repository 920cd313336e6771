//! HTTP request handlers for the portal engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::attendance::{calculate_work_days, month_classifications};
use crate::models::{User, holiday_windows};
use crate::pagination::paginate_document;
use crate::payroll::{SalaryInputs, calculate_salary};

use super::request::{PaginateRequest, SheetRequest, StatementRequest};
use super::response::{ApiError, ApiErrorResponse, DayCell, PaginateResponse, SheetResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/documents/paginate", post(paginate_handler))
        .route("/attendance/sheet", post(sheet_handler))
        .route("/payroll/statement", post(statement_handler))
        .with_state(state)
}

/// Turns a body rejection into the 400 error response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
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
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for the POST /documents/paginate endpoint.
///
/// Accepts a document and returns its fixed-height page layout.
async fn paginate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PaginateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pagination request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let document_type = request.document.document_type();
    let pages = paginate_document(&request.document, state.config().layout());
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        document_type = ?document_type,
        page_count = pages.len(),
        duration_us = duration.as_micros(),
        "Pagination completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(PaginateResponse {
            document_type,
            page_count: pages.len(),
            pages,
        }),
    )
        .into_response()
}

/// Handler for the POST /attendance/sheet endpoint.
///
/// Classifies every day of the month for one user and counts work days.
async fn sheet_handler(
    State(state): State<AppState>,
    payload: Result<Json<SheetRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance sheet request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if !(1..=12).contains(&request.month) {
        warn!(
            correlation_id = %correlation_id,
            month = request.month,
            "Month out of range"
        );
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::validation_error(format!(
                "month must be 1-12, got {}",
                request.month
            ))),
        )
            .into_response();
    }

    let user: User = request.user.into();
    let settings = state.config().attendance();
    let windows = holiday_windows(&request.notifications);

    let classes = month_classifications(
        &user,
        request.year,
        request.month,
        &request.records,
        settings,
        &windows,
    );
    let work_days = calculate_work_days(
        &user,
        request.year,
        request.month,
        &request.records,
        settings,
        &windows,
    );

    info!(
        correlation_id = %correlation_id,
        user_id = %user.id,
        year = request.year,
        month = request.month,
        work_days,
        "Attendance sheet derived"
    );

    let days = classes
        .into_iter()
        .map(|(date, class)| DayCell::from_class(date, class))
        .collect();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(SheetResponse {
            user_id: user.id,
            year: request.year,
            month: request.month,
            days,
            work_days,
        }),
    )
        .into_response()
}

/// Handler for the POST /payroll/statement endpoint.
///
/// Derives a monthly salary statement from the given inputs.
async fn statement_handler(
    State(_state): State<AppState>,
    payload: Result<Json<StatementRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary statement request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let inputs: SalaryInputs = request.into();
    match calculate_salary(&inputs) {
        Ok(statement) => {
            info!(
                correlation_id = %correlation_id,
                work_days = inputs.work_days,
                net_salary = %statement.net_salary,
                "Statement derived"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(statement),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Statement derivation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
