//! HTTP request handlers for the employee portal API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PortalError;

use super::request::{EmployeeNameRequest, RecordTimeRequest, RotatePasswordRequest};
use super::response::{ApiError, ApiErrorResponse, UsernameResponse, UsernamesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            post(create_employee_handler).get(list_usernames_handler),
        )
        .route("/employees/:username/name", put(rename_employee_handler))
        .route("/employees/:username/password", put(rotate_password_handler))
        .route(
            "/employees/:username/timesheet",
            get(view_summary_handler)
                .put(record_time_handler)
                .delete(reset_timesheet_handler),
        )
        .with_state(state)
}

/// Handler for POST /employees.
///
/// Creates an account and returns its welcome notice, which is the only
/// response that ever carries the generated password.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeNameRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create employee request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state
        .directory()
        .create_employee(&request.first_name, &request.last_name)
    {
        Ok(notice) => {
            info!(
                correlation_id = %correlation_id,
                username = %notice.username,
                "Employee created"
            );
            (StatusCode::CREATED, Json(notice)).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /employees.
async fn list_usernames_handler(State(state): State<AppState>) -> Response {
    let usernames = state.directory().usernames();
    info!(count = usernames.len(), "Listed usernames");
    (StatusCode::OK, Json(UsernamesResponse { usernames })).into_response()
}

/// Handler for PUT /employees/:username/name.
///
/// Renames the employee and returns the re-derived username the record is
/// now filed under.
async fn rename_employee_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
    payload: Result<Json<EmployeeNameRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, username = %username, "Processing rename request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state
        .directory()
        .rename_employee(&username, &request.first_name, &request.last_name)
    {
        Ok(new_username) => (
            StatusCode::OK,
            Json(UsernameResponse {
                username: new_username,
            }),
        )
            .into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /employees/:username/password.
async fn rotate_password_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
    payload: Result<Json<RotatePasswordRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, username = %username, "Processing password rotation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.directory().rotate_password(
        &username,
        &request.current_password,
        &request.new_password,
    ) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /employees/:username/timesheet.
async fn record_time_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
    payload: Result<Json<RecordTimeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, username = %username, "Processing timesheet update");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = request
        .day
        .resolve()
        .and_then(|day| state.directory().record_time(&username, day, request.minutes));

    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /employees/:username/timesheet.
async fn view_summary_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.directory().view_summary(&username) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                username = %username,
                total_pay = %summary.total_pay,
                "Timesheet summary produced"
            );
            (StatusCode::OK, Json(summary)).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for DELETE /employees/:username/timesheet.
async fn reset_timesheet_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.directory().reset_timesheet(&username) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Maps a domain error to its HTTP response.
fn error_response(correlation_id: Uuid, err: PortalError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    api_error.into_response()
}

/// Maps a JSON body rejection to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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

    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}
