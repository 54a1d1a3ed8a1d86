//! Response types for the employee portal API.
//!
//! This module defines the success bodies that have no domain type of their
//! own, the error response structure, and the mapping from [`PortalError`]
//! to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::PortalError;

/// Response carrying a single username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameResponse {
    /// The username.
    pub username: String,
}

/// Response listing registered usernames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernamesResponse {
    /// Registered usernames, sorted.
    pub usernames: Vec<String>,
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

impl From<PortalError> for ApiErrorResponse {
    fn from(error: PortalError) -> Self {
        let message = error.to_string();
        match error {
            PortalError::Range { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("OUT_OF_RANGE", message),
            },
            PortalError::InvalidName { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
            PortalError::Weakness { requirements } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details("WEAK_PASSWORD", message, requirements),
            },
            PortalError::Auth => ApiErrorResponse {
                status: StatusCode::UNAUTHORIZED,
                error: ApiError::with_details(
                    "PASSWORD_MISMATCH",
                    message,
                    "Re-enter the current password and try again",
                ),
            },
            PortalError::EmployeeNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("EMPLOYEE_NOT_FOUND", message),
            },
            PortalError::UsernameTaken { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("USERNAME_TAKEN", message),
            },
            PortalError::Policy { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CREDENTIAL_GENERATION_FAILED",
                    "Could not generate a password",
                    message,
                ),
            },
            PortalError::ConfigNotFound { .. }
            | PortalError::ConfigParseError { .. }
            | PortalError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}
