//! HTTP API module for the employee portal.
//!
//! This module exposes the directory operations as REST endpoints: account
//! creation, renames, password rotation and timesheet management.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DaySelection, EmployeeNameRequest, RecordTimeRequest, RotatePasswordRequest};
pub use response::{ApiError, ApiErrorResponse, UsernameResponse, UsernamesResponse};
pub use state::AppState;
