//! Request types for the employee portal API.
//!
//! This module defines the JSON request bodies accepted by the endpoints.

use serde::{Deserialize, Serialize};

use crate::error::PortalResult;
use crate::models::Weekday;

/// Body for creating or renaming an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeNameRequest {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
}

/// Body for rotating a password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotatePasswordRequest {
    /// The password currently on record.
    pub current_password: String,
    /// The replacement password.
    pub new_password: String,
}

/// A day given either by name (`"monday"`) or by menu number (1 = Monday,
/// 7 = Sunday).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DaySelection {
    /// Menu number.
    Number(i64),
    /// Day name, any case.
    Name(String),
}

impl DaySelection {
    /// Resolves the selection to a weekday.
    ///
    /// # Errors
    ///
    /// Returns `Range` for an unknown name or a number outside 1..=7.
    pub fn resolve(&self) -> PortalResult<Weekday> {
        match self {
            DaySelection::Number(number) => Weekday::from_menu_number(*number),
            DaySelection::Name(name) => name.parse(),
        }
    }
}

/// Body for recording time against a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordTimeRequest {
    /// The day worked.
    pub day: DaySelection,
    /// Minutes worked, 0 to 1440.
    pub minutes: i64,
}
