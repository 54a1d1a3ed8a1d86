//! Timesheet summary report.
//!
//! A [`TimesheetSummary`] is a read-only snapshot of an employee's week: one
//! formatted entry per day plus the gross pay owed.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Weekday;

/// Width of the rule lines in the rendered report.
const RULE_WIDTH: usize = 50;

/// Time reported for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    /// The day reported.
    pub day: Weekday,
    /// Minutes logged on the day.
    pub minutes: u32,
    /// Formatted time, e.g. "2 hrs 5 min" or "No hours reported.".
    pub display: String,
}

/// Snapshot of an employee's timesheet and pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetSummary {
    /// Stable identifier of the employee.
    pub employee_id: Uuid,
    /// Title-cased full name.
    pub display_name: String,
    /// Username at the time of the report.
    pub username: String,
    /// One entry per weekday, Sunday first.
    pub days: Vec<DaySummary>,
    /// Total minutes across the week.
    pub total_minutes: u32,
    /// Hourly rate used for the pay calculation.
    pub hourly_rate: Decimal,
    /// Gross pay rounded to two decimal places.
    pub total_pay: Decimal,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
}

impl fmt::Display for TimesheetSummary {
    /// Renders the console report layout.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);

        writeln!(f, "{}'S TIMESHEET.", self.display_name.to_uppercase())?;
        writeln!(f, "Username: {}", self.username)?;
        writeln!(f, "{}", rule)?;
        for entry in &self.days {
            writeln!(f, "{}: {}", entry.day, entry.display)?;
        }
        writeln!(f, "{}", rule)?;
        write!(f, "TOTAL PAY: ${:.2}", self.total_pay)
    }
}
