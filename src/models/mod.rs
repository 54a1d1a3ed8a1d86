//! Core data models for the employee portal.
//!
//! This module contains the employee record, its weekly timesheet and the
//! structured values handed back to callers.

mod employee;
mod notice;
mod summary;
mod timesheet;
mod weekday;

pub use employee::{Employee, default_hourly_rate};
pub use notice::WelcomeNotice;
pub use summary::{DaySummary, TimesheetSummary};
pub use timesheet::{MAX_MINUTES_PER_DAY, Timesheet};
pub use weekday::Weekday;
