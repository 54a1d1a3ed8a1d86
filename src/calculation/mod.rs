//! Calculation logic for the employee portal.
//!
//! This module contains the time conversion used when reporting a timesheet
//! and the gross pay calculation from minutes worked.

mod duration_display;
mod gross_pay;

pub use duration_display::{MINUTES_PER_HOUR, NO_HOURS_REPORTED, minutes_to_display};
pub use gross_pay::{PAY_DECIMAL_PLACES, calculate_gross_pay};
