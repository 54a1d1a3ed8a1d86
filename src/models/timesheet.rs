//! Weekly timesheet model.
//!
//! A timesheet holds one minute total for each of the seven weekdays. Every
//! day is always present and each value stays within `[0, 1440]`.

use rust_decimal::Decimal;

use crate::calculation::{calculate_gross_pay, minutes_to_display};
use crate::error::{PortalError, PortalResult};

use super::Weekday;

/// Most minutes that can be logged against a single day.
pub const MAX_MINUTES_PER_DAY: u32 = 1440;

/// Minutes worked on each day of the week.
///
/// # Example
///
/// ```
/// use employee_portal::models::{Timesheet, Weekday};
/// use rust_decimal::Decimal;
///
/// let mut timesheet = Timesheet::new();
/// timesheet.set_day(Weekday::Monday, 60).unwrap();
/// timesheet.set_day(Weekday::Tuesday, 30).unwrap();
///
/// assert_eq!(timesheet.total_minutes(), 90);
/// assert_eq!(timesheet.total_pay(Decimal::new(12, 0)).to_string(), "18.00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timesheet {
    minutes_by_day: [u32; 7],
}

impl Timesheet {
    /// Creates a timesheet with zero minutes on every day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minutes worked on a day, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `Range` if `minutes` is negative or above
    /// [`MAX_MINUTES_PER_DAY`]. The timesheet is unchanged on error.
    pub fn set_day(&mut self, day: Weekday, minutes: i64) -> PortalResult<()> {
        let minutes = u32::try_from(minutes)
            .ok()
            .filter(|m| *m <= MAX_MINUTES_PER_DAY)
            .ok_or_else(|| PortalError::Range {
                field: "minutes".to_string(),
                message: format!(
                    "must be between 0 and {} (max per day), got {}",
                    MAX_MINUTES_PER_DAY, minutes
                ),
            })?;

        self.minutes_by_day[day.index()] = minutes;
        Ok(())
    }

    /// Returns the minutes logged on a day.
    pub fn minutes(&self, day: Weekday) -> u32 {
        self.minutes_by_day[day.index()]
    }

    /// Resets every day to zero.
    pub fn clear(&mut self) {
        self.minutes_by_day = [0; 7];
    }

    /// Iterates over `(day, minutes)` pairs, Sunday first.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, u32)> + '_ {
        Weekday::ALL
            .into_iter()
            .map(move |day| (day, self.minutes(day)))
    }

    /// Total minutes across the week.
    pub fn total_minutes(&self) -> u32 {
        self.minutes_by_day.iter().sum()
    }

    /// Returns the display string for a day's minutes.
    pub fn display_day(&self, day: Weekday) -> String {
        minutes_to_display(self.minutes(day))
    }

    /// Gross pay for the week at the given hourly rate, rounded to cents.
    pub fn total_pay(&self, hourly_rate: Decimal) -> Decimal {
        calculate_gross_pay(self.minutes_by_day, hourly_rate)
    }
}
