//! Employee model.
//!
//! This module defines the [`Employee`] record: identity, credentials and a
//! weekly [`Timesheet`], together with the operations that mutate them.

use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::credentials::{CredentialPolicy, verify_match};
use crate::error::{PortalError, PortalResult};

use super::{DaySummary, Timesheet, TimesheetSummary, Weekday, WelcomeNotice};

/// Returns the hourly rate every employee is paid by default.
///
/// The rate is 12.00 currency units per hour.
pub fn default_hourly_rate() -> Decimal {
    Decimal::new(1200, 2)
}

/// An employee account with its weekly timesheet.
///
/// The password field is private and has no getter; it can only be checked
/// through [`rotate_password`](Self::rotate_password). `Debug` output redacts
/// it.
#[derive(Clone)]
pub struct Employee {
    id: Uuid,
    first_name: String,
    last_name: String,
    username: String,
    password: String,
    hourly_rate: Decimal,
    timesheet: Timesheet,
    created_at: DateTime<Utc>,
}

impl Employee {
    /// Creates an employee with a derived username and generated password.
    ///
    /// Names are trimmed and lower-cased. The returned [`WelcomeNotice`]
    /// carries the generated password; it is not retrievable afterwards.
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` if either name is blank, or `Policy` if password
    /// generation exhausts its attempt budget.
    ///
    /// # Example
    ///
    /// ```
    /// use employee_portal::credentials::CredentialPolicy;
    /// use employee_portal::models::{Employee, default_hourly_rate};
    ///
    /// let policy = CredentialPolicy::default();
    /// let (employee, notice) =
    ///     Employee::create("John", "Doe", &policy, default_hourly_rate()).unwrap();
    ///
    /// assert_eq!(employee.username(), "j_doe");
    /// assert_eq!(notice.first_name, "John");
    /// assert!(policy.validate_strength(&notice.password));
    /// ```
    pub fn create(
        first_name: &str,
        last_name: &str,
        policy: &CredentialPolicy,
        hourly_rate: Decimal,
    ) -> PortalResult<(Self, WelcomeNotice)> {
        Self::create_with_rng(
            first_name,
            last_name,
            policy,
            hourly_rate,
            &mut rand::thread_rng(),
        )
    }

    /// Creates an employee drawing the password from the given random source.
    pub fn create_with_rng<R: Rng>(
        first_name: &str,
        last_name: &str,
        policy: &CredentialPolicy,
        hourly_rate: Decimal,
        rng: &mut R,
    ) -> PortalResult<(Self, WelcomeNotice)> {
        let first_name = normalize_name("first_name", first_name)?;
        let last_name = normalize_name("last_name", last_name)?;
        let username = policy.derive_username(&first_name, &last_name);
        let password = policy.generate_password_with_rng(rng)?;

        let notice = WelcomeNotice {
            first_name: title_case(&first_name),
            username: username.clone(),
            password: password.clone(),
        };

        let employee = Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            username,
            password,
            hourly_rate,
            timesheet: Timesheet::new(),
            created_at: Utc::now(),
        };

        Ok((employee, notice))
    }

    /// Returns the username the given names would derive, without mutating
    /// anything.
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` if either name is blank.
    pub fn username_for(
        first_name: &str,
        last_name: &str,
        policy: &CredentialPolicy,
    ) -> PortalResult<String> {
        let first_name = normalize_name("first_name", first_name)?;
        let last_name = normalize_name("last_name", last_name)?;
        Ok(policy.derive_username(&first_name, &last_name))
    }

    /// Returns the stable identifier, unaffected by renames.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the lower-cased first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the lower-cased last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the current username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the title-cased full name, e.g. "John Doe".
    pub fn display_name(&self) -> String {
        title_case(&format!("{} {}", self.first_name, self.last_name))
    }

    /// Returns the hourly pay rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Returns the employee's timesheet.
    pub fn timesheet(&self) -> &Timesheet {
        &self.timesheet
    }

    /// Returns when the account was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the employee's names and re-derives the username.
    ///
    /// Returns the new username. Any directory keyed by the old username must
    /// be re-keyed by the caller.
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` if either name is blank; the record is unchanged.
    pub fn rename_identity(
        &mut self,
        new_first_name: &str,
        new_last_name: &str,
        policy: &CredentialPolicy,
    ) -> PortalResult<String> {
        let first_name = normalize_name("first_name", new_first_name)?;
        let last_name = normalize_name("last_name", new_last_name)?;

        self.username = policy.derive_username(&first_name, &last_name);
        self.first_name = first_name;
        self.last_name = last_name;

        Ok(self.username.clone())
    }

    /// Replaces the password after checking the current one.
    ///
    /// # Errors
    ///
    /// - `Auth` if `current_password_attempt` does not match
    /// - `Weakness` if `new_password` fails the strength policy
    ///
    /// The stored password is unchanged on either error.
    pub fn rotate_password(
        &mut self,
        current_password_attempt: &str,
        new_password: &str,
        policy: &CredentialPolicy,
    ) -> PortalResult<()> {
        if !verify_match(current_password_attempt, &self.password) {
            return Err(PortalError::Auth);
        }

        if !policy.validate_strength(new_password) {
            return Err(PortalError::Weakness {
                requirements: policy.requirements(),
            });
        }

        self.password = new_password.to_string();
        Ok(())
    }

    /// Records the minutes worked on a day.
    ///
    /// # Errors
    ///
    /// Returns `Range` if `minutes` is outside `[0, 1440]`.
    pub fn record_time(&mut self, day: Weekday, minutes: i64) -> PortalResult<()> {
        self.timesheet.set_day(day, minutes)
    }

    /// Builds a summary of the week: per-day times and gross pay.
    pub fn view_summary(&self) -> TimesheetSummary {
        let days = self
            .timesheet
            .iter()
            .map(|(day, minutes)| DaySummary {
                day,
                minutes,
                display: self.timesheet.display_day(day),
            })
            .collect();

        TimesheetSummary {
            employee_id: self.id,
            display_name: self.display_name(),
            username: self.username.clone(),
            days,
            total_minutes: self.timesheet.total_minutes(),
            hourly_rate: self.hourly_rate,
            total_pay: self.timesheet.total_pay(self.hourly_rate),
            generated_at: Utc::now(),
        }
    }

    /// Resets every day of the timesheet to zero.
    pub fn reset_timesheet(&mut self) {
        self.timesheet.clear();
    }
}

impl fmt::Debug for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Employee")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .field("hourly_rate", &self.hourly_rate)
            .field("timesheet", &self.timesheet)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Trims and lower-cases a name, rejecting blanks.
fn normalize_name(field: &str, value: &str) -> PortalResult<String> {
    let normalized = value.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(PortalError::InvalidName {
            field: field.to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(normalized)
}

/// Upper-cases the first letter of every word.
fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_word_start = true;

    for c in value.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }

    result
}
