//! In-memory employee directory.
//!
//! The [`EmployeeDirectory`] maps usernames to employee records and is the
//! entry point callers use for every account and timesheet operation. The
//! username map sits behind one `RwLock` and each record behind its own
//! `Mutex`, so updates to one employee never block reads of another. Renames
//! hold the map write lock for the whole operation, which makes re-keying a
//! single atomic step. Inserts take the write lock only after the new
//! account's credentials exist.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use rand::Rng;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::ConfigLoader;
use crate::credentials::CredentialPolicy;
use crate::error::{PortalError, PortalResult};
use crate::models::{Employee, TimesheetSummary, Weekday, WelcomeNotice, default_hourly_rate};

type EmployeeHandle = Arc<Mutex<Employee>>;

/// Username-keyed store of employee records.
///
/// # Example
///
/// ```
/// use employee_portal::directory::EmployeeDirectory;
/// use employee_portal::models::Weekday;
///
/// let directory = EmployeeDirectory::default();
/// let notice = directory.create_employee("John", "Doe").unwrap();
/// assert_eq!(notice.username, "j_doe");
///
/// directory.record_time("j_doe", Weekday::Monday, 60).unwrap();
/// let new_username = directory.rename_employee("j_doe", "Jane", "Smith").unwrap();
/// assert_eq!(new_username, "j_smi");
///
/// let summary = directory.view_summary("j_smi").unwrap();
/// assert_eq!(summary.total_pay.to_string(), "12.00");
/// assert!(directory.view_summary("j_doe").is_err());
/// ```
pub struct EmployeeDirectory {
    employees: RwLock<HashMap<String, EmployeeHandle>>,
    policy: CredentialPolicy,
    hourly_rate: Decimal,
}

impl fmt::Debug for EmployeeDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmployeeDirectory")
            .field("employees_count", &self.employees.read().len())
            .field("policy", &self.policy)
            .field("hourly_rate", &self.hourly_rate)
            .finish()
    }
}

impl Default for EmployeeDirectory {
    fn default() -> Self {
        Self::new(CredentialPolicy::default(), default_hourly_rate())
    }
}

impl EmployeeDirectory {
    /// Creates an empty directory.
    pub fn new(policy: CredentialPolicy, hourly_rate: Decimal) -> Self {
        Self {
            employees: RwLock::new(HashMap::new()),
            policy,
            hourly_rate,
        }
    }

    /// Creates an empty directory using the loaded configuration.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(config.credential_policy(), config.hourly_rate())
    }

    /// Returns the credential policy applied to every account.
    pub fn policy(&self) -> &CredentialPolicy {
        &self.policy
    }

    /// Returns the number of registered employees.
    pub fn len(&self) -> usize {
        self.employees.read().len()
    }

    /// Returns true if no employees are registered.
    pub fn is_empty(&self) -> bool {
        self.employees.read().is_empty()
    }

    /// Returns true if the username is registered.
    pub fn contains(&self, username: &str) -> bool {
        self.employees.read().contains_key(username)
    }

    /// Returns all registered usernames, sorted.
    pub fn usernames(&self) -> Vec<String> {
        let mut usernames: Vec<String> = self.employees.read().keys().cloned().collect();
        usernames.sort();
        usernames
    }

    /// Creates an account and registers it under its derived username.
    ///
    /// # Errors
    ///
    /// - `InvalidName` if either name is blank
    /// - `UsernameTaken` if the derived username is already registered
    /// - `Policy` if password generation fails
    pub fn create_employee(&self, first_name: &str, last_name: &str) -> PortalResult<WelcomeNotice> {
        self.create_employee_with_rng(first_name, last_name, &mut rand::thread_rng())
    }

    /// Creates an account using the supplied random source for its password.
    ///
    /// Credentials are generated before the map write lock is taken, and the
    /// username is checked again under the lock before inserting.
    pub fn create_employee_with_rng<R: Rng>(
        &self,
        first_name: &str,
        last_name: &str,
        rng: &mut R,
    ) -> PortalResult<WelcomeNotice> {
        let username = Employee::username_for(first_name, last_name, &self.policy)?;
        if self.contains(&username) {
            return Err(username_taken(username));
        }

        let (employee, notice) =
            Employee::create_with_rng(first_name, last_name, &self.policy, self.hourly_rate, rng)?;

        let mut employees = self.employees.write();
        if employees.contains_key(&notice.username) {
            return Err(username_taken(notice.username.clone()));
        }

        info!(
            username = %notice.username,
            employee_id = %employee.id(),
            "Created employee account"
        );
        employees.insert(notice.username.clone(), Arc::new(Mutex::new(employee)));
        Ok(notice)
    }

    /// Renames an employee and re-keys the directory under the new username.
    ///
    /// The old entry is removed and the new one inserted while the map write
    /// lock is held. Returns the new username.
    ///
    /// # Errors
    ///
    /// - `EmployeeNotFound` if `username` is not registered
    /// - `InvalidName` if either new name is blank
    /// - `UsernameTaken` if the new username belongs to another employee
    ///
    /// The directory and the record are unchanged on error.
    pub fn rename_employee(
        &self,
        username: &str,
        new_first_name: &str,
        new_last_name: &str,
    ) -> PortalResult<String> {
        let mut employees = self.employees.write();

        let handle = employees
            .get(username)
            .cloned()
            .ok_or_else(|| not_found(username))?;

        let new_username = Employee::username_for(new_first_name, new_last_name, &self.policy)?;
        if new_username != username && employees.contains_key(&new_username) {
            warn!(
                username = %username,
                new_username = %new_username,
                "Rename would collide with an existing username"
            );
            return Err(PortalError::UsernameTaken {
                username: new_username,
            });
        }

        let renamed = handle
            .lock()
            .rename_identity(new_first_name, new_last_name, &self.policy)?;

        employees.remove(username);
        employees.insert(renamed.clone(), handle);

        info!(old_username = %username, new_username = %renamed, "Renamed employee");
        Ok(renamed)
    }

    /// Rotates an employee's password.
    ///
    /// # Errors
    ///
    /// - `EmployeeNotFound` if `username` is not registered
    /// - `Auth` if `current_password_attempt` is wrong
    /// - `Weakness` if `new_password` fails the strength policy
    pub fn rotate_password(
        &self,
        username: &str,
        current_password_attempt: &str,
        new_password: &str,
    ) -> PortalResult<()> {
        let handle = self.get(username)?;
        let result = handle
            .lock()
            .rotate_password(current_password_attempt, new_password, &self.policy);

        match &result {
            Ok(()) => info!(username = %username, "Password rotated"),
            Err(err) => warn!(username = %username, error = %err, "Password rotation rejected"),
        }
        result
    }

    /// Records minutes worked on a day for an employee.
    ///
    /// # Errors
    ///
    /// - `EmployeeNotFound` if `username` is not registered
    /// - `Range` if `minutes` is outside `[0, 1440]`
    pub fn record_time(&self, username: &str, day: Weekday, minutes: i64) -> PortalResult<()> {
        let handle = self.get(username)?;
        handle.lock().record_time(day, minutes)?;

        info!(username = %username, day = %day, minutes, "Updated timesheet");
        Ok(())
    }

    /// Returns an employee's timesheet summary.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if `username` is not registered.
    pub fn view_summary(&self, username: &str) -> PortalResult<TimesheetSummary> {
        let handle = self.get(username)?;
        let summary = handle.lock().view_summary();
        Ok(summary)
    }

    /// Resets an employee's timesheet to zero.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if `username` is not registered.
    pub fn reset_timesheet(&self, username: &str) -> PortalResult<()> {
        let handle = self.get(username)?;
        handle.lock().reset_timesheet();

        info!(username = %username, "Reset timesheet");
        Ok(())
    }

    /// Looks up a record, releasing the map lock before returning.
    fn get(&self, username: &str) -> PortalResult<EmployeeHandle> {
        self.employees
            .read()
            .get(username)
            .cloned()
            .ok_or_else(|| not_found(username))
    }
}

fn username_taken(username: String) -> PortalError {
    warn!(username = %username, "Username already registered");
    PortalError::UsernameTaken { username }
}

fn not_found(username: &str) -> PortalError {
    PortalError::EmployeeNotFound {
        username: username.to_string(),
    }
}
