//! Error types for the employee portal.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the account and timesheet operations can raise.

use thiserror::Error;

/// The main error type for the employee portal.
///
/// Every variant is recoverable: the caller can re-prompt or re-invoke the
/// operation. Mutating operations validate before committing, so an error
/// never leaves a record half-updated.
///
/// # Example
///
/// ```
/// use employee_portal::error::PortalError;
///
/// let error = PortalError::EmployeeNotFound {
///     username: "j_doe".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: j_doe");
/// ```
#[derive(Debug, Error)]
pub enum PortalError {
    /// A minutes value or day selection was outside its domain.
    #[error("Value out of range for '{field}': {message}")]
    Range {
        /// The input that was out of range.
        field: String,
        /// A description of the accepted domain.
        message: String,
    },

    /// The current password supplied for a rotation did not match.
    #[error("The password entered does not match the current password")]
    Auth,

    /// A candidate password failed the strength policy.
    #[error("Password does not meet security criteria: {requirements}")]
    Weakness {
        /// Human-readable description of the policy.
        requirements: String,
    },

    /// Password generation gave up after the configured number of attempts.
    #[error("Password generation exceeded {attempts} attempts")]
    Policy {
        /// The attempt cap that was reached.
        attempts: u32,
    },

    /// A first or last name was unusable.
    #[error("Invalid name field '{field}': {message}")]
    InvalidName {
        /// The name field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No employee is registered under the username.
    #[error("Employee not found: {username}")]
    EmployeeNotFound {
        /// The username that was looked up.
        username: String,
    },

    /// Another employee already holds the username.
    #[error("Username already in use: {username}")]
    UsernameTaken {
        /// The contested username.
        username: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds unusable values.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return PortalError.
pub type PortalResult<T> = Result<T, PortalError>;
