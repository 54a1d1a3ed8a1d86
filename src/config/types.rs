//! Configuration types for the employee portal.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so a partial file only overrides what it names.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::credentials::{
    CredentialPolicy, DEFAULT_MAX_GENERATION_ATTEMPTS, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH,
};
use crate::error::{PortalError, PortalResult};
use crate::models::default_hourly_rate;

/// Highest hourly rate, in dollars, a configuration may set.
pub const MAX_HOURLY_RATE: u32 = 10_000;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the server listens on.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Payroll settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Hourly rate applied to every employee.
    pub hourly_rate: Decimal,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            hourly_rate: default_hourly_rate(),
        }
    }
}

/// Password strength and generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PasswordPolicyConfig {
    /// Shortest accepted password.
    pub min_length: usize,
    /// Longest accepted password.
    pub max_length: usize,
    /// Candidates sampled before generation fails.
    pub max_generation_attempts: u32,
}

impl Default for PasswordPolicyConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            max_generation_attempts: DEFAULT_MAX_GENERATION_ATTEMPTS,
        }
    }
}

/// The complete portal configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Server settings.
    pub server: ServerConfig,
    /// Payroll settings.
    pub payroll: PayrollConfig,
    /// Password policy settings.
    pub password_policy: PasswordPolicyConfig,
}

impl PortalConfig {
    /// Builds the credential policy described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the password bounds are unusable.
    pub fn credential_policy(&self) -> PortalResult<CredentialPolicy> {
        CredentialPolicy::new(
            self.password_policy.min_length,
            self.password_policy.max_length,
            self.password_policy.max_generation_attempts,
        )
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` describing the first problem found. The hourly
    /// rate must lie within `[0, MAX_HOURLY_RATE]`.
    pub fn validate(&self) -> PortalResult<()> {
        if self.payroll.hourly_rate < Decimal::ZERO {
            return Err(PortalError::InvalidConfig {
                message: format!(
                    "hourly_rate must not be negative, got {}",
                    self.payroll.hourly_rate
                ),
            });
        }
        if self.payroll.hourly_rate > Decimal::from(MAX_HOURLY_RATE) {
            return Err(PortalError::InvalidConfig {
                message: format!(
                    "hourly_rate must be at most {}, got {}",
                    MAX_HOURLY_RATE, self.payroll.hourly_rate
                ),
            });
        }

        self.credential_policy()?;
        Ok(())
    }
}
