//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the portal
//! configuration from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::credentials::CredentialPolicy;
use crate::error::{PortalError, PortalResult};

use super::types::PortalConfig;

/// Path used when no configuration path is given.
pub const DEFAULT_CONFIG_PATH: &str = "./config/portal.yaml";

/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "PORTAL_CONFIG";

/// Loads and provides access to the portal configuration.
///
/// # File Format
///
/// ```text
/// server:
///   bind_address: "127.0.0.1:3000"
/// payroll:
///   hourly_rate: "12.00"
/// password_policy:
///   min_length: 8
///   max_length: 16
///   max_generation_attempts: 10000
/// ```
///
/// # Example
///
/// ```no_run
/// use employee_portal::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/portal.yaml")?;
/// let policy = loader.credential_policy();
/// println!("Passwords are {}-{} characters", policy.min_length(), policy.max_length());
/// # Ok::<(), employee_portal::error::PortalError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PortalConfig,
    policy: CredentialPolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - A value is unusable (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> PortalResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PortalError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Loads configuration from the path in `PORTAL_CONFIG`, falling back to
    /// [`DEFAULT_CONFIG_PATH`].
    pub fn load_from_env() -> PortalResult<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(path)
    }

    /// Parses configuration from YAML text.
    ///
    /// `origin` names the source in error messages.
    pub fn from_yaml_str(content: &str, origin: &str) -> PortalResult<Self> {
        let config: PortalConfig =
            serde_yaml::from_str(content).map_err(|e| PortalError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Self::from_config(config)
    }

    /// Wraps an in-memory configuration after validating it.
    pub fn from_config(config: PortalConfig) -> PortalResult<Self> {
        config.validate()?;
        let policy = config.credential_policy()?;
        Ok(Self { config, policy })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Returns the configured credential policy.
    pub fn credential_policy(&self) -> CredentialPolicy {
        self.policy
    }

    /// Returns the configured hourly rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.config.payroll.hourly_rate
    }

    /// Returns the address the server should bind to.
    pub fn bind_address(&self) -> &str {
        &self.config.server.bind_address
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            config: PortalConfig::default(),
            policy: CredentialPolicy::default(),
        }
    }
}
