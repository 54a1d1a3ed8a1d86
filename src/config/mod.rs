//! Configuration loading and management for the employee portal.
//!
//! This module loads the portal settings (server address, payroll rate and
//! password policy bounds) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use employee_portal::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/portal.yaml").unwrap();
//! println!("Hourly rate: {}", loader.config().payroll.hourly_rate);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{
    MAX_HOURLY_RATE, PasswordPolicyConfig, PayrollConfig, PortalConfig, ServerConfig,
};
