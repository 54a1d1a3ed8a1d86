//! Application state for the employee portal API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::directory::EmployeeDirectory;

/// Shared application state.
///
/// Holds the employee directory every handler operates on.
#[derive(Clone)]
pub struct AppState {
    directory: Arc<EmployeeDirectory>,
}

impl AppState {
    /// Creates a new application state around an existing directory.
    pub fn new(directory: EmployeeDirectory) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }

    /// Creates a new application state with an empty directory configured
    /// from the loaded settings.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(EmployeeDirectory::from_config(config))
    }

    /// Returns a reference to the employee directory.
    pub fn directory(&self) -> &EmployeeDirectory {
        &self.directory
    }
}
