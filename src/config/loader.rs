//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading portal
//! settings from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AttendanceSettings, LayoutSettings};

/// Loads and provides access to the portal configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides the attendance and layout settings the engines take as
/// parameters.
///
/// # Directory Structure
///
/// ```text
/// config/portal/
/// ├── attendance.yaml  # Per-role start times and exemption list
/// └── layout.yaml      # Page budgets and block unit heights
/// ```
///
/// # Example
///
/// ```no_run
/// use portal_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/portal").unwrap();
/// assert!(loader.attendance().start_time_for("sales").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    attendance: AttendanceSettings,
    layout: LayoutSettings,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/portal")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if either
    /// file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let attendance = Self::load_yaml::<AttendanceSettings>(&path.join("attendance.yaml"))?;
        let layout = Self::load_yaml::<LayoutSettings>(&path.join("layout.yaml"))?;

        Ok(Self { attendance, layout })
    }

    /// Builds a loader from already-constructed settings, for tests and
    /// embedded use.
    pub fn from_settings(attendance: AttendanceSettings, layout: LayoutSettings) -> Self {
        Self { attendance, layout }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the attendance settings.
    pub fn attendance(&self) -> &AttendanceSettings {
        &self.attendance
    }

    /// Returns the layout settings.
    pub fn layout(&self) -> &LayoutSettings {
        &self.layout
    }
}
