//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the pause
//! rules from a YAML settings file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PauseRules, SettingsFile};

/// Loads and provides access to engine settings.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── settings.yaml   # Pause rules
/// ```
///
/// # Example
///
/// ```no_run
/// use worktime_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Pause threshold: {} min", loader.pause_rules().threshold_minutes);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    pause_rules: PauseRules,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns `ConfigNotFound` if `settings.yaml` is missing and
    /// `ConfigParseError` if it is not valid YAML for [`SettingsFile`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let settings_path = path.as_ref().join("settings.yaml");
        let settings = Self::load_yaml::<SettingsFile>(&settings_path)?;

        Ok(Self {
            pause_rules: settings.pause_rules,
        })
    }

    /// Builds a loader from already known rules, e.g. when no settings file exists.
    pub fn from_rules(pause_rules: PauseRules) -> Self {
        Self { pause_rules }
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

    /// Returns the configured pause rules.
    pub fn pause_rules(&self) -> &PauseRules {
        &self.pause_rules
    }

    /// Consumes the loader, returning the pause rules.
    pub fn into_pause_rules(self) -> PauseRules {
        self.pause_rules
    }
}
