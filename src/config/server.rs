//! Server configuration loaded from environment variables.

use std::path::PathBuf;

/// Settings for the HTTP server binary.
///
/// All fields have defaults suitable for running next to the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Directory holding `settings.yaml` (default: `./config/default`).
    pub config_dir: PathBuf,
    /// JSON file the ledger is persisted to (default: `worktime_data.json`).
    pub data_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            config_dir: PathBuf::from("./config/default"),
            data_file: PathBuf::from("worktime_data.json"),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default              |
    /// |-----------------------|----------------------|
    /// | `HOST`                | `127.0.0.1`          |
    /// | `PORT`                | `3000`               |
    /// | `WORKTIME_CONFIG_DIR` | `./config/default`   |
    /// | `WORKTIME_DATA_FILE`  | `worktime_data.json` |
    ///
    /// An unparsable `PORT` falls back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|port| port.parse().ok())
                .unwrap_or(defaults.port),
            config_dir: lookup("WORKTIME_CONFIG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.config_dir),
            data_file: lookup("WORKTIME_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
        }
    }

    /// The `host:port` string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
