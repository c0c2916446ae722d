//! Configuration loading and management for the working-time engine.
//!
//! This module provides the pause rules that every calculation takes as an
//! explicit argument, loading them from a YAML settings file, and the
//! environment-driven server configuration.
//!
//! # Example
//!
//! ```no_run
//! use worktime_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Short pause: {} min", config.pause_rules().short_pause_minutes);
//! ```

mod loader;
mod server;
mod types;

pub use loader::ConfigLoader;
pub use server::ServerConfig;
pub use types::{
    DEFAULT_LONG_PAUSE_MINUTES, DEFAULT_PAUSE_THRESHOLD_MINUTES, DEFAULT_SHORT_PAUSE_MINUTES,
    PauseRules, SettingsFile,
};
