//! mediabridge configuration
//!
//! Settings for the playback backend: logging, player timing defaults and
//! the external chapter probe. Each section implements `ConfigSection`.
//!
//! - **Graceful degradation**: invalid values in a loaded file only warn
//! - **Atomic writes**: config files are never left half written
//!
//! # Example
//!
//! ```rust,no_run
//! use mediabridge_config::{Config, ConfigManager};
//!
//! let manager = ConfigManager::new().expect("Failed to initialize config");
//! let config = manager.load_or_default();
//!
//! println!("Tick interval: {}ms", config.player.tick_interval_ms);
//! ```

mod error;
mod file;
mod manager;
mod validation;

// Config sections
pub mod app_config;
mod player_config;
mod probe_config;

pub use error::{ConfigError, ConfigResult, ValidationError};
pub use manager::{apply_env_overrides, ConfigManager, ENV_PREFIX};
pub use validation::{ConfigSection, Validator};

// Re-export config sections
pub use app_config::{AppConfig, LogLevel};
pub use player_config::PlayerConfig;
pub use probe_config::{ProbeConfig, ProbeMode};

use serde::{Deserialize, Serialize};

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Application-level settings
    pub app: AppConfig,

    /// Playback timing defaults for new media objects
    pub player: PlayerConfig,

    /// External chapter probe
    pub probe: ProbeConfig,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks every section, returning all problems at once
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<_> = [
            self.app.validate(),
            self.player.validate(),
            self.probe.validate(),
        ]
        .into_iter()
        .filter_map(Result::err)
        .flatten()
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            app: AppConfig::default(),
            player: PlayerConfig::default(),
            probe: ProbeConfig::default(),
        }
    }
}
