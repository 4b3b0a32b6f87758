//! Locating, loading and saving the mediabridge config file

use crate::{file, Config, ConfigError, ConfigResult, LogLevel, ProbeMode, CONFIG_VERSION};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Prefix of environment variables that override file values
pub const ENV_PREFIX: &str = "MEDIABRIDGE";

const FILE_NAME: &str = "config.toml";

/// Owns the location of config.toml
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Uses the platform config directory
    ///
    /// - Linux: `~/.config/mediabridge/`
    /// - macOS: `~/Library/Application Support/mediabridge/`
    /// - Windows: `%APPDATA%\mediabridge\`
    pub fn new() -> ConfigResult<Self> {
        let dirs = ProjectDirs::from("", "", "mediabridge").ok_or(ConfigError::NoConfigDir)?;
        Self::with_directory(dirs.config_dir().to_path_buf())
    }

    pub fn with_directory(config_dir: PathBuf) -> ConfigResult<Self> {
        Ok(Self {
            config_path: config_dir.join(FILE_NAME),
        })
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_path.clone()
    }

    /// Loads the configuration file
    ///
    /// A missing file yields the defaults and a broken one is an error.
    /// Out-of-range values are only logged so a hand edit never stops playback.
    pub fn load(&self) -> ConfigResult<Config> {
        let Some(config) = file::read(&self.config_path)? else {
            log::info!(
                "No config at {}, using defaults",
                self.config_path.display()
            );
            return Ok(Config::default());
        };

        if config.version != CONFIG_VERSION {
            log::warn!(
                "{} has version {}, expected {}",
                self.config_path.display(),
                config.version,
                CONFIG_VERSION
            );
        }
        if let Err(errors) = config.validate() {
            for error in &errors {
                log::warn!("{}: {}", self.config_path.display(), error);
            }
        }
        Ok(config)
    }

    pub fn load_or_default(&self) -> Config {
        self.load().unwrap_or_else(|e| {
            log::warn!("{}, using defaults", e);
            Config::default()
        })
    }

    /// Saves the configuration; invalid values are refused
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        config.validate().map_err(ConfigError::Invalid)?;
        file::write(&self.config_path, config)?;
        log::info!("Saved config to {}", self.config_path.display());
        Ok(())
    }

    /// Loads the config, applies `update_fn` and saves the result
    ///
    /// ```rust,no_run
    /// # use mediabridge_config::ConfigManager;
    /// # let manager = ConfigManager::new().unwrap();
    /// manager.update(|config| {
    ///     config.player.tick_interval_ms = 250;
    /// }).expect("Failed to update config");
    /// ```
    pub fn update<F>(&self, update_fn: F) -> ConfigResult<()>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.load()?;
        update_fn(&mut config);
        self.save(&config)
    }

    /// Writes the defaults unless a config file exists; true when written
    pub fn initialize(&self) -> ConfigResult<bool> {
        if self.config_path.exists() {
            return Ok(false);
        }
        self.save(&Config::default())?;
        Ok(true)
    }

    pub fn reset(&self) -> ConfigResult<()> {
        self.save(&Config::default())
    }

    /// Problems in the current file, one message each; empty when valid
    pub fn validate(&self) -> ConfigResult<Vec<String>> {
        let config = self.load()?;
        Ok(config
            .validate()
            .err()
            .unwrap_or_default()
            .iter()
            .map(ToString::to_string)
            .collect())
    }

    /// Loads the config and applies `MEDIABRIDGE_SECTION_FIELD` overrides
    pub fn load_with_env_overrides(&self) -> ConfigResult<Config> {
        let mut config = self.load()?;
        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        Ok(config)
    }
}

/// Applies overrides looked up through `lookup` (usually the process environment)
///
/// Unparseable values are ignored with a warning; the result is validated
/// and problems are only logged.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(&format!("{}_{}", ENV_PREFIX, name));

    if let Some(level) = var("APP_LOG_LEVEL") {
        match level.parse::<LogLevel>() {
            Ok(level) => config.app.log_level = level,
            Err(e) => log::warn!("Ignoring log level override: {}", e),
        }
    }

    if let Some(debug) = var("APP_DEBUG_MODE") {
        match debug.parse::<bool>() {
            Ok(debug) => config.app.debug_mode = debug,
            Err(_) => log::warn!("Ignoring debug mode override '{}'", debug),
        }
    }

    override_number(&var, "PLAYER_TICK_INTERVAL_MS", &mut config.player.tick_interval_ms);
    override_number(&var, "PLAYER_PREFINISH_MARK_MS", &mut config.player.prefinish_mark_ms);
    override_number(
        &var,
        "PLAYER_TRANSITION_TIME_MS",
        &mut config.player.transition_time_ms,
    );
    override_number(
        &var,
        "PLAYER_ABOUT_TO_FINISH_MS",
        &mut config.player.about_to_finish_ms,
    );

    if let Some(program) = var("PROBE_PROGRAM") {
        config.probe.program = program;
    }

    if let Some(mode) = var("PROBE_MODE") {
        match mode.trim().to_ascii_lowercase().as_str() {
            "blocking" => config.probe.mode = ProbeMode::Blocking,
            "background" => config.probe.mode = ProbeMode::Background,
            other => log::warn!("Ignoring probe mode override '{}'", other),
        }
    }

    if let Err(errors) = config.validate() {
        for error in &errors {
            log::warn!("After {}_* overrides: {}", ENV_PREFIX, error);
        }
    }
}

fn override_number<T, F>(var: &F, name: &str, target: &mut T)
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = var(name) {
        match raw.trim().parse::<T>() {
            Ok(value) => *target = value,
            Err(_) => log::warn!("Ignoring {}_{} override '{}'", ENV_PREFIX, name, raw),
        }
    }
}
