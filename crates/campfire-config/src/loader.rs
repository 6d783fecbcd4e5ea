//! Configuration loading utilities.

use crate::Config;
use campfire_common::CampfireError;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_VAR: &str = "CAMPFIRE_CONFIG_PATH";

/// Files probed, in order, when no explicit path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["config.yaml", "config.yml"];

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file.
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error.
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[source] CampfireError),

    /// Environment variable parsing error.
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name.
        var: String,
        /// Parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for CampfireError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ValidationError(inner) => inner,
            ConfigError::IoError(io) => Self::Io(io),
            other => Self::config(other.to_string()),
        }
    }
}

/// Configuration loader for the application.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Finds the config file to use: `CAMPFIRE_CONFIG_PATH`, else the first
    /// of the default files that exists.
    pub fn resolve_path() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_VAR) {
            return Some(PathBuf::from(path));
        }

        DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Loads configuration: from the resolved file when there is one,
    /// otherwise from defaults. Environment overrides apply either way.
    pub fn load() -> Result<(Config, Option<PathBuf>), ConfigError> {
        let path = Self::resolve_path();
        let config = match &path {
            Some(path) => Self::load_config(path)?,
            None => {
                info!("No configuration file found, using defaults");
                let mut config = Config::default();
                Self::apply_env_overrides(&mut config)?;
                config.validate().map_err(ConfigError::ValidationError)?;
                config
            }
        };

        Ok((config, path))
    }

    /// Load configuration from a YAML file with environment variable overrides.
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading configuration");

        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        Self::apply_env_overrides(&mut config)?;
        config.validate().map_err(ConfigError::ValidationError)?;

        info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Parses YAML without applying overrides or validating.
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply environment variable overrides to configuration.
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Applies overrides read through `lookup`, which maps a variable name to
    /// its value.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("DISCORD_TOKEN") {
            config.discord.token = token;
        }

        if let Some(prefixes) = lookup("CAMPFIRE_PREFIXES") {
            // Prefixes keep their trailing space, so only empty entries go.
            config.discord.prefixes = prefixes
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(level) = lookup("CAMPFIRE_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(per_page) = lookup("CAMPFIRE_PLUGINS_PER_PAGE") {
            config.help.plugins_per_page =
                per_page.trim().parse().map_err(|e| ConfigError::EnvParseError {
                    var: "CAMPFIRE_PLUGINS_PER_PAGE".to_string(),
                    source: Box::new(e),
                })?;
        }

        Ok(())
    }
}
