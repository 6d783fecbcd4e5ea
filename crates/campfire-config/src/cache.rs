//! Thread-safe configuration caching with arc-swap for lock-free reads.

use crate::loader::{ConfigError, ConfigLoader};
use crate::schema::Config;
use arc_swap::ArcSwap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Thread-safe configuration cache using arc-swap for lock-free reads.
pub struct ConfigCache {
    config: ArcSwap<Config>,
    source: Option<PathBuf>,
}

impl ConfigCache {
    /// Creates a new configuration cache with the given initial configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
            source: None,
        }
    }

    /// Creates a cache that remembers the file the configuration came from,
    /// so it can be reloaded later.
    pub fn with_source(config: Config, source: Option<PathBuf>) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
            source,
        }
    }

    /// Gets the current configuration.
    pub fn get(&self) -> Arc<Config> {
        self.config.load_full()
    }

    /// Updates the configuration atomically.
    pub fn update(&self, config: Config) {
        self.config.store(Arc::new(config));
    }

    /// File the configuration is reloaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Re-reads the source file and swaps the new configuration in. On any
    /// failure the current configuration stays in place.
    pub fn reload(&self) -> Result<Arc<Config>, ConfigError> {
        let config = match &self.source {
            Some(path) => ConfigLoader::load_config(path)?,
            None => ConfigLoader::load()?.0,
        };

        self.update(config);
        info!("Configuration reloaded");
        Ok(self.get())
    }
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
