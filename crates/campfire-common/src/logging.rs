//! Structured logging infrastructure for Campfire.

use crate::{CampfireError, Result};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "campfire_help=debug"). `RUST_LOG` wins
    /// when set.
    pub level: String,
    /// Whether to emit JSON lines instead of human-readable output.
    pub json_format: bool,
    /// Directory for daily-rolling log files, if file output is wanted.
    pub directory: Option<PathBuf>,
    /// File name prefix used inside `directory`.
    pub file_name: String,
    /// Whether to include target module information.
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            directory: None,
            file_name: "campfire.log".to_string(),
            include_targets: true,
        }
    }
}

/// Installs the global tracing subscriber.
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for as long as the process logs to a file.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| CampfireError::config(format!("invalid log level `{}`: {e}", config.level)))?;

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, &config.file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(config.include_targets)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    let installed = if config.json_format {
        registry
            .with(fmt::layer().json().with_target(config.include_targets))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(config.include_targets))
            .try_init()
    };

    installed.map_err(|e| CampfireError::config(format!("failed to install subscriber: {e}")))?;
    Ok(guard)
}
