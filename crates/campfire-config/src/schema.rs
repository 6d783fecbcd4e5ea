//! Configuration schema definitions using serde.

use campfire_common::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Main configuration structure for Campfire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discord connection and prefix configuration.
    pub discord: DiscordConfig,
    /// Help command configuration.
    pub help: HelpConfig,
    /// Embed styling configuration.
    pub embeds: EmbedConfig,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

/// Discord bot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: String,
    /// Text prefixes accepted for prefix commands, e.g. `"camp "`.
    pub prefixes: Vec<String>,
    /// Whether mentioning the bot works as a prefix.
    pub mention_as_prefix: bool,
    /// "Watching ..." activity text shown in the member list.
    pub activity: Option<String>,
    /// Online status set on ready.
    pub status: PresenceStatus,
    /// User ids allowed to run owner-only commands.
    pub owners: Vec<u64>,
}

/// Presence status of the bot user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    /// Green dot.
    Online,
    /// Moon.
    Idle,
    /// Do not disturb.
    Dnd,
    /// Shown as offline.
    Invisible,
}

/// Help command configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    /// Number of plugin fields shown on each help page.
    pub plugins_per_page: usize,
    /// Plugin names never shown by the help command.
    pub hidden_categories: Vec<String>,
    /// How long the page buttons stay active.
    pub paginator_timeout_seconds: u64,
}

impl HelpConfig {
    /// Page size as a non-zero value; a zero (which validation rejects)
    /// falls back to one plugin per page.
    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.plugins_per_page).unwrap_or(NonZeroUsize::MIN)
    }
}

/// Embed styling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    /// Name shown as the embed author.
    pub bot_name: String,
    /// Colour of informational embeds.
    pub info_colour: u32,
    /// Colour of error embeds.
    pub error_colour: u32,
    /// Seconds before an error reply to a prefix command is deleted.
    /// Zero keeps the reply.
    pub error_delete_delay_seconds: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level filter.
    pub level: String,
    /// Emit JSON lines.
    pub json_format: bool,
    /// Directory for rolling log files.
    pub directory: Option<PathBuf>,
}

impl LoggingSettings {
    /// Converts to the subscriber configuration understood by
    /// `campfire_common::logging`.
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            json_format: self.json_format,
            directory: self.directory.clone(),
            ..LoggingConfig::default()
        }
    }
}

impl Config {
    /// Validates the configuration, returning the first problem found.
    pub fn validate(&self) -> campfire_common::Result<()> {
        crate::validator::ConfigValidator::validate(self)
    }
}
