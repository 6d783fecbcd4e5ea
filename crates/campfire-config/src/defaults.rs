//! Default values matching the bot's stock behaviour.

use crate::schema::*;

/// Colour of informational embeds (orange).
pub const DEFAULT_INFO_COLOUR: u32 = 0x00E6_7E22;

/// Colour of error embeds (red).
pub const DEFAULT_ERROR_COLOUR: u32 = 0x00E7_4C3C;

/// Seconds before an error reply is removed.
pub const DEFAULT_ERROR_DELETE_DELAY: u64 = 10;

/// Category hidden from the help command by default.
pub const ADMIN_CATEGORY: &str = "Admin";

impl Default for Config {
    fn default() -> Self {
        Self {
            discord: DiscordConfig::default(),
            help: HelpConfig::default(),
            embeds: EmbedConfig::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            prefixes: vec!["campfire ".to_string(), "camp ".to_string()],
            mention_as_prefix: true,
            activity: Some("over your servers!".to_string()),
            status: PresenceStatus::default(),
            owners: Vec::new(),
        }
    }
}

impl Default for PresenceStatus {
    fn default() -> Self {
        Self::Idle
    }
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            plugins_per_page: 1,
            hidden_categories: vec![ADMIN_CATEGORY.to_string()],
            paginator_timeout_seconds: 300,
        }
    }
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            bot_name: "Campfire".to_string(),
            info_colour: DEFAULT_INFO_COLOUR,
            error_colour: DEFAULT_ERROR_COLOUR,
            error_delete_delay_seconds: DEFAULT_ERROR_DELETE_DELAY,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            directory: None,
        }
    }
}
