//! Runtime validation of a loaded configuration.

use crate::schema::Config;
use campfire_common::{CampfireError, Result};

/// Largest value an embed colour may take.
const MAX_COLOUR: u32 = 0x00FF_FFFF;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, failing on the first problem.
    pub fn validate(config: &Config) -> Result<()> {
        match Self::issues(config).into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        }
    }

    /// Collects every problem with the configuration.
    pub fn issues(config: &Config) -> Vec<CampfireError> {
        let mut issues = Vec::new();

        if config.discord.token.trim().is_empty() {
            issues.push(CampfireError::validation(
                "Discord token cannot be empty",
                "discord.token",
            ));
        }

        if config.discord.prefixes.iter().any(|p| p.trim().is_empty()) {
            issues.push(CampfireError::validation(
                "Command prefixes cannot be blank",
                "discord.prefixes",
            ));
        }

        if config.discord.prefixes.is_empty() && !config.discord.mention_as_prefix {
            issues.push(CampfireError::validation(
                "At least one prefix is required when mentions are disabled",
                "discord.prefixes",
            ));
        }

        if config.help.plugins_per_page == 0 {
            issues.push(CampfireError::validation(
                "Help pages must hold at least one plugin",
                "help.plugins_per_page",
            ));
        }

        for (field, colour) in [
            ("embeds.info_colour", config.embeds.info_colour),
            ("embeds.error_colour", config.embeds.error_colour),
        ] {
            if colour > MAX_COLOUR {
                issues.push(CampfireError::validation(
                    format!("Colour {colour:#X} is not a 24-bit RGB value"),
                    field,
                ));
            }
        }

        if config.embeds.bot_name.trim().is_empty() {
            issues.push(CampfireError::validation(
                "Bot name cannot be empty",
                "embeds.bot_name",
            ));
        }

        issues
    }
}
