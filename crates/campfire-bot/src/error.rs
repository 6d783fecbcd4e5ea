//! Errors that stop the bot from starting or keep it from staying online.

use campfire_common::CampfireError;
use campfire_config::ConfigError;
use poise::serenity_prelude as serenity;

/// Startup and runtime failures of the binary.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Config loading, validation or logging setup failed.
    #[error("Configuration error: {0}")]
    Config(#[from] CampfireError),

    /// The gateway connection failed or dropped.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    /// The serenity client could not be built around the framework.
    #[error("Client setup failed: {0}")]
    ClientSetup(String),
}

impl From<ConfigError> for BotError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.into())
    }
}

/// Result alias used by `main`.
pub type BotResult<T> = Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_conversion() {
        let err: BotError = ConfigError::ValidationError(CampfireError::validation(
            "Discord token must not be empty",
            "discord.token",
        ))
        .into();
        assert!(matches!(err, BotError::Config(CampfireError::Validation { .. })));
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
