//! Core bot logic using the Poise framework.

use crate::error::{BotError, BotResult};
use campfire_commands::{create_framework, Data};
use campfire_config::{ConfigCache, DiscordConfig, PresenceStatus};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::info;

/// Main bot structure.
pub struct CampfireBot {
    config: Arc<ConfigCache>,
}

impl CampfireBot {
    /// Creates a new bot instance.
    pub fn new(config: ConfigCache) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Shared configuration cache.
    pub fn config(&self) -> Arc<ConfigCache> {
        Arc::clone(&self.config)
    }

    /// Connects to Discord and runs until the gateway shuts down.
    pub async fn start(&self) -> BotResult<()> {
        let config = self.config.get();
        let cache_clone = Arc::clone(&self.config);

        let framework = create_framework(&config)
            .setup(move |ctx, ready, framework| {
                let cache = Arc::clone(&cache_clone);
                Box::pin(async move {
                    info!(user = %ready.user.name, guilds = ready.guilds.len(), "Connected to Discord");
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                    Ok(Data::new(cache))
                })
            })
            .build();

        let (activity, status) = presence(&config.discord);
        let mut builder = serenity::ClientBuilder::new(&config.discord.token, intents())
            .framework(framework)
            .status(status);
        if let Some(activity) = activity {
            builder = builder.activity(activity);
        }

        let mut client = builder
            .await
            .map_err(|e| BotError::ClientSetup(e.to_string()))?;

        client.start().await?;
        Ok(())
    }
}

/// Gateway intents: everything non-privileged plus message content for
/// prefix commands.
pub fn intents() -> serenity::GatewayIntents {
    serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT
}

/// "Watching {activity}" and the configured online status.
pub fn presence(config: &DiscordConfig) -> (Option<serenity::ActivityData>, serenity::OnlineStatus) {
    let activity = config
        .activity
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .map(serenity::ActivityData::watching);

    let status = match config.status {
        PresenceStatus::Online => serenity::OnlineStatus::Online,
        PresenceStatus::Idle => serenity::OnlineStatus::Idle,
        PresenceStatus::Dnd => serenity::OnlineStatus::DoNotDisturb,
        PresenceStatus::Invisible => serenity::OnlineStatus::Invisible,
    };

    (activity, status)
}
