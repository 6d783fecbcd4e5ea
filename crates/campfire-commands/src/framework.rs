//! Poise framework setup and command registration logic.

use crate::reputation::{InMemoryReputationStore, ReputationStore};
use campfire_config::{Config, ConfigCache};
use campfire_i18n::Messages;
use futures::future::BoxFuture;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::debug;

/// Application data accessible in all commands.
pub struct Data {
    /// Live configuration; swapped by the `reload` command.
    pub config: Arc<ConfigCache>,
    /// User-facing text.
    pub messages: Arc<Messages>,
    /// Global reputation counts shown on profiles.
    pub reputation: Arc<dyn ReputationStore>,
}

impl Data {
    /// Data backed by the embedded catalogue and an in-memory reputation
    /// store.
    pub fn new(config: Arc<ConfigCache>) -> Self {
        Self {
            config,
            messages: Messages::default_catalogue(),
            reputation: Arc::new(InMemoryReputationStore::new()),
        }
    }
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Every command the bot registers, in plugin order.
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        crate::commands::general::about(),
        crate::commands::general::profile(),
        crate::commands::general::upvote(),
        crate::commands::general::downvote(),
        crate::commands::moderation::kick(),
        crate::commands::moderation::ban(),
        crate::commands::moderation::unban(),
        crate::commands::admin::register(),
        crate::commands::admin::reload(),
        crate::commands::help::help(),
    ]
}

/// Framework options for `config`. Prefixes are re-read from the cache on
/// every message, so a reload takes effect immediately.
pub fn framework_options(config: &Config) -> poise::FrameworkOptions<Data, Error> {
    poise::FrameworkOptions {
        commands: commands(),
        owners: config
            .discord
            .owners
            .iter()
            .map(|&id| serenity::UserId::new(id))
            .collect(),
        on_error: |error| Box::pin(crate::error::on_error(error)),
        pre_command: |ctx| {
            Box::pin(async move {
                debug!(command = %ctx.command().qualified_name, user = %ctx.author().id, "Running command");
            })
        },
        prefix_options: poise::PrefixFrameworkOptions {
            stripped_dynamic_prefix: Some(strip_prefix),
            mention_as_prefix: config.discord.mention_as_prefix,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates a new Poise framework.
pub fn create_framework(config: &Config) -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(framework_options(config))
}

fn strip_prefix<'a>(
    _ctx: &'a serenity::Context,
    msg: &'a serenity::Message,
    data: &'a Data,
) -> BoxFuture<'a, Result<Option<(&'a str, &'a str)>, Error>> {
    Box::pin(async move {
        let config = data.config.get();
        Ok(split_prefix(&msg.content, &config.discord.prefixes))
    })
}

/// Splits `content` into `(prefix, rest)` using the longest matching prefix.
pub fn split_prefix<'c, S: AsRef<str>>(content: &'c str, prefixes: &[S]) -> Option<(&'c str, &'c str)> {
    prefixes
        .iter()
        .map(AsRef::as_ref)
        .filter(|prefix| !prefix.is_empty() && content.starts_with(prefix))
        .max_by_key(|prefix| prefix.len())
        .map(|prefix| content.split_at(prefix.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_prefix_longest_wins() {
        let prefixes = ["camp ", "campfire "];
        assert_eq!(split_prefix("campfire help", &prefixes), Some(("campfire ", "help")));
        assert_eq!(split_prefix("camp help kick", &prefixes), Some(("camp ", "help kick")));
    }

    #[test]
    fn test_split_prefix_no_match() {
        let prefixes = ["campfire ", "camp "];
        assert_eq!(split_prefix("campy help", &prefixes), None);
        assert_eq!(split_prefix("help", &prefixes), None);
        assert_eq!(split_prefix("help", &[""]), None);
    }

    #[test]
    fn test_options_carry_owners_and_commands() {
        let mut config = Config::default();
        config.discord.owners = vec![42];
        config.discord.mention_as_prefix = false;
        let options = framework_options(&config);

        assert!(options.owners.contains(&serenity::UserId::new(42)));
        assert!(!options.prefix_options.mention_as_prefix);
        assert_eq!(options.commands.len(), 10);
    }
}
