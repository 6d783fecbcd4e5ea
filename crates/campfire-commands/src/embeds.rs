//! Embed builders shared by every command.

use crate::framework::{Context, Error};
use campfire_common::{truncate_string, EMBED_DESCRIPTION_LIMIT, EMBED_FIELD_VALUE_LIMIT};
use campfire_config::EmbedConfig;
use campfire_help::Page;
use poise::serenity_prelude as serenity;
use std::time::Duration;
use tracing::warn;

const EMBED_TITLE_LIMIT: usize = 256;
const EMBED_FIELD_NAME_LIMIT: usize = 256;
const EMBED_FOOTER_LIMIT: usize = 2048;

/// Converts a help page into an embed, clamping every part to Discord's
/// limits.
pub fn page_embed(page: &Page) -> serenity::CreateEmbed {
    let metadata = &page.metadata;
    let mut embed = serenity::CreateEmbed::new()
        .colour(metadata.colour)
        .timestamp(serenity::Timestamp::now());

    if let Some(title) = &page.title {
        embed = embed.title(truncate_string(title, EMBED_TITLE_LIMIT));
    }
    if let Some(description) = &metadata.description {
        embed = embed.description(truncate_string(description, EMBED_DESCRIPTION_LIMIT));
    }
    if let Some(author) = &metadata.author {
        let mut builder = serenity::CreateEmbedAuthor::new(&author.name);
        if let Some(icon) = &author.icon_url {
            builder = builder.icon_url(icon);
        }
        embed = embed.author(builder);
    }
    if let Some(footer) = &metadata.footer {
        let mut builder = serenity::CreateEmbedFooter::new(truncate_string(&footer.text, EMBED_FOOTER_LIMIT));
        if let Some(icon) = &footer.icon_url {
            builder = builder.icon_url(icon);
        }
        embed = embed.footer(builder);
    }

    embed.fields(page.blocks.iter().map(|block| {
        (
            truncate_string(&block.title, EMBED_FIELD_NAME_LIMIT),
            truncate_string(&block.body, EMBED_FIELD_VALUE_LIMIT),
            block.inline,
        )
    }))
}

/// Orange embed with the bot as author.
pub fn info_embed(
    settings: &EmbedConfig,
    title: impl Into<String>,
    description: impl Into<String>,
    bot_icon: &str,
) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title)
        .description(description)
        .colour(settings.info_colour)
        .timestamp(serenity::Timestamp::now())
        .author(serenity::CreateEmbedAuthor::new(&settings.bot_name).icon_url(bot_icon))
}

/// Red embed with the bot as author.
pub fn error_embed(settings: &EmbedConfig, description: impl Into<String>, bot_icon: &str) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .description(description)
        .colour(settings.error_colour)
        .timestamp(serenity::Timestamp::now())
        .author(serenity::CreateEmbedAuthor::new(&settings.bot_name).icon_url(bot_icon))
}

/// Avatar URL of the bot user.
pub fn bot_icon(ctx: Context<'_>) -> String {
    ctx.cache().current_user().face()
}

/// What happens to the messages around an error reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCleanup {
    /// Delete the message that invoked the command.
    pub delete_invocation: bool,
    /// Delete the error reply after this long.
    pub delete_reply_after: Option<Duration>,
}

impl ErrorCleanup {
    /// Slash replies are ephemeral and need no cleanup. Prefix replies are
    /// deleted after `error_delete_delay_seconds` unless it is zero, and the
    /// invoking message is removed when the command ran in a guild.
    pub fn plan(settings: &EmbedConfig, is_prefix: bool, in_guild: bool) -> Self {
        if !is_prefix {
            return Self {
                delete_invocation: false,
                delete_reply_after: None,
            };
        }
        Self {
            delete_invocation: in_guild,
            delete_reply_after: (settings.error_delete_delay_seconds > 0)
                .then(|| Duration::from_secs(settings.error_delete_delay_seconds)),
        }
    }
}

/// Sends an error embed. Slash invocations get an ephemeral reply; prefix
/// invocations are cleaned up as [`ErrorCleanup::plan`] decides.
pub async fn send_error(ctx: Context<'_>, description: &str) -> Result<(), Error> {
    let settings = ctx.data().config.get().embeds.clone();
    let embed = error_embed(&settings, description, &bot_icon(ctx));
    let handle = ctx
        .send(poise::CreateReply::default().embed(embed).ephemeral(true))
        .await?;

    let poise::Context::Prefix(prefix_ctx) = ctx else {
        return Ok(());
    };
    let cleanup = ErrorCleanup::plan(&settings, true, ctx.guild_id().is_some());
    let http = ctx.serenity_context().http.clone();

    if cleanup.delete_invocation {
        let invocation = prefix_ctx.msg;
        if let Err(e) = invocation.channel_id.delete_message(&http, invocation.id).await {
            warn!(message_id = %invocation.id, "Failed to delete invoking message: {e}");
        }
    }

    if let Some(delay) = cleanup.delete_reply_after {
        let message = handle.into_message().await?;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = message.channel_id.delete_message(&http, message.id).await {
                warn!(message_id = %message.id, "Failed to delete error reply: {e}");
            }
        });
    }
    Ok(())
}
