//! The help command.

use crate::embeds::bot_icon;
use crate::framework::{Context, Error};
use crate::registry::PoiseRegistry;
use crate::responder::EmbedResponder;
use campfire_config::Config;
use campfire_help::{handle_help, HelpContext, HelpRenderer, HelpRequest, HelpSettings};
use std::sync::Arc;
use std::time::Duration;

/// Shows the commands of the bot, a plugin, or a single command.
#[poise::command(prefix_command, slash_command, hide_in_help, track_edits)]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Plugin or command to show help for"]
    #[rest]
    query: Option<String>,
) -> Result<(), Error> {
    let config = ctx.data().config.get();
    let renderer = HelpRenderer::new(
        HelpSettings::from_config(&config),
        Arc::clone(&ctx.data().messages),
    );
    let registry = PoiseRegistry::new(&ctx.framework().options().commands).snapshot();
    let request = HelpRequest::resolve(&registry, query.as_deref());
    let help_ctx = help_context(ctx, &config);
    let responder = EmbedResponder::new(
        ctx,
        Duration::from_secs(config.help.paginator_timeout_seconds),
    );

    handle_help(&renderer, &registry, &request, &help_ctx, &responder).await
}

fn help_context(ctx: Context<'_>, config: &Config) -> HelpContext {
    let prefixes = match ctx {
        poise::Context::Application(_) => vec!["/".to_string()],
        poise::Context::Prefix(_) => config.discord.prefixes.clone(),
    };

    HelpContext {
        requester: ctx.author().tag(),
        requester_icon: Some(ctx.author().face()),
        bot_icon: Some(bot_icon(ctx)),
        prefixes,
    }
}
