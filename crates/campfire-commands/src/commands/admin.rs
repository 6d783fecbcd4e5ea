//! Admin plugin: owner-only maintenance commands. Hidden from help.

use crate::embeds::send_error;
use crate::framework::{Context, Error};
use campfire_i18n::keys;
use tracing::{info, warn};

/// Registers or unregisters application commands.
#[poise::command(prefix_command, owners_only, category = "Admin")]
pub async fn register(ctx: Context<'_>) -> Result<(), Error> {
    poise::builtins::register_application_commands_buttons(ctx).await?;
    Ok(())
}

/// Reloads the configuration file.
#[poise::command(prefix_command, slash_command, owners_only, category = "Admin")]
pub async fn reload(ctx: Context<'_>) -> Result<(), Error> {
    let data = ctx.data();
    match data.config.reload() {
        Ok(_) => {
            info!(source = ?data.config.source(), "Configuration reloaded by {}", ctx.author().id);
            ctx.say(data.messages.get(keys::ADMIN_RELOADED)).await?;
        }
        Err(e) => {
            warn!("Configuration reload failed: {e}");
            let text = data
                .messages
                .get_with_args(keys::ADMIN_RELOAD_FAILED, &[("reason", &e.to_string())]);
            send_error(ctx, &text).await?;
        }
    }
    Ok(())
}
