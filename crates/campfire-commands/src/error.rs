//! Command errors and the framework-wide error handler.

use crate::embeds::send_error;
use crate::framework::{Data, Error};
use campfire_i18n::{keys, Messages};
use poise::serenity_prelude as serenity;
use tracing::{error, warn};

/// Failures raised by command bodies.
#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    /// The invoking member could not be resolved.
    #[error("the invoking member could not be resolved")]
    MemberUnavailable,

    /// A guild-only command ran outside a guild.
    #[error("this command can only be used in a server")]
    NotInGuild,

    /// A member tried to vote on their own reputation.
    #[error("members cannot vote on themselves")]
    SelfVote,
}

fn permission_names(permissions: serenity::Permissions) -> String {
    permissions.get_permission_names().join(", ")
}

/// The text shown to the user for `error`, or `None` when the error is a
/// fault that should only be logged.
pub fn user_message(error: &poise::FrameworkError<'_, Data, Error>, messages: &Messages) -> Option<String> {
    match error {
        poise::FrameworkError::ArgumentParse { input: None, .. } => {
            Some(messages.get(keys::ERROR_UNKNOWN_ARGUMENT))
        }
        poise::FrameworkError::ArgumentParse { error, .. } => Some(
            messages.get_with_args(keys::ERROR_INVALID_ARGUMENT, &[("reason", &error.to_string())]),
        ),
        poise::FrameworkError::MissingUserPermissions {
            missing_permissions: Some(missing),
            ..
        } => Some(messages.get_with_args(
            keys::ERROR_MISSING_PERMISSIONS,
            &[("permissions", &permission_names(*missing))],
        )),
        poise::FrameworkError::MissingBotPermissions {
            missing_permissions, ..
        } => Some(messages.get_with_args(
            keys::ERROR_BOT_MISSING_PERMISSIONS,
            &[("permissions", &permission_names(*missing_permissions))],
        )),
        poise::FrameworkError::GuildOnly { .. } => Some(messages.get(keys::ERROR_GUILD_ONLY)),
        poise::FrameworkError::NotAnOwner { .. } => Some(messages.get(keys::ERROR_OWNERS_ONLY)),
        poise::FrameworkError::CooldownHit {
            remaining_cooldown, ..
        } => Some(messages.get_with_args(
            keys::ERROR_COOLDOWN,
            &[("seconds", &remaining_cooldown.as_secs().max(1).to_string())],
        )),
        poise::FrameworkError::CommandCheckFailed { error: None, .. } => {
            Some(messages.get(keys::ERROR_GENERIC))
        }
        poise::FrameworkError::Command { error, .. } => command_error_message(error.as_ref(), messages),
        _ => None,
    }
}

fn command_error_message(
    error: &(dyn std::error::Error + Send + Sync + 'static),
    messages: &Messages,
) -> Option<String> {
    match error.downcast_ref::<CommandError>()? {
        CommandError::NotInGuild => Some(messages.get(keys::ERROR_GUILD_ONLY)),
        CommandError::MemberUnavailable => Some(messages.get(keys::ERROR_GENERIC)),
        CommandError::SelfVote => Some(messages.get(keys::ERROR_SELF_VOTE)),
    }
}

/// Handles every framework error: user mistakes become a short error embed,
/// everything else is logged and passed to poise's default handler.
pub async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    if let Some(ctx) = error.ctx() {
        if let Some(message) = user_message(&error, &ctx.data().messages) {
            if let Err(e) = send_error(ctx, &message).await {
                warn!(command = %ctx.command().qualified_name, "Failed to send error reply: {e}");
            }
            return;
        }
    }

    if let poise::FrameworkError::Command { error, ctx, .. } = &error {
        error!(command = %ctx.command().qualified_name, "Command failed: {error}");
    } else {
        error!("Framework error: {error}");
    }

    if let Err(e) = poise::builtins::on_error(error).await {
        error!("Error while handling error: {e}");
    }
}
