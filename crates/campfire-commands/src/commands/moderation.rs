//! Moderation plugin: kick, ban and unban.

use crate::embeds::send_error;
use crate::error::CommandError;
use crate::framework::{Context, Error};
use campfire_i18n::keys;
use poise::serenity_prelude as serenity;
use std::num::NonZeroU16;
use tracing::info;

/// Kicks a member from the server.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "KICK_MEMBERS",
    required_bot_permissions = "KICK_MEMBERS",
    category = "Moderation"
)]
pub async fn kick(
    ctx: Context<'_>,
    #[description = "The member to kick"] member: serenity::Member,
    #[description = "Why the member is kicked"]
    #[rest]
    reason: Option<String>,
) -> Result<(), Error> {
    match reason.as_deref() {
        Some(reason) => member.kick_with_reason(ctx, reason).await?,
        None => member.kick(ctx).await?,
    }
    info!(guild = %member.guild_id, member = %member.user.id, moderator = %ctx.author().id, "Member kicked");

    let text = ctx
        .data()
        .messages
        .get_with_args(keys::MODERATION_KICKED, &[("member", &member.user.tag())]);
    ctx.say(text).await?;
    Ok(())
}

/// Bans a member from the server.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "BAN_MEMBERS",
    required_bot_permissions = "BAN_MEMBERS",
    category = "Moderation"
)]
pub async fn ban(
    ctx: Context<'_>,
    #[description = "The member to ban"] member: serenity::Member,
    #[description = "Why the member is banned"]
    #[rest]
    reason: Option<String>,
) -> Result<(), Error> {
    match reason.as_deref() {
        Some(reason) => member.ban_with_reason(ctx, 0, reason).await?,
        None => member.ban(ctx, 0).await?,
    }
    info!(guild = %member.guild_id, member = %member.user.id, moderator = %ctx.author().id, "Member banned");

    let text = ctx
        .data()
        .messages
        .get_with_args(keys::MODERATION_BANNED, &[("member", &member.user.tag())]);
    ctx.say(text).await?;
    Ok(())
}

/// Unbans a user from the server.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "BAN_MEMBERS",
    required_bot_permissions = "BAN_MEMBERS",
    category = "Moderation"
)]
pub async fn unban(
    ctx: Context<'_>,
    #[description = "Name or name#discriminator of the banned user"] user: String,
    #[description = "Why the user is unbanned"]
    #[rest]
    reason: Option<String>,
) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or(CommandError::NotInGuild)?;
    let bans = guild_id.bans(ctx, None, None).await?;

    let Some(banned) = bans
        .into_iter()
        .map(|ban| ban.user)
        .find(|banned| matches_ban_tag(&banned.name, banned.discriminator, &user))
    else {
        let text = ctx
            .data()
            .messages
            .get_with_args(keys::MODERATION_NOT_BANNED, &[("name", &user)]);
        return send_error(ctx, &text).await;
    };

    guild_id.unban(ctx, banned.id).await?;
    info!(
        guild = %guild_id,
        user = %banned.id,
        moderator = %ctx.author().id,
        reason = reason.as_deref().unwrap_or("none"),
        "User unbanned"
    );

    let text = ctx
        .data()
        .messages
        .get_with_args(keys::MODERATION_UNBANNED, &[("user", &banned.tag())]);
    ctx.say(text).await?;
    Ok(())
}

/// Whether a banned user called `name` with `discriminator` answers to
/// `query`, given either as `name` or `name#discriminator`.
pub fn matches_ban_tag(name: &str, discriminator: Option<NonZeroU16>, query: &str) -> bool {
    let query = query.trim();
    match query.rsplit_once('#') {
        Some((query_name, query_discriminator)) => {
            let Ok(query_discriminator) = query_discriminator.parse::<u16>() else {
                return false;
            };
            query_name == name && discriminator.map_or(0, NonZeroU16::get) == query_discriminator
        }
        None => query == name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disc(value: u16) -> Option<NonZeroU16> {
        NonZeroU16::new(value)
    }

    #[test]
    fn test_full_tag_matches() {
        assert!(matches_ban_tag("camper", disc(1), "camper#0001"));
        assert!(matches_ban_tag("camper", disc(1234), " camper#1234 "));
        assert!(!matches_ban_tag("camper", disc(1234), "camper#4321"));
        assert!(!matches_ban_tag("camper", disc(1234), "Camper#1234"));
    }

    #[test]
    fn test_bare_name_matches() {
        assert!(matches_ban_tag("camper", None, "camper"));
        assert!(matches_ban_tag("camper", disc(1), "camper"));
        assert!(matches_ban_tag("camper", None, "camper#0"));
    }

    #[test]
    fn test_malformed_discriminator() {
        assert!(!matches_ban_tag("camper", disc(1), "camper#abc"));
        assert!(!matches_ban_tag("camp#er", None, "camp#er"));
    }
}
