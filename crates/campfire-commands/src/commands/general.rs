//! General plugin: bot info and member profiles.

use crate::embeds::{bot_icon, info_embed};
use crate::error::CommandError;
use crate::framework::{Context, Error};
use crate::reputation::{cast_vote, Reputation, Vote};
use campfire_common::format_unix_date;
use campfire_i18n::{keys, Messages};
use poise::serenity_prelude as serenity;
use tracing::{debug, info};

/// Displays info about the bot.
#[poise::command(prefix_command, slash_command, category = "General")]
pub async fn about(ctx: Context<'_>) -> Result<(), Error> {
    let messages = &ctx.data().messages;
    let settings = ctx.data().config.get().embeds.clone();
    let embed = info_embed(
        &settings,
        messages.get(keys::ABOUT_TITLE),
        messages.get(keys::ABOUT_DESCRIPTION),
        &bot_icon(ctx),
    );

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Displays information about the member.
#[poise::command(prefix_command, slash_command, guild_only, category = "General")]
pub async fn profile(
    ctx: Context<'_>,
    #[description = "The member to see the profile of"] member: Option<serenity::Member>,
) -> Result<(), Error> {
    let member = match member {
        Some(member) => member,
        None => ctx
            .author_member()
            .await
            .ok_or(CommandError::MemberUnavailable)?
            .into_owned(),
    };
    debug!(member = %member.user.id, "Building profile");

    let details = ProfileDetails {
        name: member.user.tag(),
        user_id: member.user.id.get(),
        joined_at: member.joined_at.map(|joined| joined.unix_timestamp()),
        created_at: member.user.created_at().unix_timestamp(),
        reputation: ctx.data().reputation.reputation(member.user.id.get()).await,
    };

    let messages = &ctx.data().messages;
    let settings = ctx.data().config.get().embeds.clone();
    let embed = info_embed(
        &settings,
        messages.get_with_args(keys::PROFILE_TITLE, &[("name", &details.name)]),
        messages.get_with_args(keys::PROFILE_DESCRIPTION, &[("name", &details.name)]),
        &bot_icon(ctx),
    )
    .thumbnail(member.face())
    .fields(details.fields(messages));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Gives a member a positive reputation vote.
#[poise::command(prefix_command, slash_command, guild_only, category = "General")]
pub async fn upvote(
    ctx: Context<'_>,
    #[description = "The member to upvote"] member: serenity::Member,
) -> Result<(), Error> {
    vote(ctx, &member.user, Vote::Up).await
}

/// Gives a member a negative reputation vote.
#[poise::command(prefix_command, slash_command, guild_only, category = "General")]
pub async fn downvote(
    ctx: Context<'_>,
    #[description = "The member to downvote"] member: serenity::Member,
) -> Result<(), Error> {
    vote(ctx, &member.user, Vote::Down).await
}

async fn vote(ctx: Context<'_>, target: &serenity::User, vote: Vote) -> Result<(), Error> {
    let reputation = cast_vote(
        ctx.data().reputation.as_ref(),
        target.id.get(),
        ctx.author().id.get(),
        vote,
    )
    .await?;
    info!(target = %target.id, voter = %ctx.author().id, ?vote, "Recorded reputation vote");

    let key = match vote {
        Vote::Up => keys::REPUTATION_UPVOTED,
        Vote::Down => keys::REPUTATION_DOWNVOTED,
    };
    let messages = &ctx.data().messages;
    let text = messages.get_with_args(
        key,
        &[("member", &target.tag()), ("reputation", &reputation.to_string())],
    );
    ctx.say(text).await?;
    Ok(())
}

/// Everything a profile embed shows about a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDetails {
    /// `name#discriminator`, or the bare username.
    pub name: String,
    /// Discord user id.
    pub user_id: u64,
    /// Guild join time in unix seconds.
    pub joined_at: Option<i64>,
    /// Account creation time in unix seconds.
    pub created_at: i64,
    /// Global vote totals.
    pub reputation: Reputation,
}

impl ProfileDetails {
    /// The six inline fields of the profile embed.
    pub fn fields(&self, messages: &Messages) -> Vec<(String, String, bool)> {
        let date = |seconds: Option<i64>| {
            seconds
                .and_then(format_unix_date)
                .unwrap_or_else(|| messages.get(keys::PROFILE_UNKNOWN_DATE))
        };

        vec![
            (messages.get(keys::PROFILE_USER_ID), self.user_id.to_string(), true),
            (messages.get(keys::PROFILE_JOINED_AT), date(self.joined_at), true),
            (messages.get(keys::PROFILE_CREATED_AT), date(Some(self.created_at)), true),
            (messages.get(keys::PROFILE_REPUTATION), self.reputation.to_string(), true),
            (messages.get(keys::PROFILE_UPVOTES), self.reputation.upvotes.to_string(), true),
            (messages.get(keys::PROFILE_DOWNVOTES), self.reputation.downvotes.to_string(), true),
        ]
    }
}
