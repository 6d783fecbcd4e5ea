//! Sends help pages as Discord embeds.

use crate::embeds::{page_embed, send_error};
use crate::framework::{Context, Error};
use async_trait::async_trait;
use campfire_help::{HelpResponder, Page};
use poise::serenity_prelude as serenity;
use std::time::Duration;
use tracing::debug;

/// Replies in the invoking channel. Several pages become a button
/// paginator; a single page is sent without buttons.
pub struct EmbedResponder<'a> {
    ctx: Context<'a>,
    timeout: Duration,
}

impl<'a> EmbedResponder<'a> {
    /// A responder whose paginator stops listening after `timeout`.
    pub const fn new(ctx: Context<'a>, timeout: Duration) -> Self {
        Self { ctx, timeout }
    }
}

/// Index of the page shown after pressing `button` on page `current`;
/// wraps around at both ends.
pub fn turn_page(current: usize, total: usize, button: PageButton) -> usize {
    match button {
        PageButton::Previous => current.checked_sub(1).unwrap_or(total.saturating_sub(1)),
        PageButton::Next => {
            if current + 1 >= total {
                0
            } else {
                current + 1
            }
        }
    }
}

/// The paginator's buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    /// ◀
    Previous,
    /// ▶
    Next,
}

#[async_trait]
impl HelpResponder for EmbedResponder<'_> {
    type Error = Error;

    async fn send_page(&self, page: Page) -> Result<(), Error> {
        self.ctx
            .send(poise::CreateReply::default().embed(page_embed(&page)).reply(true))
            .await?;
        Ok(())
    }

    async fn send_pages(&self, pages: Vec<Page>) -> Result<(), Error> {
        if pages.len() <= 1 {
            return match pages.into_iter().next() {
                Some(page) => self.send_page(page).await,
                None => Ok(()),
            };
        }

        let ctx_id = self.ctx.id();
        let prev_id = format!("{ctx_id}prev");
        let next_id = format!("{ctx_id}next");
        let buttons = serenity::CreateActionRow::Buttons(vec![
            serenity::CreateButton::new(&prev_id).emoji('◀'),
            serenity::CreateButton::new(&next_id).emoji('▶'),
        ]);

        self.ctx
            .send(
                poise::CreateReply::default()
                    .embed(page_embed(&pages[0]))
                    .components(vec![buttons])
                    .reply(true),
            )
            .await?;

        let mut current = 0;
        while let Some(press) = serenity::ComponentInteractionCollector::new(self.ctx)
            .filter(move |press| press.data.custom_id.starts_with(&ctx_id.to_string()))
            .timeout(self.timeout)
            .await
        {
            let button = if press.data.custom_id == next_id {
                PageButton::Next
            } else if press.data.custom_id == prev_id {
                PageButton::Previous
            } else {
                continue;
            };
            current = turn_page(current, pages.len(), button);
            debug!(page = current + 1, total = pages.len(), "Turning help page");

            press
                .create_response(
                    self.ctx.serenity_context(),
                    serenity::CreateInteractionResponse::UpdateMessage(
                        serenity::CreateInteractionResponseMessage::new().embed(page_embed(&pages[current])),
                    ),
                )
                .await?;
        }
        Ok(())
    }

    async fn send_not_found(&self, message: String) -> Result<(), Error> {
        send_error(self.ctx, &message).await
    }
}
