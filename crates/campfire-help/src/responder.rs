//! Delivery seam between the renderer and the chat platform.

use crate::page::Page;
use crate::registry::CommandRegistry;
use crate::render::{HelpContext, HelpRenderer, HelpResponse};
use crate::request::HelpRequest;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Sends rendered help back to the user.
#[async_trait]
pub trait HelpResponder: Send + Sync {
    /// Transport failure type.
    type Error: Send;

    /// Sends one page as a single message.
    async fn send_page(&self, page: Page) -> Result<(), Self::Error>;

    /// Sends numbered pages, usually as a paginator.
    async fn send_pages(&self, pages: Vec<Page>) -> Result<(), Self::Error>;

    /// Sends a not-found message.
    async fn send_not_found(&self, message: String) -> Result<(), Self::Error>;
}

/// Renders `request` and performs exactly one responder call.
#[instrument(skip_all, fields(request = ?request, requester = %ctx.requester))]
pub async fn handle_help<R, S>(
    renderer: &HelpRenderer,
    registry: &R,
    request: &HelpRequest,
    ctx: &HelpContext,
    responder: &S,
) -> Result<(), S::Error>
where
    R: CommandRegistry + ?Sized,
    S: HelpResponder + ?Sized,
{
    match renderer.render(request, registry, ctx) {
        HelpResponse::Pages(pages) => {
            debug!(pages = pages.len(), "Sending help overview");
            responder.send_pages(pages).await
        }
        HelpResponse::Single(page) | HelpResponse::Empty(page) => responder.send_page(page).await,
        HelpResponse::NotFound(message) => responder.send_not_found(message).await,
    }
}
