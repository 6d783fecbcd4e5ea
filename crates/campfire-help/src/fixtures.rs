//! Registries and a recording responder for tests.

use crate::page::Page;
use crate::registry::{CommandEntry, Plugin, StaticRegistry};
use crate::render::HelpContext;
use crate::responder::HelpResponder;
use async_trait::async_trait;
use std::sync::Mutex;

/// The stock plugins: General, Moderation and the hidden Admin plugin.
pub fn sample_registry() -> StaticRegistry {
    StaticRegistry::new(vec![
        Plugin::new(
            "Moderation",
            vec![
                CommandEntry::new("kick")
                    .with_description("Kicks a member from the server.")
                    .with_usage("kick <member> [reason]"),
                CommandEntry::new("ban")
                    .with_description("Bans a member from the server.")
                    .with_usage("ban <member> [reason]"),
                CommandEntry::new("unban")
                    .with_description("Unbans a user from the server.")
                    .with_usage("unban <user> [reason]"),
            ],
        ),
        Plugin::new(
            "General",
            vec![
                CommandEntry::new("about").with_description("Shows information about the bot."),
                CommandEntry::new("profile")
                    .with_description("Shows a member's profile.")
                    .with_usage("profile [member]"),
            ],
        ),
        Plugin::new(
            "Admin",
            vec![
                CommandEntry::new("register").with_description("Registers application commands."),
                CommandEntry::new("reload").with_description("Reloads the configuration file."),
            ],
        ),
    ])
}

/// A plugin with a `tag` group holding `add` and `remove`.
pub fn grouped_registry() -> StaticRegistry {
    StaticRegistry::new(vec![Plugin::new(
        "Tags",
        vec![
            CommandEntry::group(
                "tag",
                vec![CommandEntry::new("remove"), CommandEntry::new("add")],
            )
            .with_description("Manages tags.")
            .with_usage("tag <subcommand>"),
            CommandEntry::new("tags").with_description("Lists every tag."),
        ],
    )
    .with_description("Reusable snippets of text.")])
}

/// A prefix invocation by `camper#0001`.
pub fn sample_context() -> HelpContext {
    HelpContext {
        requester: "camper#0001".to_string(),
        requester_icon: Some("https://cdn.example/camper.png".to_string()),
        bot_icon: Some("https://cdn.example/campfire.png".to_string()),
        prefixes: vec!["campfire ".to_string(), "camp ".to_string()],
    }
}

/// One recorded responder call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    /// `send_page`
    Page(Page),
    /// `send_pages`
    Pages(Vec<Page>),
    /// `send_not_found`
    NotFound(String),
}

/// Responder that stores every call instead of sending it.
#[derive(Debug, Default)]
pub struct RecordingResponder {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingResponder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far.
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }

    fn record(&self, call: Sent) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(call);
        }
    }
}

#[async_trait]
impl HelpResponder for RecordingResponder {
    type Error = std::convert::Infallible;

    async fn send_page(&self, page: Page) -> Result<(), Self::Error> {
        self.record(Sent::Page(page));
        Ok(())
    }

    async fn send_pages(&self, pages: Vec<Page>) -> Result<(), Self::Error> {
        self.record(Sent::Pages(pages));
        Ok(())
    }

    async fn send_not_found(&self, message: String) -> Result<(), Self::Error> {
        self.record(Sent::NotFound(message));
        Ok(())
    }
}
