//! Message lookup with argument substitution.

use crate::loader::{FluentLoader, DEFAULT_LOCALE};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::{error, warn};
use unic_langid::LanguageIdentifier;

/// Message ids used across the workspace.
pub mod keys {
    #![allow(missing_docs)]

    pub const HELP_DESCRIPTION: &str = "help-description";
    pub const HELP_NOT_FOUND: &str = "help-not-found";
    pub const HELP_NOTHING_TO_SHOW: &str = "help-nothing-to-show";
    pub const HELP_REQUESTED_BY: &str = "help-requested-by";
    pub const HELP_USAGE: &str = "help-usage";
    pub const HELP_SUBCOMMANDS: &str = "help-subcommands";
    pub const HELP_NO_DESCRIPTION: &str = "help-no-description";

    pub const ABOUT_TITLE: &str = "about-title";
    pub const ABOUT_DESCRIPTION: &str = "about-description";
    pub const PROFILE_TITLE: &str = "profile-title";
    pub const PROFILE_DESCRIPTION: &str = "profile-description";
    pub const PROFILE_USER_ID: &str = "profile-user-id";
    pub const PROFILE_JOINED_AT: &str = "profile-joined-at";
    pub const PROFILE_CREATED_AT: &str = "profile-created-at";
    pub const PROFILE_REPUTATION: &str = "profile-reputation";
    pub const PROFILE_UPVOTES: &str = "profile-upvotes";
    pub const PROFILE_DOWNVOTES: &str = "profile-downvotes";
    pub const PROFILE_UNKNOWN_DATE: &str = "profile-unknown-date";
    pub const REPUTATION_UPVOTED: &str = "reputation-upvoted";
    pub const REPUTATION_DOWNVOTED: &str = "reputation-downvoted";

    pub const MODERATION_KICKED: &str = "moderation-kicked";
    pub const MODERATION_BANNED: &str = "moderation-banned";
    pub const MODERATION_UNBANNED: &str = "moderation-unbanned";
    pub const MODERATION_NOT_BANNED: &str = "moderation-not-banned";

    pub const ADMIN_RELOADED: &str = "admin-reloaded";
    pub const ADMIN_RELOAD_FAILED: &str = "admin-reload-failed";

    pub const ERROR_UNKNOWN_ARGUMENT: &str = "error-unknown-argument";
    pub const ERROR_GUILD_ONLY: &str = "error-guild-only";
    pub const ERROR_MISSING_PERMISSIONS: &str = "error-missing-permissions";
    pub const ERROR_BOT_MISSING_PERMISSIONS: &str = "error-bot-missing-permissions";
    pub const ERROR_OWNERS_ONLY: &str = "error-owners-only";
    pub const ERROR_INVALID_ARGUMENT: &str = "error-invalid-argument";
    pub const ERROR_COOLDOWN: &str = "error-cooldown";
    pub const ERROR_SELF_VOTE: &str = "error-self-vote";
    pub const ERROR_GENERIC: &str = "error-generic";
}

static DEFAULT_MESSAGES: Lazy<Arc<Messages>> = Lazy::new(|| {
    let messages = FluentLoader::load_default().unwrap_or_else(|e| {
        error!("Embedded catalogue failed to load, falling back to message ids: {e}");
        Messages::empty(DEFAULT_LOCALE)
    });
    Arc::new(messages)
});

/// A loaded message catalogue for one locale.
pub struct Messages {
    locale: LanguageIdentifier,
    bundle: FluentBundle<FluentResource>,
}

impl std::fmt::Debug for Messages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Messages")
            .field("locale", &self.locale.to_string())
            .finish_non_exhaustive()
    }
}

impl Messages {
    pub(crate) fn from_bundle(locale: LanguageIdentifier, bundle: FluentBundle<FluentResource>) -> Self {
        Self { locale, bundle }
    }

    /// A catalogue without any messages; every lookup yields the key.
    pub fn empty(locale: &str) -> Self {
        let locale: LanguageIdentifier = locale.parse().unwrap_or_default();
        let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
        bundle.set_use_isolating(false);
        Self { locale, bundle }
    }

    /// The shared en-US catalogue.
    pub fn default_catalogue() -> Arc<Self> {
        Arc::clone(&DEFAULT_MESSAGES)
    }

    /// Locale of this catalogue.
    pub const fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Whether the catalogue defines `key`.
    pub fn has(&self, key: &str) -> bool {
        self.bundle.has_message(key)
    }

    /// Gets a message without arguments.
    pub fn get(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Gets a message, substituting `{ $name }` placeables from `args`.
    pub fn get_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let Some(pattern) = self.bundle.get_message(key).and_then(|m| m.value()) else {
            warn!(%key, locale = %self.locale, "Missing message");
            return key.to_string();
        };

        let mut errors = Vec::new();
        let formatted = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            warn!(%key, ?errors, "Message formatted with errors");
        }
        formatted.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_message() {
        let messages = Messages::default_catalogue();
        assert_eq!(messages.get(keys::HELP_USAGE), "Usage");
    }

    #[test]
    fn test_message_with_args() {
        let messages = Messages::default_catalogue();
        assert_eq!(
            messages.get_with_args(keys::HELP_NOT_FOUND, &[("name", "doesnotexist")]),
            "No command called `doesnotexist` found."
        );
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let messages = Messages::default_catalogue();
        assert_eq!(messages.get("no-such-key"), "no-such-key");
    }

    #[test]
    fn test_empty_catalogue() {
        let messages = Messages::empty("en-US");
        assert!(!messages.has(keys::HELP_USAGE));
        assert_eq!(messages.get(keys::HELP_USAGE), keys::HELP_USAGE);
    }
}
