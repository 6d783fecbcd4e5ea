//! Fluent bundle loading.

use crate::messages::Messages;
use campfire_common::{CampfireError, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use tracing::debug;
use unic_langid::LanguageIdentifier;

/// Locale every catalogue falls back to.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Embedded en-US catalogue.
pub const EN_US_SOURCE: &str = include_str!("../locales/en-US/main.ftl");

/// Builds message catalogues from Fluent sources.
pub struct FluentLoader;

impl FluentLoader {
    /// Parses `source` into a catalogue for `locale`.
    pub fn load(locale: &str, source: &str) -> Result<Messages> {
        let langid: LanguageIdentifier = locale
            .parse()
            .map_err(|e| CampfireError::localization(format!("invalid locale: {e}"), Some(locale)))?;

        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            CampfireError::localization(
                format!("{} syntax error(s), first: {:?}", errors.len(), errors.first()),
                Some(locale),
            )
        })?;

        let mut bundle = FluentBundle::new_concurrent(vec![langid.clone()]);
        // Isolation marks would end up inside Discord code spans.
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| {
            CampfireError::localization(
                format!("conflicting message ids: {errors:?}"),
                Some(locale),
            )
        })?;

        debug!(%locale, "Loaded Fluent catalogue");
        Ok(Messages::from_bundle(langid, bundle))
    }

    /// Loads the embedded en-US catalogue.
    pub fn load_default() -> Result<Messages> {
        Self::load(DEFAULT_LOCALE, EN_US_SOURCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default() {
        let messages = FluentLoader::load_default().unwrap();
        assert_eq!(messages.locale().to_string(), DEFAULT_LOCALE);
        assert!(messages.has("help-not-found"));
    }

    #[test]
    fn test_invalid_locale() {
        let err = FluentLoader::load("not a locale!", "key = value").unwrap_err();
        assert!(matches!(err, campfire_common::CampfireError::Localization { .. }));
    }

    #[test]
    fn test_syntax_error() {
        assert!(FluentLoader::load(DEFAULT_LOCALE, "= no id").is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        assert!(FluentLoader::load(DEFAULT_LOCALE, "a = one\na = two\n").is_err());
    }
}
