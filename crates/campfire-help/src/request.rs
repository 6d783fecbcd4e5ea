//! What a help invocation asked for.

use crate::registry::{find_command, find_plugin, CommandRegistry};

/// The four help targets. Ids keep the user's spelling so not-found messages
/// echo what was typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpRequest {
    /// Overview of every visible plugin.
    Bot,
    /// One plugin by name.
    Plugin(String),
    /// One leaf command by qualified name.
    Command(String),
    /// One command group by qualified name.
    Group(String),
}

impl HelpRequest {
    /// Classifies the raw `help` argument against `registry`.
    ///
    /// Plugin names win over command names. Anything unknown becomes
    /// [`HelpRequest::Command`], which then renders as not-found.
    pub fn resolve<R: CommandRegistry + ?Sized>(registry: &R, query: Option<&str>) -> Self {
        let query = match query.map(str::trim) {
            None | Some("") => return Self::Bot,
            Some(query) => query,
        };

        if find_plugin(registry, query).is_ok() {
            return Self::Plugin(query.to_string());
        }
        match find_command(registry, query) {
            Ok(command) if command.is_group => Self::Group(query.to_string()),
            _ => Self::Command(query.to_string()),
        }
    }

    /// The id asked about, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Bot => None,
            Self::Plugin(id) | Self::Command(id) | Self::Group(id) => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{grouped_registry, sample_registry};

    #[test]
    fn test_empty_query_is_bot() {
        let registry = sample_registry();
        assert_eq!(HelpRequest::resolve(&registry, None), HelpRequest::Bot);
        assert_eq!(HelpRequest::resolve(&registry, Some("   ")), HelpRequest::Bot);
    }

    #[test]
    fn test_plugin_keeps_spelling() {
        let registry = sample_registry();
        assert_eq!(
            HelpRequest::resolve(&registry, Some("moderation")),
            HelpRequest::Plugin("moderation".to_string())
        );
    }

    #[test]
    fn test_command_and_group() {
        let registry = grouped_registry();
        assert_eq!(
            HelpRequest::resolve(&registry, Some("tag")),
            HelpRequest::Group("tag".to_string())
        );
        assert_eq!(
            HelpRequest::resolve(&registry, Some("tag add")),
            HelpRequest::Command("tag add".to_string())
        );
    }

    #[test]
    fn test_unknown_is_command() {
        let request = HelpRequest::resolve(&sample_registry(), Some("doesnotexist"));
        assert_eq!(request, HelpRequest::Command("doesnotexist".to_string()));
        assert_eq!(request.target(), Some("doesnotexist"));
        assert_eq!(HelpRequest::Bot.target(), None);
    }
}
