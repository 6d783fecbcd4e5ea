//! Exposes poise's registered commands to the help renderer.

use campfire_help::{CommandEntry, CommandRegistry, Plugin, StaticRegistry};

/// Borrowed view over a framework's command list.
///
/// Commands are grouped into plugins by their `category`; uncategorised
/// commands and commands marked `hide_in_help` are left out.
pub struct PoiseRegistry<'a, U, E> {
    commands: &'a [poise::Command<U, E>],
}

impl<'a, U, E> PoiseRegistry<'a, U, E> {
    /// Wraps `commands`.
    pub const fn new(commands: &'a [poise::Command<U, E>]) -> Self {
        Self { commands }
    }

    /// An owned copy of the current plugin listing.
    pub fn snapshot(&self) -> StaticRegistry {
        StaticRegistry::new(self.plugins())
    }
}

impl<U, E> CommandRegistry for PoiseRegistry<'_, U, E> {
    fn plugins(&self) -> Vec<Plugin> {
        let mut plugins: Vec<Plugin> = Vec::new();
        for command in self.commands.iter().filter(|c| !c.hide_in_help) {
            let Some(category) = &command.category else {
                continue;
            };
            let entry = command_entry(command, &command.name);
            match plugins.iter_mut().find(|plugin| &plugin.name == category) {
                Some(plugin) => plugin.commands.push(entry),
                None => plugins.push(Plugin::new(category.clone(), vec![entry])),
            }
        }
        plugins
    }
}

fn command_entry<U, E>(command: &poise::Command<U, E>, qualified_name: &str) -> CommandEntry {
    let mut entry = CommandEntry::new(command.name.clone());
    entry.qualified_name = qualified_name.to_string();
    entry.is_group = !command.subcommands.is_empty();
    entry.description = command.description.clone();
    entry.usage = Some(usage(command, qualified_name));
    entry.category = command.category.clone();
    entry.subcommands = command
        .subcommands
        .iter()
        .filter(|child| !child.hide_in_help)
        .map(|child| {
            let mut child_entry = command_entry(child, &format!("{qualified_name} {}", child.name));
            child_entry.category = command.category.clone();
            child_entry
        })
        .collect();
    entry
}

/// `qualified_name` followed by `<required>` and `[optional]` parameters.
pub fn usage<U, E>(command: &poise::Command<U, E>, qualified_name: &str) -> String {
    command
        .parameters
        .iter()
        .fold(qualified_name.to_string(), |mut usage, parameter| {
            if parameter.required {
                usage.push_str(&format!(" <{}>", parameter.name));
            } else {
                usage.push_str(&format!(" [{}]", parameter.name));
            }
            usage
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::commands;
    use campfire_help::{find_command, list_plugins};

    #[test]
    fn test_plugins_follow_categories() {
        let commands = commands();
        let registry = PoiseRegistry::new(&commands);
        let names: Vec<String> = list_plugins(&registry).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Admin", "General", "Moderation"]);
    }

    #[test]
    fn test_help_is_not_listed() {
        let commands = commands();
        let registry = PoiseRegistry::new(&commands).snapshot();
        assert!(find_command(&registry, "help").is_err());
    }

    #[test]
    fn test_usage_from_parameters() {
        let commands = commands();
        let registry = PoiseRegistry::new(&commands);
        let kick = find_command(&registry, "kick").unwrap();
        assert_eq!(kick.usage.as_deref(), Some("kick <member> [reason]"));
        assert_eq!(kick.category.as_deref(), Some("Moderation"));

        let about = find_command(&registry, "about").unwrap();
        assert_eq!(about.usage.as_deref(), Some("about"));
        assert_eq!(about.description.as_deref(), Some("Displays info about the bot."));
    }
}
