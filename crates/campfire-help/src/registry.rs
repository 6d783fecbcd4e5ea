//! Read-only view of the plugins and commands registered with the bot.

use crate::error::HelpError;

/// One registered command, as seen by the help renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    /// Name the command is invoked by.
    pub name: String,
    /// Full invocation path, e.g. `tag add`.
    pub qualified_name: String,
    /// Whether this entry only groups subcommands.
    pub is_group: bool,
    /// One-line description.
    pub description: Option<String>,
    /// Parameter list shown after the name, e.g. `kick <member> [reason]`.
    pub usage: Option<String>,
    /// Plugin the command belongs to.
    pub category: Option<String>,
    /// Direct children of a group.
    pub subcommands: Vec<CommandEntry>,
}

impl CommandEntry {
    /// A leaf command.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            qualified_name: name.clone(),
            name,
            is_group: false,
            description: None,
            usage: None,
            category: None,
            subcommands: Vec::new(),
        }
    }

    /// A group; children get `"{name} {child}"` as their qualified name.
    pub fn group(name: impl Into<String>, subcommands: Vec<Self>) -> Self {
        let mut group = Self::new(name);
        group.is_group = true;
        group.subcommands = subcommands
            .into_iter()
            .map(|child| child.nested_under(&group.qualified_name))
            .collect();
        group
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the usage string.
    #[must_use]
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// Sets the owning plugin, recursively.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.subcommands = self
            .subcommands
            .into_iter()
            .map(|child| child.with_category(category.clone()))
            .collect();
        self.category = Some(category);
        self
    }

    fn nested_under(mut self, parent: &str) -> Self {
        self.qualified_name = format!("{parent} {}", self.name);
        let qualified = self.qualified_name.clone();
        self.subcommands = self
            .subcommands
            .into_iter()
            .map(|child| child.nested_under(&qualified))
            .collect();
        self
    }
}

/// A named group of commands ("plugin" or "cog").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugin {
    /// Display name, also used for lookups.
    pub name: String,
    /// Optional blurb shown on the plugin's help page.
    pub description: Option<String>,
    /// Top-level commands registered under this plugin.
    pub commands: Vec<CommandEntry>,
}

impl Plugin {
    /// A plugin owning `commands`; commands without a category are assigned
    /// to it.
    pub fn new(name: impl Into<String>, commands: Vec<CommandEntry>) -> Self {
        let name = name.into();
        let commands = commands
            .into_iter()
            .map(|command| match command.category {
                Some(_) => command,
                None => command.with_category(name.clone()),
            })
            .collect();
        Self {
            name,
            description: None,
            commands,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Source of the plugin listing. Implementations return a fresh snapshot on
/// every call.
pub trait CommandRegistry {
    /// Every plugin, in registration order.
    fn plugins(&self) -> Vec<Plugin>;
}

/// A registry over an owned plugin list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticRegistry {
    plugins: Vec<Plugin>,
}

impl StaticRegistry {
    /// Wraps `plugins`.
    pub const fn new(plugins: Vec<Plugin>) -> Self {
        Self { plugins }
    }
}

impl CommandRegistry for StaticRegistry {
    fn plugins(&self) -> Vec<Plugin> {
        self.plugins.clone()
    }
}

impl FromIterator<Plugin> for StaticRegistry {
    fn from_iter<I: IntoIterator<Item = Plugin>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// All plugins sorted by name (ordinal, case-sensitive).
pub fn list_plugins<R: CommandRegistry + ?Sized>(registry: &R) -> Vec<Plugin> {
    let mut plugins = registry.plugins();
    plugins.sort_by(|a, b| a.name.cmp(&b.name));
    plugins
}

/// Leaf commands of a plugin, sorted by name. Groups are left out; their
/// children come from [`list_subcommands`].
pub fn list_commands(plugin: &Plugin) -> Vec<&CommandEntry> {
    let mut commands: Vec<&CommandEntry> = plugin.commands.iter().filter(|c| !c.is_group).collect();
    commands.sort_by(|a, b| a.name.cmp(&b.name));
    commands
}

/// Direct children of a group, sorted by qualified name.
pub fn list_subcommands(group: &CommandEntry) -> Vec<CommandEntry> {
    let mut children = group.subcommands.clone();
    children.sort_by(|a, b| a.qualified_name.cmp(&b.qualified_name));
    children
}

/// Looks a plugin up by name, ignoring ASCII case.
pub fn find_plugin<R: CommandRegistry + ?Sized>(registry: &R, id: &str) -> Result<Plugin, HelpError> {
    let id = id.trim();
    registry
        .plugins()
        .into_iter()
        .find(|plugin| plugin.name.eq_ignore_ascii_case(id))
        .ok_or_else(|| HelpError::NotFound(id.to_string()))
}

/// Looks a command up by qualified name, ignoring ASCII case and repeated
/// whitespace, at any nesting depth.
pub fn find_command<R: CommandRegistry + ?Sized>(
    registry: &R,
    id: &str,
) -> Result<CommandEntry, HelpError> {
    let wanted = id.split_whitespace().collect::<Vec<_>>().join(" ");

    fn search<'a>(commands: &'a [CommandEntry], wanted: &str) -> Option<&'a CommandEntry> {
        commands.iter().find_map(|command| {
            if command.qualified_name.eq_ignore_ascii_case(wanted) {
                Some(command)
            } else {
                search(&command.subcommands, wanted)
            }
        })
    }

    registry
        .plugins()
        .iter()
        .find_map(|plugin| search(&plugin.commands, &wanted).cloned())
        .ok_or(HelpError::NotFound(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> StaticRegistry {
        StaticRegistry::new(vec![
            Plugin::new(
                "Tags",
                vec![
                    CommandEntry::group(
                        "tag",
                        vec![CommandEntry::new("remove"), CommandEntry::new("add")],
                    ),
                    CommandEntry::new("tags"),
                ],
            ),
            Plugin::new("General", vec![CommandEntry::new("profile"), CommandEntry::new("about")]),
        ])
    }

    #[test]
    fn test_group_qualifies_children() {
        let group = CommandEntry::group("tag", vec![CommandEntry::new("add")]);
        assert!(group.is_group);
        assert_eq!(group.subcommands[0].qualified_name, "tag add");
        assert_eq!(group.subcommands[0].name, "add");
    }

    #[test]
    fn test_plugin_assigns_category() {
        let registry = registry();
        let tags = find_plugin(&registry, "tags").unwrap();
        assert_eq!(tags.commands[0].category.as_deref(), Some("Tags"));
        assert_eq!(tags.commands[0].subcommands[0].category.as_deref(), Some("Tags"));
    }

    #[test]
    fn test_list_plugins_sorted() {
        let names: Vec<String> = list_plugins(&registry()).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["General", "Tags"]);
    }

    #[test]
    fn test_list_plugins_case_sensitive_ordinal() {
        let registry = StaticRegistry::new(vec![
            Plugin::new("alpha", vec![]),
            Plugin::new("Zeta", vec![]),
        ]);
        let names: Vec<String> = list_plugins(&registry).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Zeta", "alpha"]);
    }

    #[test]
    fn test_list_commands_skips_groups() {
        let tags = find_plugin(&registry(), "Tags").unwrap();
        let names: Vec<&str> = list_commands(&tags).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["tags"]);
    }

    #[test]
    fn test_list_subcommands_sorted() {
        let group = CommandEntry::group("tag", vec![CommandEntry::new("remove"), CommandEntry::new("add")]);
        let names: Vec<String> = list_subcommands(&group).into_iter().map(|c| c.qualified_name).collect();
        assert_eq!(names, vec!["tag add", "tag remove"]);
    }

    #[test]
    fn test_find_command_nested() {
        let found = find_command(&registry(), "TAG   add").unwrap();
        assert_eq!(found.qualified_name, "tag add");
        assert!(!found.is_group);
    }

    #[test]
    fn test_find_unknown() {
        assert_eq!(
            find_command(&registry(), "doesnotexist"),
            Err(HelpError::NotFound("doesnotexist".to_string()))
        );
        assert_eq!(
            find_plugin(&registry(), "doesnotexist"),
            Err(HelpError::NotFound("doesnotexist".to_string()))
        );
    }
}
