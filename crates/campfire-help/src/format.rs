//! Turns plugins into embed fields.

use crate::page::ContentBlock;
use crate::registry::{list_commands, list_subcommands, Plugin};

/// Wraps each name in backticks and joins them with `", "`.
pub fn format_command_names<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|name| format!("`{}`", name.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every name listed for `plugin`: leaf commands plus the direct children
/// of each group as `"{parent} {child}"`, sorted and deduplicated. Nested
/// groups are listed by their own name, not expanded.
pub fn plugin_command_names(plugin: &Plugin) -> Vec<String> {
    let mut names: Vec<String> = list_commands(plugin)
        .into_iter()
        .map(|command| command.qualified_name.clone())
        .collect();
    names.extend(
        plugin
            .commands
            .iter()
            .filter(|c| c.is_group)
            .flat_map(list_subcommands)
            .map(|child| child.qualified_name),
    );

    names.sort();
    names.dedup();
    names
}

/// The plugin's listing field, or `None` when it has nothing to list.
pub fn create_plugin_field(plugin: &Plugin) -> Option<ContentBlock> {
    let names = plugin_command_names(plugin);
    if names.is_empty() {
        return None;
    }
    Some(ContentBlock::new(
        plugin.name.clone(),
        format_command_names(&names),
        false,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CommandEntry;
    use proptest::prelude::*;

    #[test]
    fn test_format_empty() {
        let names: [&str; 0] = [];
        assert_eq!(format_command_names(&names), "");
    }

    #[test]
    fn test_format_names() {
        assert_eq!(format_command_names(&["ban", "kick"]), "`ban`, `kick`");
        assert_eq!(format_command_names(&["about"]), "`about`");
    }

    #[test]
    fn test_empty_plugin_has_no_field() {
        assert_eq!(create_plugin_field(&Plugin::new("Empty", vec![])), None);
    }

    #[test]
    fn test_group_only_plugin_lists_children() {
        let plugin = Plugin::new(
            "Tags",
            vec![
                CommandEntry::group("tag", vec![CommandEntry::new("remove"), CommandEntry::new("add")]),
                CommandEntry::new("alias"),
            ],
        );
        let field = create_plugin_field(&plugin).unwrap();
        assert_eq!(field.title, "Tags");
        assert_eq!(field.body, "`alias`, `tag add`, `tag remove`");
        assert!(!field.inline);
    }

    #[test]
    fn test_empty_group_has_no_field() {
        let plugin = Plugin::new("Tags", vec![CommandEntry::group("tag", vec![])]);
        assert_eq!(create_plugin_field(&plugin), None);
    }

    #[test]
    fn test_nested_group_listed_one_level_down() {
        let plugin = Plugin::new(
            "Config",
            vec![CommandEntry::group(
                "config",
                vec![
                    CommandEntry::group("log", vec![CommandEntry::new("channel")]),
                    CommandEntry::new("show"),
                ],
            )],
        );
        assert_eq!(plugin_command_names(&plugin), vec!["config log", "config show"]);
    }

    proptest! {
        #[test]
        fn prop_every_name_once_and_sorted(names in proptest::collection::vec("[a-z]{1,8}", 0..20)) {
            let plugin = Plugin::new(
                "Plugin",
                names.iter().map(CommandEntry::new).collect(),
            );
            let listed = plugin_command_names(&plugin);

            let mut expected = names.clone();
            expected.sort();
            expected.dedup();
            prop_assert_eq!(&listed, &expected);

            let field = create_plugin_field(&plugin);
            prop_assert_eq!(field.is_none(), names.is_empty());
        }
    }
}
