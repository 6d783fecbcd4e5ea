//! Builds help pages for a resolved request.

use crate::error::HelpError;
use crate::format::{create_plugin_field, format_command_names};
use crate::page::{ContentBlock, EmbedAuthor, EmbedFooter, Page, PageMetadata};
use crate::paginate::paginate;
use crate::registry::{find_command, find_plugin, list_plugins, list_subcommands, CommandEntry, CommandRegistry};
use crate::request::HelpRequest;
use campfire_common::{capitalize, code_block};
use campfire_config::defaults::{ADMIN_CATEGORY, DEFAULT_INFO_COLOUR};
use campfire_config::Config;
use campfire_i18n::{keys, Messages};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::debug;

/// Renderer knobs taken from the `help` and `embeds` config sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpSettings {
    /// Plugins per overview page.
    pub page_size: NonZeroUsize,
    /// Categories rendered as if they did not exist.
    pub hidden_categories: Vec<String>,
    /// Name shown in the author line and the mention fallback prefix.
    pub bot_name: String,
    /// Colour of help pages.
    pub colour: u32,
}

impl HelpSettings {
    /// Reads the settings out of a validated config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            page_size: config.help.page_size(),
            hidden_categories: config.help.hidden_categories.clone(),
            bot_name: config.embeds.bot_name.clone(),
            colour: config.embeds.info_colour,
        }
    }

    /// Whether `category` is hidden, ignoring ASCII case.
    pub fn is_hidden(&self, category: &str) -> bool {
        self.hidden_categories
            .iter()
            .any(|hidden| hidden.eq_ignore_ascii_case(category))
    }
}

impl Default for HelpSettings {
    fn default() -> Self {
        Self {
            page_size: NonZeroUsize::MIN,
            hidden_categories: vec![ADMIN_CATEGORY.to_string()],
            bot_name: "Campfire".to_string(),
            colour: DEFAULT_INFO_COLOUR,
        }
    }
}

/// Who asked and how they reached the bot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpContext {
    /// Display tag of the invoking user.
    pub requester: String,
    /// Avatar of the invoking user.
    pub requester_icon: Option<String>,
    /// Avatar of the bot.
    pub bot_icon: Option<String>,
    /// Prefixes valid where the command was invoked; `["/"]` for slash
    /// commands.
    pub prefixes: Vec<String>,
}

/// Outcome of rendering a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpResponse {
    /// Numbered overview pages.
    Pages(Vec<Page>),
    /// A plugin, command or group page.
    Single(Page),
    /// User-facing not-found message.
    NotFound(String),
    /// Overview with nothing to list.
    Empty(Page),
}

/// The prefix shown in help output: the last configured prefix, or a bot
/// mention when there is none.
pub fn display_prefix(prefixes: &[String], bot_name: &str) -> String {
    prefixes
        .last()
        .cloned()
        .unwrap_or_else(|| format!("@{bot_name} "))
}

/// Renders help requests into pages. Holds no per-request state.
#[derive(Debug, Clone)]
pub struct HelpRenderer {
    settings: HelpSettings,
    messages: Arc<Messages>,
}

impl HelpRenderer {
    /// Creates a renderer.
    pub const fn new(settings: HelpSettings, messages: Arc<Messages>) -> Self {
        Self { settings, messages }
    }

    /// Current settings.
    pub const fn settings(&self) -> &HelpSettings {
        &self.settings
    }

    /// Renders `request`. Unknown and hidden targets become
    /// [`HelpResponse::NotFound`].
    pub fn render<R: CommandRegistry + ?Sized>(
        &self,
        request: &HelpRequest,
        registry: &R,
        ctx: &HelpContext,
    ) -> HelpResponse {
        let rendered = match request {
            HelpRequest::Bot => Ok(self.render_bot(registry, ctx)),
            HelpRequest::Plugin(id) => self.render_plugin(registry, id, ctx).map(HelpResponse::Single),
            HelpRequest::Command(id) | HelpRequest::Group(id) => {
                self.render_command(registry, id, ctx).map(HelpResponse::Single)
            }
        };

        rendered.unwrap_or_else(|error| {
            debug!(target_id = error.target(), "help target not shown: {error}");
            HelpResponse::NotFound(self.not_found_message(request, &error))
        })
    }

    /// Localised not-found text naming `id`.
    pub fn not_found(&self, id: &str) -> String {
        self.messages.get_with_args(keys::HELP_NOT_FOUND, &[("name", id)])
    }

    fn not_found_message(&self, request: &HelpRequest, error: &HelpError) -> String {
        self.not_found(request.target().unwrap_or_else(|| error.target()))
    }

    fn template(&self, ctx: &HelpContext) -> PageMetadata {
        PageMetadata {
            colour: self.settings.colour,
            description: None,
            author: Some(EmbedAuthor {
                name: self.settings.bot_name.clone(),
                icon_url: ctx.bot_icon.clone(),
            }),
            footer: Some(EmbedFooter {
                text: self
                    .messages
                    .get_with_args(keys::HELP_REQUESTED_BY, &[("user", &ctx.requester)]),
                icon_url: ctx.requester_icon.clone(),
            }),
        }
    }

    fn render_bot<R: CommandRegistry + ?Sized>(&self, registry: &R, ctx: &HelpContext) -> HelpResponse {
        let prefix = display_prefix(&ctx.prefixes, &self.settings.bot_name);
        let shown = if ctx.prefixes.is_empty() { prefix.trim_end() } else { prefix.as_str() };

        let mut template = self.template(ctx);
        template.description = Some(
            self.messages
                .get_with_args(keys::HELP_DESCRIPTION, &[("prefix", shown)]),
        );

        let fields: Vec<ContentBlock> = list_plugins(registry)
            .iter()
            .filter(|plugin| !self.settings.is_hidden(&plugin.name))
            .filter_map(create_plugin_field)
            .collect();

        let pages = paginate(fields, self.settings.page_size, &template);
        if pages.is_empty() {
            template.description = Some(self.messages.get(keys::HELP_NOTHING_TO_SHOW));
            return HelpResponse::Empty(Page::new(template));
        }
        HelpResponse::Pages(pages)
    }

    fn render_plugin<R: CommandRegistry + ?Sized>(
        &self,
        registry: &R,
        id: &str,
        ctx: &HelpContext,
    ) -> Result<Page, HelpError> {
        let plugin = find_plugin(registry, id)?;
        if self.settings.is_hidden(&plugin.name) {
            return Err(HelpError::NotFound(id.to_string()));
        }
        let field = create_plugin_field(&plugin).ok_or_else(|| HelpError::Empty(id.to_string()))?;

        let mut page = Page::new(self.template(ctx)).with_title(plugin.name.clone());
        page.metadata.description = plugin.description.clone();
        page.push(field);
        Ok(page)
    }

    fn render_command<R: CommandRegistry + ?Sized>(
        &self,
        registry: &R,
        id: &str,
        ctx: &HelpContext,
    ) -> Result<Page, HelpError> {
        let command = find_command(registry, id)?;
        if command
            .category
            .as_deref()
            .is_some_and(|category| self.settings.is_hidden(category))
        {
            return Err(HelpError::NotFound(id.to_string()));
        }

        let prefix = display_prefix(&ctx.prefixes, &self.settings.bot_name);
        let mut page = Page::new(self.template(ctx)).with_title(capitalize(&command.name));
        page.metadata.description = Some(
            command
                .description
                .clone()
                .unwrap_or_else(|| self.messages.get(keys::HELP_NO_DESCRIPTION)),
        );
        page.push(ContentBlock::new(
            self.messages.get(keys::HELP_USAGE),
            code_block(&format!("{prefix}{}", usage_of(&command))),
            false,
        ));

        if command.is_group {
            let children: Vec<String> = list_subcommands(&command)
                .into_iter()
                .map(|child| child.qualified_name)
                .collect();
            if !children.is_empty() {
                page.push(ContentBlock::new(
                    self.messages.get(keys::HELP_SUBCOMMANDS),
                    format_command_names(&children),
                    false,
                ));
            }
        }
        Ok(page)
    }
}

fn usage_of(command: &CommandEntry) -> &str {
    command.usage.as_deref().unwrap_or(&command.qualified_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{grouped_registry, sample_context, sample_registry};
    use crate::registry::{Plugin, StaticRegistry};

    fn renderer() -> HelpRenderer {
        HelpRenderer::new(HelpSettings::default(), Messages::default_catalogue())
    }

    #[test]
    fn test_display_prefix() {
        let prefixes = vec!["campfire ".to_string(), "camp ".to_string()];
        assert_eq!(display_prefix(&prefixes, "Campfire"), "camp ");
        assert_eq!(display_prefix(&[], "Campfire"), "@Campfire ");
        assert_eq!(display_prefix(&["/".to_string()], "Campfire"), "/");
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = Config::default();
        config.help.plugins_per_page = 3;
        config.embeds.bot_name = "Ember".to_string();
        let settings = HelpSettings::from_config(&config);
        assert_eq!(settings.page_size.get(), 3);
        assert_eq!(settings.bot_name, "Ember");
        assert!(settings.is_hidden("admin"));
    }

    #[test]
    fn test_bot_help_template() {
        let response = renderer().render(&HelpRequest::Bot, &sample_registry(), &sample_context());
        let HelpResponse::Pages(pages) = response else {
            panic!("expected pages, got {response:?}");
        };
        let first = &pages[0];
        assert_eq!(first.metadata.colour, DEFAULT_INFO_COLOUR);
        assert_eq!(first.metadata.author.as_ref().unwrap().name, "Campfire");
        assert_eq!(first.metadata.footer.as_ref().unwrap().text, "Requested by camper#0001");
        assert!(first
            .metadata
            .description
            .as_deref()
            .unwrap()
            .ends_with("The command prefix for the bot is `camp `"));
    }

    #[test]
    fn test_mention_prefix_in_description() {
        let ctx = HelpContext {
            prefixes: Vec::new(),
            ..sample_context()
        };
        let HelpResponse::Pages(pages) = renderer().render(&HelpRequest::Bot, &sample_registry(), &ctx) else {
            panic!("expected pages");
        };
        assert!(pages[0]
            .metadata
            .description
            .as_deref()
            .unwrap()
            .ends_with("`@Campfire`"));
    }

    #[test]
    fn test_command_page() {
        let response = renderer().render(
            &HelpRequest::Command("kick".to_string()),
            &sample_registry(),
            &sample_context(),
        );
        let HelpResponse::Single(page) = response else {
            panic!("expected single page");
        };
        assert_eq!(page.title.as_deref(), Some("Kick"));
        assert_eq!(page.blocks[0].title, "Usage");
        assert_eq!(page.blocks[0].body, "```\ncamp kick <member> [reason]```");
    }

    #[test]
    fn test_group_page_lists_subcommands() {
        let response = renderer().render(
            &HelpRequest::Group("tag".to_string()),
            &grouped_registry(),
            &sample_context(),
        );
        let HelpResponse::Single(page) = response else {
            panic!("expected single page");
        };
        assert_eq!(page.title.as_deref(), Some("Tag"));
        assert_eq!(page.blocks.len(), 2);
        assert_eq!(page.blocks[1].title, "Subcommands");
        assert_eq!(page.blocks[1].body, "`tag add`, `tag remove`");
    }

    #[test]
    fn test_missing_description_falls_back() {
        let response = renderer().render(
            &HelpRequest::Command("tag add".to_string()),
            &grouped_registry(),
            &sample_context(),
        );
        let HelpResponse::Single(page) = response else {
            panic!("expected single page");
        };
        assert_eq!(page.metadata.description.as_deref(), Some("No description provided."));
        assert_eq!(page.blocks[0].body, "```\ncamp tag add```");
    }

    #[test]
    fn test_hidden_plugin_not_found() {
        let response = renderer().render(
            &HelpRequest::Plugin("admin".to_string()),
            &sample_registry(),
            &sample_context(),
        );
        assert_eq!(
            response,
            HelpResponse::NotFound("No command called `admin` found.".to_string())
        );
    }

    #[test]
    fn test_unknown_plugin_not_found() {
        let response = renderer().render(
            &HelpRequest::Plugin("doesnotexist".to_string()),
            &sample_registry(),
            &sample_context(),
        );
        assert_eq!(
            response,
            HelpResponse::NotFound("No command called `doesnotexist` found.".to_string())
        );
    }

    #[test]
    fn test_visible_plugin_without_commands_not_found() {
        let registry: StaticRegistry = [
            Plugin::new("Fun", vec![]),
            Plugin::new("Tags", vec![CommandEntry::group("tag", vec![])]),
        ]
        .into_iter()
        .collect();

        for id in ["fun", "tags"] {
            let response = renderer().render(&HelpRequest::Plugin(id.to_string()), &registry, &sample_context());
            assert_eq!(
                response,
                HelpResponse::NotFound(format!("No command called `{id}` found."))
            );
        }

        let overview = renderer().render(&HelpRequest::Bot, &registry, &sample_context());
        assert!(matches!(overview, HelpResponse::Empty(_)));
    }

    #[test]
    fn test_empty_registry_is_empty() {
        let response = renderer().render(
            &HelpRequest::Bot,
            &crate::registry::StaticRegistry::default(),
            &sample_context(),
        );
        let HelpResponse::Empty(page) = response else {
            panic!("expected empty response");
        };
        assert_eq!(page.metadata.description.as_deref(), Some("There are no commands to show."));
        assert!(page.is_empty());
    }
}
