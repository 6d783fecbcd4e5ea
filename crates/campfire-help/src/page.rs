//! Framework-independent embed pages.

/// One titled field of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    /// Field name.
    pub title: String,
    /// Field value.
    pub body: String,
    /// Whether the field may share a row with its neighbours.
    pub inline: bool,
}

impl ContentBlock {
    /// Creates a block.
    pub fn new(title: impl Into<String>, body: impl Into<String>, inline: bool) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            inline,
        }
    }
}

/// Embed author line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedAuthor {
    /// Display name.
    pub name: String,
    /// Avatar URL.
    pub icon_url: Option<String>,
}

/// Embed footer line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedFooter {
    /// Footer text.
    pub text: String,
    /// Icon URL.
    pub icon_url: Option<String>,
}

/// Everything a page carries besides its title and fields. Cloned into every
/// page so pages never share state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    /// Sidebar colour as `0xRRGGBB`.
    pub colour: u32,
    /// Text above the fields.
    pub description: Option<String>,
    /// Author line.
    pub author: Option<EmbedAuthor>,
    /// Footer line.
    pub footer: Option<EmbedFooter>,
}

/// A single embed worth of help output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Embed title, e.g. `Page 1/2` or a command name.
    pub title: Option<String>,
    /// Colour, description, author and footer.
    pub metadata: PageMetadata,
    /// Fields in display order.
    pub blocks: Vec<ContentBlock>,
}

impl Page {
    /// An empty page carrying `metadata`.
    pub const fn new(metadata: PageMetadata) -> Self {
        Self {
            title: None,
            metadata,
            blocks: Vec::new(),
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends a field.
    pub fn push(&mut self, block: ContentBlock) {
        self.blocks.push(block);
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the page has no fields.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
