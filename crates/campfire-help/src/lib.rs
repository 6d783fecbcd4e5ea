//! # Campfire Help
//!
//! The help renderer behind Campfire's `help` command.
//!
//! Nothing in this crate knows about Discord. A [`CommandRegistry`] snapshot
//! goes in, a [`HelpRequest`] picks the rendering path, and the resulting
//! [`Page`]s are handed to a [`HelpResponder`] that turns them into embeds.
//!
//! ```
//! use campfire_help::{format_command_names, paginate, ContentBlock, PageMetadata};
//! use std::num::NonZeroUsize;
//!
//! assert_eq!(format_command_names(&["ban", "kick"]), "`ban`, `kick`");
//!
//! let blocks = vec![
//!     ContentBlock::new("General", "`about`", false),
//!     ContentBlock::new("Moderation", "`ban`", false),
//! ];
//! let pages = paginate(blocks, NonZeroUsize::MIN, &PageMetadata::default());
//! assert_eq!(pages[1].title.as_deref(), Some("Page 2/2"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod format;
pub mod page;
pub mod paginate;
pub mod registry;
pub mod render;
pub mod request;
pub mod responder;

#[cfg(any(test, feature = "testing"))]
pub mod fixtures;

pub use error::*;
pub use format::*;
pub use page::*;
pub use paginate::*;
pub use registry::*;
pub use render::*;
pub use request::*;
pub use responder::*;
