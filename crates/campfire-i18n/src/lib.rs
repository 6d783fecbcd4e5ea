//! # Campfire I18n
//!
//! User-facing text for Campfire, stored as Fluent messages.
//!
//! The en-US catalogue is embedded into the binary and validated by the
//! build script, so a malformed `.ftl` file fails the build rather than a
//! command at runtime.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod loader;
pub mod messages;

pub use loader::*;
pub use messages::*;
