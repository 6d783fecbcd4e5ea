//! # Campfire Bot
//!
//! A utility Discord bot with a paginated help command.
//!
//! This is the main binary crate that wires configuration, logging and the
//! Poise framework together and keeps the gateway connection running.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;

pub use bot::*;
pub use error::*;
