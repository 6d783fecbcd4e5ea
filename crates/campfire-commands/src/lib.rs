//! # Campfire Commands
//!
//! Discord command implementations using Poise framework for Campfire.
//!
//! This crate provides the General, Moderation and Admin plugins, the `help`
//! command backed by `campfire-help`, and the framework-wide error handler.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod embeds;
pub mod error;
pub mod framework;
pub mod registry;
pub mod reputation;
pub mod responder;

pub use error::*;
pub use framework::*;
pub use registry::*;
pub use reputation::*;
pub use responder::*;
