//! # Campfire Common
//!
//! Shared types, utilities, and common functionality for Campfire.
//!
//! This crate provides the error type, the text helpers used when building
//! embeds, and the tracing bootstrap shared by every other crate in the
//! workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use utils::*;
