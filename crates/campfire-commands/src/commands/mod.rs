//! Command plugins. Each command's `category` names its plugin.

pub mod admin;
pub mod general;
pub mod help;
pub mod moderation;
