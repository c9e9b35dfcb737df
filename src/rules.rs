//! Built-in alias tables.

#[path = "rules/aliases.rs"]
pub(crate) mod aliases;
