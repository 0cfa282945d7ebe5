//! Input adapters that turn outside input into operations.

#[cfg(feature = "gui")]
pub mod gui;
pub mod script;
