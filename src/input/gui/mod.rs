//! Window front end.
//!
//! Shows the most recently published frame, posts script lines read from stdin,
//! and turns left clicks into a figure plus an update.

pub mod app;
pub mod events;
mod stdin;

pub use app::run_gui;
