//! Text command language: one instruction per line, whitespace separated.
//!
//! ```text
//! white
//! bgrect 0.25 0.25 0.75 0.75
//! figure 0.5 0.5
//! update
//! ```

pub mod command;
pub mod errors;
pub mod parser;

pub use command::Command;
pub use errors::ParseError;
pub use parser::{parse, parse_line, parse_str};
