use std::io;
use std::num::ParseFloatError;

use thiserror::Error;

use crate::input::script::command::Command;

/// Why a command script was rejected. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: unknown command `{verb}`")]
    UnknownCommand { line: usize, verb: String },

    #[error("line {line}: `{command}` takes {expected} argument(s), got {found}")]
    Arity {
        line: usize,
        command: Command,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: `{token}` is not a number")]
    InvalidNumber {
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("failed to read commands")]
    Io(#[from] io::Error),
}

impl ParseError {
    /// The offending line, when the error is tied to one.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::UnknownCommand { line, .. }
            | Self::Arity { line, .. }
            | Self::InvalidNumber { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}
