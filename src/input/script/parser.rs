use std::io::BufRead;

use tracing::debug;

use crate::core::operations::operation::Operation;
use crate::input::script::command::Command;
use crate::input::script::errors::ParseError;

/// Parses a whole script.
///
/// All or nothing: the first bad line aborts parsing and no operations are
/// returned. Blank lines are skipped.
pub fn parse(input: impl BufRead) -> Result<Vec<Operation>, ParseError> {
    let mut operations = Vec::new();

    for (index, line) in input.lines().enumerate() {
        if let Some(operation) = parse_line(&line?, index + 1)? {
            operations.push(operation);
        }
    }

    debug!(operations = operations.len(), "parsed command script");

    Ok(operations)
}

pub fn parse_str(text: &str) -> Result<Vec<Operation>, ParseError> {
    parse(text.as_bytes())
}

/// Parses one line. `Ok(None)` means the line was blank.
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Operation>, ParseError> {
    let mut tokens = line.split_whitespace();

    let Some(verb) = tokens.next() else {
        return Ok(None);
    };

    let command = Command::from_verb(verb).ok_or_else(|| ParseError::UnknownCommand {
        line: line_number,
        verb: verb.to_owned(),
    })?;

    let args: Vec<&str> = tokens.collect();
    if args.len() != command.arity() {
        return Err(ParseError::Arity {
            line: line_number,
            command,
            expected: command.arity(),
            found: args.len(),
        });
    }

    let values = args
        .iter()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|source| ParseError::InvalidNumber {
                    line: line_number,
                    token: (*token).to_owned(),
                    source,
                })
        })
        .collect::<Result<Vec<f64>, ParseError>>()?;

    Ok(Some(command.operation(&values)))
}
