use std::io::{self, BufRead};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::controllers::painter::EventLoop;
use crate::input::script::parse_line;

/// Posts every valid line from `input` until EOF.
///
/// Unlike a whole script, a bad interactive line is logged and skipped.
pub(crate) fn forward_lines(input: impl BufRead, event_loop: &EventLoop) {
    for (index, line) in input.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!(error = %err, "stopped reading commands");
                return;
            }
        };

        match parse_line(&line, index + 1) {
            Ok(Some(operation)) => event_loop.post(operation),
            Ok(None) => {}
            Err(err) => warn!(error = %err, "ignored command"),
        }
    }

    debug!("command input closed");
}

pub(crate) fn spawn_stdin_reader(event_loop: Arc<EventLoop>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("painter-stdin".to_owned())
        .spawn(move || forward_lines(io::stdin().lock(), &event_loop))
}
