use std::io::{BufRead, Write};

use tracing::debug;

use super::MoveSource;
use crate::error::MoveSourceError;
use crate::game::{GameState, COLS};

/// Human player typing column numbers (1-7) on a line-based console.
///
/// Lines that are not a number are answered with a hint and a fresh prompt;
/// they never reach the engine. Numbers outside 1-7 are passed through so
/// the engine can reject them.
pub struct ConsoleHuman<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleHuman<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        ConsoleHuman {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleHuman<R, W> {
    fn next_column(&mut self, _state: &GameState) -> Result<isize, MoveSourceError> {
        loop {
            write!(self.output, "Your move (1-{COLS}, q to quit): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(MoveSourceError::InputClosed);
            }

            let answer = line.trim();
            if answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit") {
                return Err(MoveSourceError::Quit);
            }
            match answer.parse::<isize>() {
                Ok(number) => return Ok(number.saturating_sub(1)),
                Err(_) => {
                    debug!(input = answer, "ignoring non-numeric move");
                    writeln!(self.output, "Please enter a column number.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
