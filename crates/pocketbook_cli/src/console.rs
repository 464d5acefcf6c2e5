//! Line-oriented console I/O for the interactive menus.
//!
//! # Invariants
//! - End of input is reported as `None` by `read_line`, never as an error.
//! - ID parsing happens here; invalid IDs never reach the stores.

use pocketbook_core::RecordId;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

/// User typed something that is not a record ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidId(pub String);

impl Display for InvalidId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid ID: `{}`", self.0)
    }
}

impl Error for InvalidId {}

/// Parses a record ID typed by the user.
pub fn parse_record_id(text: &str) -> Result<RecordId, InvalidId> {
    let trimmed = text.trim();
    trimmed
        .parse::<RecordId>()
        .map_err(|_| InvalidId(trimmed.to_string()))
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Prints `label` and reads one line without its line ending.
    ///
    /// Returns `None` at end of input.
    pub fn read_line(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Like `read_line`, but end of input reads as an empty answer.
    pub fn ask(&mut self, label: &str) -> io::Result<String> {
        Ok(self.read_line(label)?.unwrap_or_default())
    }

    /// Reads an optional replacement value; blank input keeps the old one.
    pub fn ask_change(&mut self, label: &str) -> io::Result<Option<String>> {
        let answer = self.ask(&format!("{label} (leave blank to keep): "))?;
        Ok(Some(answer).filter(|value| !value.trim().is_empty()))
    }

    /// Reads a record ID, reporting invalid input to the user.
    pub fn ask_id(&mut self, label: &str) -> io::Result<Option<RecordId>> {
        let answer = self.ask(label)?;
        match parse_record_id(&answer) {
            Ok(id) => Ok(Some(id)),
            Err(err) => {
                self.say(err)?;
                Ok(None)
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
