//! Runs parsed commands against the dictionary and formats their results.
//!
//! The interpreter does no I/O itself: every line of input produces a `Reply`
//! that the session prints.

use crate::cli::Command;
use crate::dictionary::MultiStringsDictionary;
use crate::error::{CommandError, DictionaryError};
use tracing::{debug, info, warn};

/// Printed in place of an enumeration that has nothing to list.
pub const EMPTY_SET_MESSAGE: &str = "(empty set)";
/// Printed when the user leaves with `EXIT`.
pub const EXIT_MESSAGE: &str = "Exiting the application.";

/// The result of interpreting one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Lines for standard output.
    Output(Vec<String>),
    /// A dictionary operation failed; its message goes to standard error.
    Failure(DictionaryError),
    /// The session should stop after printing the farewell line.
    Exit,
    /// Nothing to print (blank input).
    Nothing,
}

impl Reply {
    fn line(text: impl Into<String>) -> Self {
        Reply::Output(vec![text.into()])
    }

    /// Numbers the entries from 1, or prints the empty-set marker.
    fn enumerate<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: std::fmt::Display,
    {
        let lines: Vec<String> = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| format!("{}) {}", i + 1, entry))
            .collect();
        if lines.is_empty() {
            Reply::line(EMPTY_SET_MESSAGE)
        } else {
            Reply::Output(lines)
        }
    }
}

impl From<CommandError> for Reply {
    fn from(err: CommandError) -> Self {
        Reply::line(err.to_string())
    }
}

impl From<DictionaryError> for Reply {
    fn from(err: DictionaryError) -> Self {
        Reply::Failure(err)
    }
}

/// Owns the dictionary for the lifetime of a session.
#[derive(Debug, Default)]
pub struct Interpreter {
    dict: MultiStringsDictionary,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the underlying dictionary.
    pub fn dictionary(&self) -> &MultiStringsDictionary {
        &self.dict
    }

    /// Parses and runs one input line.
    pub fn execute_line(&mut self, line: &str) -> Reply {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Reply::Nothing,
            Err(err) => {
                debug!(line, error = ?err, "rejected input line");
                err.into()
            },
        }
    }

    /// Runs a parsed command.
    pub fn execute(&mut self, command: Command) -> Reply {
        debug!(?command, "executing command");
        let mutation = command.is_mutation();

        let reply = match self.run(command) {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = ?err, "dictionary operation failed");
                return err.into();
            },
        };

        if mutation {
            info!(
                keys = self.dict.len(),
                members = self.dict.member_count(),
                "dictionary updated"
            );
        }
        reply
    }

    fn run(&mut self, command: Command) -> Result<Reply, DictionaryError> {
        let reply = match command {
            Command::Add { key, value } => {
                self.dict.add(&key, &value)?;
                Reply::line("Added")
            },
            Command::Keys => Reply::enumerate(self.dict.keys()),
            Command::Members { key } => Reply::enumerate(self.dict.members(&key)?),
            Command::Remove { key, value } => {
                self.dict.remove_member(&key, &value)?;
                Reply::line("Removed")
            },
            Command::RemoveAll { key } => {
                self.dict.remove_all_members(&key)?;
                Reply::line("Removed")
            },
            Command::Clear => {
                self.dict.clear();
                Reply::line("Cleared")
            },
            Command::KeyExists { key } => Reply::line(self.dict.key_exists(&key).to_string()),
            Command::MemberExists { key, value } => {
                Reply::line(self.dict.member_exists(&key, &value)?.to_string())
            },
            Command::AllMembers => Reply::enumerate(self.dict.all_members().flatten()),
            Command::Items => Reply::enumerate(self.dict.items()),
            Command::Exit => Reply::Exit,
        };
        Ok(reply)
    }
}
