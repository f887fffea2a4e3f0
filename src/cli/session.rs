//! The read-eval-print loop.
//!
//! A `Session` pulls lines from a `LineSource`, hands them to the
//! `Interpreter`, and writes each `Reply` out. Regular output goes to one
//! writer and dictionary failures to another, mirroring stdout and stderr.

use crate::cli::{Interpreter, Reply, EXIT_MESSAGE};
use crate::error::Result;
use colored::*;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{BufRead, ErrorKind, Write};
use tracing::{debug, info};

pub const WELCOME_MESSAGE: &str = "Welcome to the APP!";

/// Where input lines come from.
pub enum LineSource {
    /// Interactive terminal prompt.
    Prompt {
        theme: ColorfulTheme,
        prompt: String,
    },
    /// Any buffered reader: piped stdin or a script file.
    Reader(Box<dyn BufRead>),
}

impl LineSource {
    pub fn prompt(prompt: impl Into<String>) -> Self {
        LineSource::Prompt {
            theme: ColorfulTheme::default(),
            prompt: prompt.into(),
        }
    }

    pub fn reader(reader: impl BufRead + 'static) -> Self {
        LineSource::Reader(Box::new(reader))
    }

    /// Returns the next line without its trailing newline, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` or `AppError::Prompt` if reading fails.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        match self {
            LineSource::Prompt { theme, prompt } => {
                let input = Input::<String>::with_theme(&*theme)
                    .with_prompt(prompt.as_str())
                    .allow_empty(true)
                    .interact_text();
                match input {
                    Ok(line) => Ok(Some(line)),
                    // Ctrl+D / closed terminal
                    Err(dialoguer::Error::IO(e)) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
                    Err(e) => Err(e.into()),
                }
            },
            LineSource::Reader(reader) => {
                let mut line = String::new();
                if reader.read_line(&mut line)? == 0 {
                    return Ok(None);
                }
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Ok(Some(line))
            },
        }
    }
}

/// Output settings for a session.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub banner: bool,
    pub color: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            banner: true,
            color: true,
        }
    }
}

/// Drives an `Interpreter` from a `LineSource` until `EXIT` or end of input.
pub struct Session {
    interpreter: Interpreter,
    options: SessionOptions,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            interpreter: Interpreter::new(),
            options,
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Runs the loop, writing replies to `out` and failures to `err`.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    /// Command and dictionary errors are reported to the writers instead.
    pub fn run<O: Write, E: Write>(
        &mut self,
        source: &mut LineSource,
        out: &mut O,
        err: &mut E,
    ) -> Result<()> {
        if self.options.banner {
            writeln!(out, "{}", self.paint(WELCOME_MESSAGE, |s| s.cyan().bold()))?;
        }

        let mut lines_read = 0usize;
        while let Some(line) = source.next_line()? {
            lines_read += 1;
            match self.interpreter.execute_line(line.trim()) {
                Reply::Output(lines) => {
                    for line in lines {
                        writeln!(out, "{line}")?;
                    }
                },
                Reply::Failure(failure) => {
                    writeln!(err, "{}", self.paint(&failure.to_string(), |s| s.red()))?;
                },
                Reply::Exit => {
                    writeln!(out, "{}", self.paint(EXIT_MESSAGE, |s| s.green()))?;
                    info!(lines_read, "session ended by EXIT");
                    return flush_both(out, err);
                },
                Reply::Nothing => {},
            }
            out.flush()?;
        }

        debug!(lines_read, "end of input reached");
        flush_both(out, err)
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.options.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

fn flush_both<O: Write, E: Write>(out: &mut O, err: &mut E) -> Result<()> {
    out.flush()?;
    err.flush()?;
    Ok(())
}
