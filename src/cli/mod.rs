//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes the command-line arguments, parsing of text commands, the interpreter
//! that runs them against the dictionary, and the interactive session loop.

mod args;
mod commands;
mod interpreter;
mod session;

pub use args::*;
pub use commands::*;
pub use interpreter::*;
pub use session::*;
