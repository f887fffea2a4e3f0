//! An interactive dictionary that maps string keys to sets of string members.
//!
//! - [`dictionary`]: the `MultiStringsDictionary` data structure.
//! - [`cli`]: command parsing, the interpreter and the REPL session.
//! - [`config`]: validated runtime settings.
//! - [`error`]: error types shared by all of the above.

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
