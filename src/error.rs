//! Defines the error types used across the application and a convenience `Result` alias.
//!
//! Three layers of errors exist:
//! - `DictionaryError`: expected, recoverable failures of dictionary operations.
//! - `CommandError`: a text line that is not a well-formed command.
//! - `AppError`: everything the session itself can fail on (I/O, prompts, configuration).
//!
//! Errors that do not implement `Clone` are wrapped in `Arc` so `AppError` stays cloneable.

use std::sync::Arc;
use thiserror::Error;

/// Failures reported by `MultiStringsDictionary` operations.
///
/// The display text is the fixed message shown to the user. The fields are
/// carried for logging only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The requested key is not in the dictionary.
    #[error("Error, key does not exist.")]
    KeyNotFound { key: String },

    /// The member is already part of the key's set.
    #[error("Error, member already exists for key.")]
    MemberAlreadyExists { key: String, member: String },

    /// The key exists but the member is not part of its set.
    #[error("Error, member does not exist.")]
    MemberNotFound { key: String, member: String },
}

/// A line that could not be turned into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Known command, wrong number of arguments. Holds the usage string.
    #[error("Error, missing or redundant parameter, please use '{0}'.")]
    Usage(&'static str),

    /// The command name is not recognised. Holds the name as typed.
    #[error("ERROR: Unknown command. Please use a valid command or type EXIT to quit.")]
    Unknown(String),
}

/// The primary error enumeration for the session and its setup.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// Error related to standard I/O operations.
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),

    /// Error originating from the interactive prompt (`dialoguer`).
    #[error("Prompt Error: {0}")]
    Prompt(Arc<dialoguer::Error>),

    /// Invalid command-line or environment configuration.
    #[error("Configuration Error: {0}")]
    Config(String),
}

/// A specialized `Result` type using the application's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

// --- From implementations ---

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(Arc::new(err))
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        AppError::Prompt(Arc::new(err))
    }
}
