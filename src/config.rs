//! Validated runtime configuration built from the parsed command line.
//!
//! Environment variables (and a `.env` file, loaded by `main` before parsing)
//! feed into the CLI through clap's `env` support, so this is the single
//! place where the final settings are checked.

use crate::cli::{Cli, SessionOptions};
use crate::error::{AppError, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct Config {
    /// Script to run instead of reading stdin.
    pub input: Option<PathBuf>,
    pub prompt: String,
    pub session: SessionOptions,
    /// Filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Builds the configuration from CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the prompt is empty, the input script
    /// does not exist, or the log filter cannot be parsed.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let prompt = cli.prompt.trim().to_string();
        if prompt.is_empty() {
            return Err(AppError::Config("prompt must not be empty".to_string()));
        }

        if let Some(path) = &cli.input {
            if !path.is_file() {
                return Err(AppError::Config(format!(
                    "input script {} does not exist or is not a file",
                    path.display()
                )));
            }
        }

        EnvFilter::try_new(&cli.log_level).map_err(|e| {
            AppError::Config(format!("invalid log level '{}': {}", cli.log_level, e))
        })?;

        Ok(Self {
            input: cli.input,
            prompt,
            session: SessionOptions {
                banner: !cli.no_banner,
                color: !cli.no_color,
            },
            log_level: cli.log_level,
            log_file: cli.log_file,
        })
    }

    /// The filter for the log subscriber: `RUST_LOG` if set, otherwise the configured level.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }
}
