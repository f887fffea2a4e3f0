use clap::Parser;
use std::path::PathBuf;

/// Interactive dictionary of string keys to sets of string members
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read commands from this file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Prompt shown in interactive mode
    #[arg(long, env = "MULTIDICT_PROMPT", default_value = "multidict")]
    pub prompt: String,

    /// Do not print the welcome banner
    #[arg(long)]
    pub no_banner: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "multidict=trace")
    #[arg(long, env = "MULTIDICT_LOG", default_value = "warn")]
    pub log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "MULTIDICT_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}
