use anyhow::Context;
use clap::Parser;
use colored::*;
use multidict::cli::{Cli, LineSource, Session};
use multidict::config::Config;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

fn main() {
    if let Err(e) = run() {
        error!("Application failed: {:?}", e);
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Allow env-backed options to come from a .env file
    dotenv::dotenv().ok();

    let config = Config::from_cli(Cli::parse()).context("Invalid configuration")?;
    if !config.session.color {
        colored::control::set_override(false);
    }

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&config).context("Failed to initialize logging")?;

    info!(?config, "Starting multidict session");

    let mut source = match &config.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input script {}", path.display()))?;
            LineSource::reader(BufReader::new(file))
        },
        None if io::stdin().is_terminal() => LineSource::prompt(config.prompt.clone()),
        None => LineSource::reader(BufReader::new(io::stdin())),
    };

    let mut session = Session::new(config.session);
    session
        .run(&mut source, &mut io::stdout(), &mut io::stderr())
        .context("Session aborted")?;

    let dict = session.interpreter().dictionary();
    info!(
        keys = dict.len(),
        members = dict.member_count(),
        "Session finished"
    );
    Ok(())
}

/// Sets up the `tracing` subscriber, writing to stderr or to `--log-file`.
fn init_logging(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let (writer, guard) = match &config.log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        },
        None => (BoxMakeWriter::new(io::stderr), None),
    };

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(writer)
        .with_ansi(config.log_file.is_none() && config.session.color)
        .init();

    Ok(guard)
}
