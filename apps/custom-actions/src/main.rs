//! Installer custom action host.
//!
//! Loads the session property bag from a JSON file, runs one custom action
//! against it, saves it back and exits with the action's host result.

mod actions;
mod cli;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ide_setup_session::ActionResult;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::Config;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // Logs go to stderr; stdout carries JSON output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting custom action host");

    let session_path = cli
        .session
        .unwrap_or_else(|| PathBuf::from(&config.session_path));

    let result = actions::run(&cli.command, &session_path)?;
    Ok(match result {
        ActionResult::Success => ExitCode::SUCCESS,
        ActionResult::Failure => ExitCode::FAILURE,
    })
}
