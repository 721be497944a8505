use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ide-setup-actions", version, about = "Install target custom actions")]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (defaults to the platform config dir)")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Session property file (JSON object)")]
    pub session: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Select the install drive and set INSTALLFOLDER.
    SelectDrive,
    /// Validate INSTALLFOLDER and record the outcome.
    ValidatePath {
        #[arg(long, help = "Set INSTALLFOLDER before validating")]
        path: Option<String>,
    },
    /// Print the candidate drive probe results as JSON.
    Probe,
    /// Print the session properties as JSON.
    Show,
}
