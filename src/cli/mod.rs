//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod run;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Gradewatch - homework review status watcher.
#[derive(Parser, Debug)]
#[command(name = "gradewatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the status watcher (foreground)
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,

    /// Override the pause between poll cycles, in seconds
    #[arg(long)]
    pub poll_period: Option<u64>,
}

/// Subcommands for `gradewatch check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file and credentials
    Config(ConfigPathArg),
    /// Send a test message through the Telegram bot
    Telegram(ConfigPathArg),
}

#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}
