//! Command-line interface for timetravel_tui.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with a rewindable move history
#[derive(Parser, Debug)]
#[command(name = "timetravel_tui")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Tui,

    /// Read commands from stdin (`play N`, `jump N`, `sort`, `show`)
    Script {
        /// Print the full view as JSON after each command
        #[arg(long)]
        json: bool,
    },
}
