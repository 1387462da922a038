//! Command-line interface for strictly_rps.

use clap::{Parser, Subcommand};

/// Strictly RPS - rock-scissors-paper against the computer
#[derive(Parser, Debug)]
#[command(name = "strictly_rps")]
#[command(about = "Rock-scissors-paper in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively against the computer
    Play {
        /// Path to the settings file (defaults are used if it doesn't exist)
        #[arg(short, long, default_value = "rps.toml")]
        config: std::path::PathBuf,

        /// Your display name (prompted for if not set here or in the config)
        #[arg(short, long)]
        name: Option<String>,

        /// Rounds per session
        #[arg(short, long)]
        rounds: Option<usize>,
    },

    /// Watch two computer players play a full session
    Demo {
        /// Rounds to play
        #[arg(short, long, default_value = "10")]
        rounds: usize,
    },
}
