//! Gridhunt CLI - play the treasure hunt interactively or run scripted games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Gridhunt - a turn-based treasure hunt on a bounded grid
#[derive(Parser, Debug)]
#[command(name = "gridhunt")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive TUI: place pieces, then steer the hunter
    Play {
        /// Grid width (default: 10)
        #[arg(long, default_value = "10")]
        width: u16,

        /// Grid height (default: 10)
        #[arg(long, default_value = "10")]
        height: u16,
    },

    /// Run a scripted game from a scenario file
    Run {
        /// Scenario file (JSON)
        #[arg(required = true)]
        scenario: std::path::PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress the per-command log
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play { width, height } => cli::play::execute(width, height),

        Commands::Run {
            scenario,
            format,
            quiet,
        } => cli::run::execute(&scenario, format, quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
