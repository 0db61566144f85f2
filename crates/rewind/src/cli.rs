//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use rewind_tictactoe::Position;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a clickable move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "rewind.toml", global = true)]
    pub config: PathBuf,

    /// Override the log file from the settings
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal (mouse and keyboard)
    Play,

    /// Apply moves without a terminal UI and print the resulting view
    Replay {
        /// Cells in row-major order, as an index 0-8 or a label such as
        /// `center` or `top-left`, played alternately by X and O
        #[arg(value_parser = parse_cell)]
        cells: Vec<usize>,

        /// Display this history step after the moves are applied
        #[arg(long)]
        jump: Option<usize>,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn parse_cell(s: &str) -> Result<usize, String> {
    Position::from_label_or_number(s)
        .map(Position::to_index)
        .ok_or_else(|| format!("'{}' is not a cell index (0-8) or label", s))
}
