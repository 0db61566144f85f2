//! Rewind - Unified CLI
//!
//! Tic-tac-toe with a clickable move history.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rewind::{Cli, Command, Settings, logging, run_replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::load(&cli.config)?;
    if let Some(log_file) = cli.log_file {
        settings = settings.with_log_file(log_file);
    }
    logging::init_tracing(&settings)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run(&settings),
        Command::Replay { cells, jump, json } => {
            info!(moves = cells.len(), "Running replay");
            let output = run_replay(&cells, jump, json, *settings.show_cell_numbers())?;
            print!("{}", output);
            Ok(())
        }
    }
}
