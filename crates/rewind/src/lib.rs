//! Rewind - tic-tac-toe with a clickable move history
//!
//! Front end for [`rewind_tictactoe`]: an interactive terminal UI driven by
//! mouse clicks and keys, plus a headless replay command.
//!
//! # Architecture
//!
//! - **CLI**: `play` (default) and `replay`
//! - **Config**: optional TOML settings, `.env`, `RUST_LOG`
//! - **TUI**: event loop, app state, shared layout for drawing and clicks
//! - **Text**: plain-text rendering of a [`GameView`](rewind_tictactoe::GameView)

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod text;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings};
pub use replay::run_replay;
pub use text::render_text;
