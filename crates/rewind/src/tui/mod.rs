//! Terminal front end.

mod app;
mod input;
mod layout;
mod terminal;
mod ui;

pub use app::App;
pub use layout::Regions;
pub use ui::draw;

use crate::config::Settings;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
///
/// The terminal is restored before returning, also when setup or the loop
/// fails, and before a panic message is printed.
#[instrument(skip_all)]
pub fn run(settings: &Settings) -> Result<()> {
    info!("Starting Rewind TUI");

    let mut guard = terminal::TerminalGuard::enter().context("Failed to prepare terminal")?;
    terminal::install_panic_hook();
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = App::new(*settings.show_cell_numbers());
    let tick = Duration::from_millis(*settings.tick_rate_ms());
    let res = run_app(&mut terminal, app, tick);

    let restored = guard.restore();
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res?;
    restored.context("Failed to restore terminal")
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    tick: Duration,
) -> Result<()> {
    loop {
        let frame = terminal.draw(|f| draw(f, &app))?;
        app.set_area(frame.area);

        if !event::poll(tick)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }

        if app.should_quit() {
            info!(moves = app.state().len() - 1, "Leaving");
            return Ok(());
        }
    }
}
