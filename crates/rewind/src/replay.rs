//! Headless replay of a move sequence.

use crate::text::render_text;
use anyhow::{Context, Result};
use rewind_tictactoe::{GameState, GameView, Position};
use tracing::{debug, info, instrument};

/// Plays `cells` from a fresh game, optionally jumps, and renders the view.
///
/// Refused moves are skipped exactly as a click on them would be. A jump
/// outside the recorded history is reported as an error.
#[instrument]
pub fn run_replay(
    cells: &[usize],
    jump: Option<usize>,
    json: bool,
    show_cell_numbers: bool,
) -> Result<String> {
    let mut state = GameState::new();
    for &cell in cells {
        let pos = Position::from_index(cell)
            .with_context(|| format!("Cell {} is not on the board", cell))?;
        if let Err(e) = state.try_move(pos) {
            debug!(cell, error = %e, "Move skipped");
        }
    }

    if let Some(step) = jump {
        state
            .try_jump(step)
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }

    info!(len = state.len(), step = state.step(), "Replay finished");

    let view = GameView::project(&state);
    if json {
        Ok(serde_json::to_string_pretty(&view)?)
    } else {
        Ok(render_text(&view, show_cell_numbers))
    }
}
