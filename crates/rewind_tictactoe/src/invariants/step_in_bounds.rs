//! Step pointer invariant: the displayed step names a recorded board.

use super::super::GameState;
use super::Invariant;

/// Invariant: `step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.step < state.history.len()
    }

    fn description() -> &'static str {
        "Step pointer lies within history"
    }
}
