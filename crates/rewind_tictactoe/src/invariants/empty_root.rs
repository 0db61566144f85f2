//! Root invariant: history starts from the empty board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: `history[0]` is the empty board.
pub struct EmptyRootInvariant;

impl Invariant<GameState> for EmptyRootInvariant {
    fn holds(state: &GameState) -> bool {
        state.history.first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
