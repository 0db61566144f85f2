//! Single-mark invariant: each step adds exactly one mark.

use super::super::{GameState, Position, Square};
use super::Invariant;

/// Invariant: consecutive boards differ in exactly one square, empty to occupied.
///
/// Boards are never edited in place, so no earlier mark disappears.
pub struct SingleMarkInvariant;

impl SingleMarkInvariant {
    /// Positions that changed between two boards.
    fn changed(before: &[Square; 9], after: &[Square; 9]) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| before[pos.to_index()] != after[pos.to_index()])
            .collect()
    }
}

impl Invariant<GameState> for SingleMarkInvariant {
    fn holds(state: &GameState) -> bool {
        state.history.windows(2).all(|pair| {
            let (before, after) = (pair[0].squares(), pair[1].squares());
            match Self::changed(before, after).as_slice() {
                [pos] => {
                    before[pos.to_index()] == Square::Empty
                        && after[pos.to_index()] != Square::Empty
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each step adds exactly one mark to an empty square"
    }
}
