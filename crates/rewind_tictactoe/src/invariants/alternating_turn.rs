//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: the mark added at step `n` belongs to the player of step `n - 1`.
///
/// First move is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history
            .windows(2)
            .enumerate()
            .all(|(n, pair)| {
                let expected = Square::Occupied(Player::for_step(n));
                pair[0]
                    .squares()
                    .iter()
                    .zip(pair[1].squares())
                    .filter(|(before, after)| before != after)
                    .all(|(_, after)| *after == expected)
            })
    }

    fn description() -> &'static str {
        "Players alternate turns, X first"
    }
}
