//! First-class action types for the game engine.
//!
//! Actions are user intents, not side effects. The engine folds them into
//! its state through [`GameState::reduce`](super::GameState::reduce).

use super::Position;
use serde::{Deserialize, Serialize};

/// Something a player asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Action {
    /// Place the active player's mark on a square of the displayed board.
    #[display("place at {}", _0)]
    Place(Position),
    /// Display an earlier (or later) board from history.
    #[display("jump to step {}", _0)]
    JumpTo(usize),
}

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already has a winner or is full.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Why a history jump was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The step does not name a recorded board.
    #[display("Step {} is outside history of length {}", step, len)]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// Number of boards in history.
        len: usize,
    },
}

impl std::error::Error for JumpError {}
