//! Game status of a single displayed board.

use super::rules::{check_winner, is_draw};
use super::{Board, Player};
use serde::{Deserialize, Serialize};

/// Current status of the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still possible.
    InProgress,
    /// The board has a completed line.
    Won(Player),
    /// The board is full with no completed line.
    Draw,
}

impl GameStatus {
    /// Evaluates a board.
    pub fn of(board: &Board) -> Self {
        if let Some(winner) = check_winner(board) {
            GameStatus::Won(winner)
        } else if is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true if no further move is accepted on this board.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
