//! Stateless projection of a [`GameState`] into what a front end shows.
//!
//! Every frame is derived from scratch: the view holds no state of its own
//! and each displayed element carries the [`Action`] it triggers.

use super::{Action, GameState, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status line shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum StatusLine {
    /// The displayed board has a winner.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The displayed board is full with no winner.
    #[display("Draw")]
    Draw,
    /// Moves are still possible.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub step: usize,
    /// Label shown to the user.
    pub label: String,
    /// Whether this is the displayed step.
    pub current: bool,
}

impl MoveEntry {
    /// Label for history index `step`.
    pub fn label_for(step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        }
    }

    /// Action bound to this entry.
    pub fn action(&self) -> Action {
        Action::JumpTo(self.step)
    }
}

/// One square of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct CellView {
    /// Which square this is.
    pub position: Position,
    /// Mark on the square, if any.
    pub mark: Option<Player>,
    /// Whether the square belongs to the completed line.
    pub highlighted: bool,
}

impl CellView {
    /// Action bound to this cell.
    pub fn action(&self) -> Action {
        Action::Place(self.position)
    }

    /// Text shown in the cell; empty squares show nothing.
    pub fn text(&self) -> String {
        self.mark.map(|p| p.to_string()).unwrap_or_default()
    }
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Status line.
    pub status: StatusLine,
    /// Move list, one entry per history board.
    pub moves: Vec<MoveEntry>,
    /// The nine cells in index order.
    pub cells: [CellView; 9],
}

impl GameView {
    /// Projects the engine state.
    #[instrument(skip(state), fields(step = state.step(), len = state.len()))]
    pub fn project(state: &GameState) -> Self {
        let board = state.current();
        let status = match state.status() {
            GameStatus::Won(player) => StatusLine::Winner(player),
            GameStatus::Draw => StatusLine::Draw,
            GameStatus::InProgress => StatusLine::NextPlayer(state.active_player()),
        };

        let moves = (0..state.len())
            .map(|m| MoveEntry::new(m, MoveEntry::label_for(m), m == state.step()))
            .collect();

        let line = super::rules::winning_line(board);
        let cells = Position::ALL.map(|pos| {
            let highlighted = line.is_some_and(|l| l.contains(&pos));
            CellView::new(pos, board.get(pos).player(), highlighted)
        });

        Self {
            status,
            moves,
            cells,
        }
    }

    /// Status text.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_new_game() {
        let view = GameView::project(&GameState::new());
        assert_eq!(view.status_text(), "Next player: X");
        assert_eq!(view.moves.len(), 1);
        assert_eq!(view.moves[0].label, "Go to game start");
        assert!(view.moves[0].current);
        assert!(view.cells.iter().all(|c| c.mark.is_none() && !c.highlighted));
    }

    #[test]
    fn test_project_won_game_highlights_line() {
        let view = GameView::project(&GameState::replay(&[0, 4, 1, 3, 2]));
        assert_eq!(view.status_text(), "Winner: X");
        assert_eq!(view.moves[5].label, "Go to move #5");
        let highlighted: Vec<usize> = view
            .cells
            .iter()
            .filter(|c| c.highlighted)
            .map(|c| c.position.to_index())
            .collect();
        assert_eq!(highlighted, [0, 1, 2]);
    }

    #[test]
    fn test_bound_actions() {
        let view = GameView::project(&GameState::replay(&[4]));
        assert_eq!(view.cells[7].action(), Action::Place(Position::BottomCenter));
        assert_eq!(view.moves[1].action(), Action::JumpTo(1));
        assert_eq!(view.cells[4].text(), "X");
        assert_eq!(view.cells[0].text(), "");
    }
}
