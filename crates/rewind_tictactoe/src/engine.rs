//! History-keeping game engine for tic-tac-toe.
//!
//! The engine stores every board produced so far plus a step pointer that
//! selects the displayed one. Whose turn it is follows from the parity of
//! the step pointer and is never stored.

use super::action::{Action, JumpError, MoveError};
use super::invariants::assert_invariants;
use super::rules::check_winner;
use super::{Board, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Authoritative game state: board history and the displayed step.
///
/// `history[0]` is always the empty board and `step < history.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) history: Vec<Board>,
    pub(crate) step: usize,
}

impl GameState {
    /// Creates a game with only the empty board in history.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
        }
    }

    /// Replays a sequence of cell indices from a fresh game.
    ///
    /// Rejected moves are skipped, as they would be if clicked.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Self {
        cells
            .iter()
            .filter_map(|&cell| Position::from_index(cell))
            .fold(Self::new(), |state, pos| state.reduce(Action::Place(pos)))
    }

    /// The displayed board.
    pub fn current(&self) -> &Board {
        &self.history[self.step]
    }

    /// Every board recorded so far, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed board.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of boards in history.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// The player who moves next on the displayed board.
    pub fn active_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.current())
    }

    /// Winner of the displayed board.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current())
    }

    /// Empty squares on the displayed board, or none once it is decided.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_over() {
            Vec::new()
        } else {
            Position::valid_moves(self.current())
        }
    }

    /// Places the active player's mark, reporting why a move is refused.
    ///
    /// History after the displayed step is discarded before the new board
    /// is appended.
    #[instrument(skip(self), fields(step = self.step, player = %self.active_player()))]
    pub fn try_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }

        let current = *self.current();
        if !current.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let next = current.with_mark(pos, self.active_player());
        self.history.truncate(self.step + 1);
        self.history.push(next);
        self.step = self.history.len() - 1;

        debug!(new_step = self.step, "Move applied");
        assert_invariants(self);
        Ok(())
    }

    /// Places the active player's mark; refused moves change nothing.
    pub fn apply_move(&mut self, pos: Position) {
        if let Err(e) = self.try_move(pos) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Moves the step pointer, reporting out-of-range steps.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn try_jump(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::OutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.step = step;
        debug!("Jumped");
        assert_invariants(self);
        Ok(())
    }

    /// Moves the step pointer; out-of-range steps change nothing.
    pub fn jump_to(&mut self, step: usize) {
        if let Err(e) = self.try_jump(step) {
            debug!(error = %e, "Jump ignored");
        }
    }

    /// Applies an action in place.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Place(pos) => self.apply_move(pos),
            Action::JumpTo(step) => self.jump_to(step),
        }
    }

    /// State transition function: `(State, Action) -> State`.
    ///
    /// Refused actions return the state unchanged.
    #[instrument(skip(self))]
    pub fn reduce(mut self, action: Action) -> Self {
        self.dispatch(action);
        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
