//! Rewind tic-tac-toe - game engine with time-travel history
//!
//! The engine keeps every board produced so far and a step pointer that
//! selects the displayed one. Players can jump back to any earlier board and
//! continue from there, which discards the boards that followed it.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: pure win and draw checks over a single board
//! - **Engine**: [`GameState`] with the `(State, Action) -> State` transition
//! - **Invariants**: history properties asserted after every transition
//! - **View**: [`GameView`], the stateless projection a front end draws
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Action, GameState, GameView, Position};
//!
//! let state = GameState::new()
//!     .reduce(Action::Place(Position::Center))
//!     .reduce(Action::Place(Position::TopLeft))
//!     .reduce(Action::JumpTo(1));
//!
//! let view = GameView::project(&state);
//! assert_eq!(view.status_text(), "Next player: O");
//! assert_eq!(view.moves.len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;
mod view;

pub use action::{Action, JumpError, MoveError};
pub use engine::GameState;
pub use position::Position;
pub use status::GameStatus;
pub use types::{Board, Player, Square};
pub use view::{CellView, GameView, MoveEntry, StatusLine};
