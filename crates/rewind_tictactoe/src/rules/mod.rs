//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board). They know nothing
//! about history or whose turn it is.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line};
