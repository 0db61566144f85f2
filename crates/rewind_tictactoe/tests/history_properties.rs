//! Property tests for the history engine.

use proptest::prelude::*;
use rewind_tictactoe::invariants::{HistoryInvariants, InvariantSet};
use rewind_tictactoe::{Action, Board, GameState, Player, Position, rules};

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0usize..9).prop_map(|i| Action::Place(Position::ALL[i])),
        1 => (0usize..12).prop_map(Action::JumpTo),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    prop::collection::vec(prop_oneof![Just(None), Just(Some(Player::X)), Just(Some(Player::O))], 9)
        .prop_map(|marks| {
            Position::ALL
                .iter()
                .zip(marks)
                .fold(Board::new(), |board, (&pos, mark)| match mark {
                    Some(player) => board.with_mark(pos, player),
                    None => board,
                })
        })
}

proptest! {
    #[test]
    fn prop_invariants_hold(actions in prop::collection::vec(action(), 0..40)) {
        let state = actions.into_iter().fold(GameState::new(), GameState::reduce);
        prop_assert!(HistoryInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn prop_history_k_has_k_marks(order in Just((0usize..9).collect::<Vec<_>>()).prop_shuffle()) {
        let state = GameState::replay(&order);
        for (k, board) in state.history().iter().enumerate() {
            prop_assert_eq!(board.occupied_count(), k);
        }
    }

    #[test]
    fn prop_rejected_move_changes_nothing(
        actions in prop::collection::vec(action(), 0..30),
        cell in 0usize..9,
    ) {
        let mut state = actions.into_iter().fold(GameState::new(), GameState::reduce);
        let pos = Position::ALL[cell];
        let decided = rules::check_winner(state.current()).is_some();
        let occupied = !state.current().is_empty(pos);
        let before = state.clone();

        state.apply_move(pos);

        if decided || occupied {
            prop_assert_eq!(state, before);
        } else {
            prop_assert_eq!(state.step(), before.step() + 1);
            prop_assert_eq!(state.len(), before.step() + 2);
        }
    }

    #[test]
    fn prop_jump_parity(actions in prop::collection::vec(action(), 0..30), target in 0usize..10) {
        let mut state = actions.into_iter().fold(GameState::new(), GameState::reduce);
        let len = state.len();
        state.jump_to(target);
        if target < len {
            prop_assert_eq!(state.step(), target);
            prop_assert_eq!(state.active_player() == Player::X, target % 2 == 0);
            prop_assert_eq!(state.len(), len);
        }
    }

    #[test]
    fn prop_winner_iff_uniform_line(board in board()) {
        let uniform = rules::win::LINES.iter().any(|&[a, b, c]| {
            board.get(a).player().is_some()
                && board.get(a) == board.get(b)
                && board.get(b) == board.get(c)
        });
        prop_assert_eq!(rules::check_winner(&board).is_some(), uniform);
    }
}
