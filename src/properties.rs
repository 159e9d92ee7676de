//! Property-based tests over boards reached through legal alternating play.

use proptest::prelude::*;

use crate::evaluator::{has_won, heuristic, is_over, outcome, Outcome, LINES, WEIGHTS};
use crate::minimax::{score_moves, MinimaxAgent};
use crate::tic_tac_toe::{Board, Cell, Player};

/// Replays random legal moves from the empty board, stopping once the game
/// is decided. Returns the board and the player to move.
fn arb_reachable_board() -> impl Strategy<Value = (Board, Player)> {
    proptest::collection::vec(0usize..9, 0..=9).prop_map(|picks| {
        let mut board = Board::new();
        let mut player = Player::X;
        for pick in picks {
            if is_over(&board) {
                break;
            }
            let open: Vec<usize> = board.open_cells().collect();
            board = board.place(open[pick % open.len()], player).unwrap();
            player = player.opponent();
        }
        (board, player)
    })
}

fn arb_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

proptest! {
    #[test]
    fn prop_outcome_in_progress_iff_not_over((board, _) in arb_reachable_board()) {
        prop_assert_eq!(outcome(&board) == Outcome::InProgress, !is_over(&board));
    }

    #[test]
    fn prop_no_double_win((board, _) in arb_reachable_board()) {
        prop_assert!(!(has_won(&board, Player::X) && has_won(&board, Player::O)));
    }

    #[test]
    fn prop_place_leaves_input_untouched(
        (board, player) in arb_reachable_board(),
        pick in 0usize..9,
    ) {
        let open: Vec<usize> = board.open_cells().collect();
        prop_assume!(!open.is_empty());
        let index = open[pick % open.len()];

        let before = board;
        let next = board.place(index, player).unwrap();
        prop_assert_eq!(board, before);
        prop_assert_eq!(board[index], Cell::Empty);
        prop_assert_eq!(next[index], Cell::Filled(player));
        prop_assert_eq!(next.open_cells().count(), open.len() - 1);
    }

    #[test]
    fn prop_choose_move_is_open(
        (board, player) in arb_reachable_board(),
        seed in any::<u64>(),
    ) {
        prop_assume!(!is_over(&board));
        let choice = MinimaxAgent::seeded(seed).choose_move(&board, player).unwrap();
        prop_assert!(board.open_cells().any(|index| index == choice));

        let best = score_moves(&board, player).into_iter().map(|(_, score)| score).max();
        let chosen = score_moves(&board, player)
            .into_iter()
            .find(|&(index, _)| index == choice)
            .map(|(_, score)| score);
        prop_assert_eq!(chosen, best);
    }

    #[test]
    fn prop_heuristic_is_pure((board, _) in arb_reachable_board(), player in arb_player()) {
        prop_assert_eq!(heuristic(&board, player), heuristic(&board, player));
        prop_assert_eq!(heuristic(&board, player), -heuristic(&board, player.opponent()));
    }

    #[test]
    fn prop_uncontested_win_scores_at_least_a_hundred((board, _) in arb_reachable_board()) {
        for player in [Player::X, Player::O] {
            let opponent_holds_a_line = LINES.iter().any(|line| {
                line.iter().any(|&index| board[index] == Cell::Filled(player.opponent()))
                    && line.iter().all(|&index| board[index] != Cell::Filled(player))
            });
            if has_won(&board, player) && !opponent_holds_a_line {
                prop_assert!(heuristic(&board, player) >= WEIGHTS[3]);
                prop_assert!(heuristic(&board, player.opponent()) <= -WEIGHTS[3]);
            }
        }
    }
}
