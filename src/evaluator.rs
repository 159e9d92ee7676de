//! Winning lines, terminal detection and the static evaluation used by search.

use crate::tic_tac_toe::{Board, Cell, Player};

pub type Line = [usize; 3];

pub type Score = i32;

pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Value of an uncontested line, indexed by how many marks it holds.
pub const WEIGHTS: [Score; 4] = [0, 1, 10, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    XWins,
    OWins,
    Tie,
    InProgress,
}

fn count_marks(board: &Board, line: &Line, player: Player) -> usize {
    line.iter()
        .filter(|&&index| board[index] == Cell::Filled(player))
        .count()
}

pub fn has_won(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| count_marks(board, line, player) == 3)
}

pub fn is_over(board: &Board) -> bool {
    has_won(board, Player::X) || has_won(board, Player::O) || board.open_cells().next().is_none()
}

/// Boards where both players hold a line cannot arise from alternating play,
/// so X is reported first without further checks.
pub fn outcome(board: &Board) -> Outcome {
    let x_won = has_won(board, Player::X);
    let o_won = has_won(board, Player::O);
    debug_assert!(!(x_won && o_won), "both players hold a line:\n{}", board);

    if x_won {
        Outcome::XWins
    } else if o_won {
        Outcome::OWins
    } else if is_over(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}

/// Sums `WEIGHTS` over lines held only by `player`, minus lines held only by
/// the opponent. Blocked and untouched lines count for nothing.
pub fn heuristic(board: &Board, player: Player) -> Score {
    let opponent = player.opponent();
    LINES
        .iter()
        .map(|line| {
            let own = count_marks(board, line, player);
            let theirs = count_marks(board, line, opponent);
            match (own, theirs) {
                (0, 0) => 0,
                (own, 0) => WEIGHTS[own],
                (0, theirs) => -WEIGHTS[theirs],
                _ => 0,
            }
        })
        .sum()
}
