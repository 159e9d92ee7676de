use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::agent::Agent;
use crate::error::GameError;
use crate::evaluator::{heuristic, is_over, Score};
use crate::tic_tac_toe::{Board, Player};

/// Plies searched below each root move.
pub const SEARCH_DEPTH: u32 = 2;

/// Scores `board` with depth-limited minimax.
///
/// Leaves are always evaluated from `player`'s point of view, whichever side
/// is to move there. `maximizing` says whether `player` moves next.
pub fn minimax(board: &Board, depth: u32, maximizing: bool, player: Player) -> Score {
    if is_over(board) || depth == 0 {
        return heuristic(board, player);
    }

    if maximizing {
        board
            .children(player)
            .map(|(_, child)| minimax(&child, depth - 1, false, player))
            .fold(Score::MIN, Score::max)
    } else {
        board
            .children(player.opponent())
            .map(|(_, child)| minimax(&child, depth - 1, true, player))
            .fold(Score::MAX, Score::min)
    }
}

/// Scores every legal move of `player`, in ascending cell order.
pub fn score_moves(board: &Board, player: Player) -> Vec<(usize, Score)> {
    board
        .children(player)
        .map(|(index, child)| (index, minimax(&child, SEARCH_DEPTH, false, player)))
        .collect()
}

pub struct MinimaxAgent<R = StdRng> {
    rng: R,
}

impl MinimaxAgent<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MinimaxAgent<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Picks uniformly among the moves sharing the best root score.
    pub fn choose_move(&mut self, board: &Board, player: Player) -> Result<usize, GameError> {
        let scores = score_moves(board, player);
        trace!("root scores for {}: {:?}", player, scores);

        let best = scores
            .iter()
            .map(|&(_, score)| score)
            .max()
            .ok_or(GameError::NoLegalMove)?;
        let maximal: Vec<usize> = scores
            .iter()
            .filter(|&&(_, score)| score == best)
            .map(|&(index, _)| index)
            .collect();

        let choice = *maximal.choose(&mut self.rng).ok_or(GameError::NoLegalMove)?;
        debug!(
            "{} plays {} (score {}, {} of {} moves tied)",
            player,
            choice,
            best,
            maximal.len(),
            scores.len()
        );
        Ok(choice)
    }
}

impl<R: Rng> Agent for MinimaxAgent<R> {
    fn select_move(&mut self, board: &Board, player: Player) -> anyhow::Result<usize> {
        Ok(self.choose_move(board, player)?)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}
