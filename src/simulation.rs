use std::fmt;

use anyhow::Context;
use log::{debug, info, warn};

use crate::agent::Agent;
use crate::evaluator::{is_over, outcome, Outcome};
use crate::tic_tac_toe::{Board, Player};

/// Plays one game, X first, calling `on_board` with the opening board and
/// after every placement.
pub fn play_game<'a, F>(
    x_agent: &mut (dyn Agent + 'a),
    o_agent: &mut (dyn Agent + 'a),
    mut on_board: F,
) -> anyhow::Result<Outcome>
where
    F: FnMut(&Board),
{
    let mut board = Board::new();
    let mut player = Player::X;
    on_board(&board);

    while !is_over(&board) {
        let agent = match player {
            Player::X => &mut *x_agent,
            Player::O => &mut *o_agent,
        };
        let index = agent
            .select_move(&board, player)
            .with_context(|| format!("{} agent failed to move for {}", agent.name(), player))?;
        board = board
            .place(index, player)
            .with_context(|| format!("{} agent chose an illegal move for {}", agent.name(), player))?;
        debug!("{} ({}) played {}", player, agent.name(), index);

        on_board(&board);
        player = player.opponent();
    }

    Ok(outcome(&board))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    pub x_wins: usize,
    pub o_wins: usize,
    pub ties: usize,
}

impl SimulationStats {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::XWins => self.x_wins += 1,
            Outcome::OWins => self.o_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::InProgress => warn!("ignoring unfinished game"),
        }
    }

    pub fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.ties
    }

    pub fn x_win_rate(&self) -> f64 {
        self.rate(self.x_wins)
    }

    pub fn o_win_rate(&self) -> f64 {
        self.rate(self.o_wins)
    }

    pub fn tie_rate(&self) -> f64 {
        self.rate(self.ties)
    }

    fn rate(&self, count: usize) -> f64 {
        match self.games() {
            0 => 0.0,
            games => count as f64 / games as f64,
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "X win - {}%", (self.x_win_rate() * 100.0) as u32)?;
        writeln!(f, "O win - {}%", (self.o_win_rate() * 100.0) as u32)?;
        write!(f, "Tie - {}%", (self.tie_rate() * 100.0) as u32)
    }
}

pub fn simulate<'a>(
    x_agent: &mut (dyn Agent + 'a),
    o_agent: &mut (dyn Agent + 'a),
    games: usize,
) -> anyhow::Result<SimulationStats> {
    info!("simulating {} games: {} (X) vs {} (O)", games, x_agent.name(), o_agent.name());

    let mut stats = SimulationStats::default();
    for game in 0..games {
        let result = play_game(x_agent, o_agent, |_| {}).with_context(|| format!("game {} failed", game + 1))?;
        debug!("game {} finished: {:?}", game + 1, result);
        stats.record(result);
    }

    info!(
        "finished {} games: {} X wins, {} O wins, {} ties",
        stats.games(),
        stats.x_wins,
        stats.o_wins,
        stats.ties
    );
    Ok(stats)
}
