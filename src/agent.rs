use std::io::{self, Write};

use anyhow::{bail, Context};
use log::warn;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};

use crate::error::GameError;
use crate::tic_tac_toe::{Board, Player};

/// Anything that can pick a cell for `player` on `board`.
///
/// The returned index must be one of `board.open_cells()`; drivers reject
/// anything else with `GameError::IllegalMove`.
pub trait Agent {
    fn select_move(&mut self, board: &Board, player: Player) -> anyhow::Result<usize>;

    fn name(&self) -> &str;
}

pub struct RandomAgent<R = StdRng> {
    rng: R,
}

impl RandomAgent<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomAgent<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Agent for RandomAgent<R> {
    fn select_move(&mut self, board: &Board, _player: Player) -> anyhow::Result<usize> {
        let choice = board
            .open_cells()
            .choose(&mut self.rng)
            .ok_or(GameError::NoLegalMove)?;
        Ok(choice)
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Lines from stdin, taking the lock only for the duration of each read so
/// that two human players can share the terminal.
pub fn stdin_lines() -> impl Iterator<Item = io::Result<String>> {
    std::iter::from_fn(|| {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(line)),
            Err(err) => Some(Err(err)),
        }
    })
}

/// Reads moves from a line-oriented input, prompting on `output`.
pub struct HumanAgent<I, W> {
    input: I,
    output: W,
}

impl<I, W> HumanAgent<I, W>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }
}

impl<I, W> Agent for HumanAgent<I, W>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    fn select_move(&mut self, board: &Board, player: Player) -> anyhow::Result<usize> {
        let moves: Vec<usize> = board.open_cells().collect();
        if moves.is_empty() {
            bail!(GameError::NoLegalMove);
        }

        loop {
            write!(self.output, "Select position for {} from {:?}: ", player, moves)?;
            self.output.flush()?;

            let line = match self.input.next() {
                Some(line) => line.context("failed to read move")?,
                None => bail!("input closed before {} chose a move", player),
            };

            match line.trim().parse::<usize>() {
                Ok(index) if board.is_legal(index) => return Ok(index),
                Ok(index) => {
                    warn!("rejected move {} for {}", index, player);
                    writeln!(self.output, "Cell {} is not available.", index)?;
                }
                Err(_) => {
                    warn!("unparsable move {:?} for {}", line.trim(), player);
                    writeln!(self.output, "Enter a cell number.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        "human"
    }
}
