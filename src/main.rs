mod agent;
mod error;
mod evaluator;
mod minimax;
mod simulation;
mod tic_tac_toe;

#[cfg(test)]
mod properties;

use std::io;

use clap::{Parser, Subcommand, ValueEnum};

use agent::{Agent, HumanAgent, RandomAgent};
use evaluator::Outcome;
use minimax::MinimaxAgent;

/// Tic-tac-toe against a depth-limited minimax agent.
#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(about = "Play or simulate tic-tac-toe between human, random and minimax agents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a single game, printing the board after every move.
    Play {
        /// Agent playing X (moves first).
        #[arg(long, value_enum, default_value_t = AgentKind::Human)]
        x: AgentKind,

        /// Agent playing O.
        #[arg(long, value_enum, default_value_t = AgentKind::Minimax)]
        o: AgentKind,

        /// Seed for the random tie-breaks; X uses the seed, O the seed plus one.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play many games and report win and tie proportions.
    Simulate {
        /// Agent playing X (moves first).
        #[arg(long, value_enum, default_value_t = AgentKind::Minimax)]
        x: AgentKind,

        /// Agent playing O.
        #[arg(long, value_enum, default_value_t = AgentKind::Minimax)]
        o: AgentKind,

        /// Number of games to play.
        #[arg(short, long, default_value = "100")]
        games: usize,

        /// Seed for the random tie-breaks; X uses the seed, O the seed plus one.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AgentKind {
    Human,
    Random,
    Minimax,
}

fn build_agent(kind: AgentKind, seed: Option<u64>) -> Box<dyn Agent> {
    match (kind, seed) {
        (AgentKind::Human, _) => Box::new(HumanAgent::new(agent::stdin_lines(), io::stdout())),
        (AgentKind::Random, Some(seed)) => Box::new(RandomAgent::seeded(seed)),
        (AgentKind::Random, None) => Box::new(RandomAgent::new()),
        (AgentKind::Minimax, Some(seed)) => Box::new(MinimaxAgent::seeded(seed)),
        (AgentKind::Minimax, None) => Box::new(MinimaxAgent::new()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { x, o, seed } => {
            let mut x_agent = build_agent(x, seed);
            let mut o_agent = build_agent(o, seed.map(|seed| seed.wrapping_add(1)));

            let outcome = simulation::play_game(x_agent.as_mut(), o_agent.as_mut(), |board| {
                println!("\n{}", board);
            })?;

            match outcome {
                Outcome::XWins => println!("Player X wins!"),
                Outcome::OWins => println!("Player O wins!"),
                _ => println!("Draw!"),
            }
        }
        Command::Simulate { x, o, games, seed } => {
            let mut x_agent = build_agent(x, seed);
            let mut o_agent = build_agent(o, seed.map(|seed| seed.wrapping_add(1)));

            let stats = simulation::simulate(x_agent.as_mut(), o_agent.as_mut(), games)?;
            println!("{}", stats);
        }
    }

    Ok(())
}
