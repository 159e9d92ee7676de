use thiserror::Error;

/// Errors raised by the board and the search engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("illegal move: cell {index} is occupied or out of range")]
    IllegalMove { index: usize },

    #[error("no legal moves available")]
    NoLegalMove,
}
