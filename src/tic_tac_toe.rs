use std::fmt;
use std::ops::Index;

use crate::error::GameError;

pub const CELL_COUNT: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Filled(Player),
}

/// A 3x3 grid stored row-major, so `index = row * 3 + col`.
///
/// Boards are plain values: `place` hands back a new board and leaves the
/// receiver untouched, which lets search branches share a parent freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    pub fn is_legal(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(Cell::Empty))
    }

    pub fn place(&self, index: usize, player: Player) -> Result<Board, GameError> {
        if !self.is_legal(index) {
            return Err(GameError::IllegalMove { index });
        }
        Ok(self.filled(index, player))
    }

    /// Indices of the empty cells in ascending order.
    pub fn open_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
    }

    /// Every board reachable by `player` in one move, keyed by the cell played.
    pub fn children(&self, player: Player) -> impl Iterator<Item = (usize, Board)> + '_ {
        self.open_cells()
            .map(move |index| (index, self.filled(index, player)))
    }

    fn filled(&self, index: usize, player: Player) -> Board {
        let mut next = *self;
        next.cells[index] = Cell::Filled(player);
        next
    }

    /// Builds a board from a nine character layout such as `"XO.X....O"`.
    #[cfg(test)]
    pub(crate) fn from_layout(layout: &str) -> Board {
        let mut board = Board::new();
        for (index, symbol) in layout.chars().enumerate() {
            board.cells[index] = match symbol {
                'X' => Cell::Filled(Player::X),
                'O' => Cell::Filled(Player::O),
                _ => Cell::Empty,
            };
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Board {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Empty => write!(f, "{} ", row * 3 + col)?,
                    Cell::Filled(player) => write!(f, "{} ", player)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
