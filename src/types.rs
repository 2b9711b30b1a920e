//! Core domain types: squares, the board, and move statuses.

use crate::marks::MarkId;
use serde::{Deserialize, Serialize};

/// Smallest legal board side.
pub const MIN_SIZE: usize = 3;

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a mark.
    Occupied(MarkId),
}

impl Square {
    /// Mark on the square, if any.
    pub fn mark(self) -> Option<MarkId> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// Square N×N board, row-major, `x` is the column and `y` the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board. Size validation belongs to the engine.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.size && y < self.size).then(|| y * self.size + x)
    }

    /// Whether `(x, y)` lies on the board.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.index(x, y).is_some()
    }

    /// Square at `(x, y)`, or `None` off the board.
    pub fn get(&self, x: usize, y: usize) -> Option<Square> {
        self.index(x, y).map(|i| self.squares[i])
    }

    /// Sets the square at `(x, y)`. Returns false off the board.
    pub(crate) fn set(&mut self, x: usize, y: usize, square: Square) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.squares[i] = square;
                true
            }
            None => false,
        }
    }

    /// Checks if a square is empty. Off-board squares are not empty.
    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Some(Square::Empty))
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Squares of row `y`, left to right, or `None` off the board.
    pub fn row(&self, y: usize) -> Option<&[Square]> {
        (y < self.size).then(|| {
            let start = y * self.size;
            &self.squares[start..start + self.size]
        })
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size)
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

/// Outcome of a single move attempt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum GameStatus {
    /// The move was placed and play goes on.
    #[strum(serialize = "continue")]
    Continue,
    /// The move completed a line.
    #[strum(serialize = "winner")]
    Winner,
    /// The move filled the last square without completing a line.
    #[strum(serialize = "draw")]
    Draw,
    /// The game was already over; nothing was placed.
    #[strum(serialize = "already finished")]
    AlreadyFinished,
}

impl GameStatus {
    /// True for the statuses that end a game.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Winner | GameStatus::Draw)
    }
}
