//! First-class move type and move errors.
//!
//! Moves are domain events, not side effects. They carry the caller's
//! intent and can be validated independently of execution.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed at a square.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
    /// Symbol of the mark being placed.
    pub mark: String,
}

impl Move {
    /// Creates a new move.
    #[instrument(skip(mark))]
    pub fn new(x: usize, y: usize, mark: impl Into<String>) -> Self {
        Self {
            x,
            y,
            mark: mark.into(),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.mark, self.x, self.y)
    }
}

/// Why a move was rejected. The engine is unchanged after any of these.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A coordinate is outside `[0, size)`.
    #[display("Move out of range: ({}, {}) on a {}x{} board", x, y, size, size)]
    OutOfRange {
        /// Column requested.
        x: usize,
        /// Row requested.
        y: usize,
        /// Board side.
        size: usize,
    },

    /// The square already holds a mark.
    #[display("Position ({}, {}) already taken", x, y)]
    AlreadyTaken {
        /// Column requested.
        x: usize,
        /// Row requested.
        y: usize,
    },

    /// The mark is not part of this game's mark set.
    #[display("Not valid mark '{}'", _0)]
    UnsupportedMark(String),

    /// The mark repeats the previous move's mark.
    #[display("Invalid mark, '{}' was expected instead", expected)]
    WrongTurn {
        /// Cyclic successor of the previous mark.
        expected: String,
    },
}

impl std::error::Error for MoveError {}
