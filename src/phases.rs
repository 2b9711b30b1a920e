//! Game phases and outcomes.

use crate::marks::MarkId;
use serde::{Deserialize, Serialize};

/// Where an engine is in its lifecycle.
///
/// `Fresh` and `InProgress` accept moves. `Won` and `Drawn` answer every
/// move with [`GameStatus::AlreadyFinished`](crate::GameStatus) until reset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Phase {
    /// No move made since construction or reset.
    Fresh,
    /// At least one move made, no outcome yet.
    InProgress,
    /// A line was completed.
    Won,
    /// The board filled without a completed line.
    Drawn,
}

impl Phase {
    /// Whether moves are still placed in this phase.
    pub fn accepts_moves(self) -> bool {
        matches!(self, Phase::Fresh | Phase::InProgress)
    }
}

/// A full line through the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// Row `y`.
    #[display("row {}", _0)]
    Row(usize),
    /// Column `x`.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right, `x == y`.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left, `x + y == size - 1`.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line.
    Winner {
        /// The winning mark.
        mark: MarkId,
        /// The completed line.
        line: Line,
    },
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<MarkId> {
        match self {
            Outcome::Winner { mark, .. } => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Phase an engine with this outcome is in.
    pub fn phase(&self) -> Phase {
        match self {
            Outcome::Winner { .. } => Phase::Won,
            Outcome::Draw => Phase::Drawn,
        }
    }
}
