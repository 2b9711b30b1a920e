//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::types::{Board, Square};
use crate::GameEngine;

/// Invariant: replaying the history onto an empty board, with every target
/// square empty beforehand, reproduces the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::new(engine.size());

        for mov in engine.history() {
            let Some(mark) = engine.marks().id_of(&mov.mark) else {
                return false;
            };

            // Square must be empty before placing
            if !reconstructed.is_empty(mov.x, mov.y) {
                return false;
            }

            reconstructed.set(mov.x, mov.y, Square::Occupied(mark));
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        let engine = GameEngine::new(3).unwrap();
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_finished_game_holds() {
        let mut engine = GameEngine::new(3).unwrap();
        for (x, y, m) in [(0, 0, "X"), (2, 0, "O"), (0, 1, "X"), (1, 1, "O"), (0, 2, "X")] {
            engine.make_move(x, y, m).unwrap();
        }
        assert!(engine.is_finished());
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut engine = GameEngine::new(3).unwrap();
        engine.make_move(1, 1, "X").unwrap();

        let o = engine.marks.id_of("O").unwrap();
        engine.board.set(1, 1, Square::Occupied(o));
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }
}
