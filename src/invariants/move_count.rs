//! Move count invariant: the counter tracks the board and the history.

use super::Invariant;
use crate::GameEngine;

/// Invariant: move count equals occupied squares equals history length.
pub struct MoveCountInvariant;

impl Invariant<GameEngine> for MoveCountInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let count = engine.move_count();
        engine.board().occupied() == count && engine.history().len() == count
    }

    fn description() -> &'static str {
        "Move count matches occupied squares and history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_through_a_game() {
        let mut engine = GameEngine::new(3).unwrap();
        assert!(MoveCountInvariant::holds(&engine));
        for (x, y, m) in [(0, 0, "X"), (1, 0, "O"), (2, 0, "X")] {
            engine.make_move(x, y, m).unwrap();
            assert!(MoveCountInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_detects_skipped_count() {
        let mut engine = GameEngine::new(3).unwrap();
        engine.make_move(0, 0, "X").unwrap();
        engine.move_count = 0;
        assert!(!MoveCountInvariant::holds(&engine));
    }
}
