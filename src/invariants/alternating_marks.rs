//! Alternating marks invariant: no mark is used twice in a row.

use super::Invariant;
use crate::GameEngine;

/// Invariant: consecutive moves use different marks, every mark in the
/// history belongs to the set, and the turn state names the last mark.
pub struct AlternatingMarksInvariant;

impl Invariant<GameEngine> for AlternatingMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        if history.iter().any(|m| engine.marks().id_of(&m.mark).is_none()) {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        history.last().map(|m| m.mark.as_str()) == engine.last_mark()
    }

    fn description() -> &'static str {
        "Consecutive moves use different marks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MarkSet, Move};

    #[test]
    fn test_fresh_engine_holds() {
        let engine = GameEngine::new(3).unwrap();
        assert!(AlternatingMarksInvariant::holds(&engine));
    }

    #[test]
    fn test_three_mark_cycle_holds() {
        let marks = MarkSet::new(["A", "B", "C"]).unwrap();
        let mut engine = GameEngine::with_marks(4, marks).unwrap();
        for (x, y, m) in [(0, 0, "A"), (1, 0, "C"), (2, 0, "B"), (3, 0, "A")] {
            engine.make_move(x, y, m).unwrap();
        }
        assert!(AlternatingMarksInvariant::holds(&engine));
    }

    #[test]
    fn test_repeated_mark_violates() {
        let mut engine = GameEngine::new(3).unwrap();
        engine.make_move(0, 0, "X").unwrap();

        // Force X twice; make_move would refuse this
        engine.history.push(Move::new(1, 1, "X"));
        assert!(!AlternatingMarksInvariant::holds(&engine));
    }
}
