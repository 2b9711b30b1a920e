//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! Hoare-style: {P} action {Q}. Preconditions are the caller-visible
//! validation rules; postconditions are the engine's own invariants.

use crate::action::{Move, MoveError};
use crate::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use crate::marks::MarkId;
use crate::GameEngine;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: both coordinates lie in `[0, size)`.
pub struct InRange;

impl InRange {
    /// Rejects off-board coordinates.
    pub fn check(mov: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        if engine.board().contains(mov.x, mov.y) {
            Ok(())
        } else {
            Err(MoveError::OutOfRange {
                x: mov.x,
                y: mov.y,
                size: engine.size(),
            })
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects occupied squares.
    pub fn check(mov: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        if engine.board().is_empty(mov.x, mov.y) {
            Ok(())
        } else {
            Err(MoveError::AlreadyTaken { x: mov.x, y: mov.y })
        }
    }
}

/// Precondition: the mark belongs to the game's mark set.
pub struct SupportedMark;

impl SupportedMark {
    /// Rejects marks outside the set, returning the id of a known mark.
    pub fn check(mov: &Move, engine: &GameEngine) -> Result<MarkId, MoveError> {
        engine
            .marks()
            .id_of(&mov.mark)
            .ok_or_else(|| MoveError::UnsupportedMark(mov.mark.clone()))
    }
}

/// Precondition: the mark differs from the previous move's mark.
pub struct MarksAlternate;

impl MarksAlternate {
    /// Rejects a repeat of the last mark, naming its successor.
    pub fn check(mov: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        match engine.last_mark_id() {
            Some(last) if engine.marks().symbol(last) == mov.mark => Err(MoveError::WrongTurn {
                expected: engine.marks().symbol(engine.marks().successor(last)).to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Composite precondition, checked in a fixed order: range, occupancy,
/// mark legality, turn. The first failure wins.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move and returns the id of its mark.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &GameEngine) -> Result<MarkId, MoveError> {
        InRange::check(mov, engine)?;
        SquareIsEmpty::check(mov, engine)?;
        let mark = SupportedMark::check(mov, engine)?;
        MarksAlternate::check(mov, engine)?;
        Ok(mark)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Postconditions: the engine invariants hold and exactly one square was
/// filled.
pub struct MoveContract;

impl Contract<GameEngine, Move> for MoveContract {
    fn pre(engine: &GameEngine, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, engine).map(|_| ())
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = EngineInvariants::check_all(after).err().unwrap_or_default();

        if after.move_count() != before.move_count() + 1 {
            violations.push(InvariantViolation::new("Exactly one square filled per move"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            for v in &violations {
                warn!(violation = %v, "Move postcondition failed");
            }
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_after(moves: &[(usize, usize, &str)]) -> GameEngine {
        let mut engine = GameEngine::new(3).unwrap();
        for &(x, y, m) in moves {
            engine.make_move(x, y, m).unwrap();
        }
        engine
    }

    #[test]
    fn test_precondition_empty_square() {
        let engine = engine_after(&[]);
        assert!(MoveContract::pre(&engine, &Move::new(1, 1, "X")).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let engine = engine_after(&[(1, 1, "X")]);
        assert_eq!(
            MoveContract::pre(&engine, &Move::new(1, 1, "O")),
            Err(MoveError::AlreadyTaken { x: 1, y: 1 })
        );
    }

    #[test]
    fn test_range_checked_before_mark() {
        let engine = engine_after(&[]);
        assert!(matches!(
            MoveContract::pre(&engine, &Move::new(7, 0, "L")),
            Err(MoveError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_occupancy_checked_before_turn() {
        let engine = engine_after(&[(0, 0, "X")]);
        assert!(matches!(
            MoveContract::pre(&engine, &Move::new(0, 0, "X")),
            Err(MoveError::AlreadyTaken { .. })
        ));
    }

    #[test]
    fn test_mark_legality_checked_before_turn() {
        let engine = engine_after(&[(0, 0, "X")]);
        assert_eq!(
            MoveContract::pre(&engine, &Move::new(1, 0, "L")),
            Err(MoveError::UnsupportedMark("L".to_string()))
        );
    }

    #[test]
    fn test_legal_move_returns_mark_id() {
        let engine = engine_after(&[(0, 0, "X")]);
        let o = engine.marks().id_of("O").unwrap();
        assert_eq!(LegalMove::check(&Move::new(1, 0, "O"), &engine), Ok(o));
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let engine = engine_after(&[(0, 0, "X")]);
        assert_eq!(
            MoveContract::pre(&engine, &Move::new(1, 0, "X")),
            Err(MoveError::WrongTurn {
                expected: "O".to_string()
            })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = engine_after(&[]);
        let mut after = before.clone();
        after.make_move(1, 1, "X").unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_missing_placement() {
        let before = engine_after(&[(1, 1, "X")]);
        let after = before.clone();
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
