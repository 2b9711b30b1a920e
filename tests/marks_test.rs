//! Games with more than two marks.

use strictly_nxn::{GameEngine, GameStatus, MarkSet, MoveError};

fn three_marks() -> GameEngine {
    GameEngine::with_marks(4, MarkSet::new(["X", "O", "Z"]).unwrap()).unwrap()
}

#[test]
fn test_expected_mark_is_cyclic_successor() {
    let mut engine = three_marks();
    engine.make_move(0, 0, "Z").unwrap();
    assert_eq!(engine.next_mark(), Some("X"));
    assert_eq!(
        engine.make_move(1, 0, "Z"),
        Err(MoveError::WrongTurn {
            expected: "X".to_string()
        })
    );

    engine.make_move(1, 0, "O").unwrap();
    assert_eq!(
        engine.make_move(2, 0, "O"),
        Err(MoveError::WrongTurn {
            expected: "Z".to_string()
        })
    );
}

#[test]
fn test_only_immediate_repeats_are_rejected() {
    let mut engine = three_marks();
    engine.make_move(0, 0, "X").unwrap();
    // Z skips O; only repeating X is a wrong turn
    assert_eq!(engine.make_move(1, 0, "Z"), Ok(GameStatus::Continue));
    assert_eq!(engine.make_move(2, 0, "X"), Ok(GameStatus::Continue));
}

#[test]
fn test_three_mark_row_win() {
    let mut engine = three_marks();
    let moves = [
        (0, 0, "X"),
        (0, 1, "O"),
        (0, 2, "Z"),
        (1, 0, "X"),
        (1, 1, "O"),
        (1, 2, "Z"),
        (2, 0, "X"),
        (2, 1, "O"),
        (2, 2, "Z"),
    ];
    for (x, y, m) in moves {
        assert_eq!(engine.make_move(x, y, m), Ok(GameStatus::Continue));
    }
    assert_eq!(engine.make_move(3, 0, "X"), Ok(GameStatus::Winner));
    assert_eq!(engine.winner(), Some("X"));
}

#[test]
fn test_default_marks_reject_third_symbol() {
    let mut engine = GameEngine::new(3).unwrap();
    assert_eq!(
        engine.make_move(0, 0, "Z"),
        Err(MoveError::UnsupportedMark("Z".to_string()))
    );
}
