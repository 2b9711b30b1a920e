//! Serializable, owned view of an engine.

use crate::engine::GameEngine;
use crate::phases::{Line, Phase};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Point-in-time copy of everything a caller can read from an engine.
///
/// Marks are stored as symbols so the snapshot stands on its own.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Side length.
    size: usize,
    /// Rows top to bottom, `None` for an empty square.
    rows: Vec<Vec<Option<String>>>,
    /// Marks placed so far.
    move_count: usize,
    /// Whether the game is won or drawn.
    finished: bool,
    /// Lifecycle phase.
    phase: Phase,
    /// Winning mark, if any.
    winner: Option<String>,
    /// Completed line, if any.
    winning_line: Option<Line>,
    /// Mark expected next, if a move has been made.
    next_mark: Option<String>,
}

impl GameSnapshot {
    /// Status line for display.
    pub fn status_string(&self) -> String {
        match (self.phase, &self.winner, &self.next_mark) {
            (Phase::Fresh, _, _) => "Ready to start. Any mark may open.".to_string(),
            (Phase::InProgress, _, Some(next)) => format!("In progress. '{}' to move.", next),
            (Phase::InProgress, _, None) => "In progress.".to_string(),
            (Phase::Won, Some(winner), _) => format!("Game over. '{}' wins!", winner),
            (Phase::Won, None, _) => "Game over.".to_string(),
            (Phase::Drawn, _, _) => "Game over. Draw!".to_string(),
        }
    }
}

impl From<&GameEngine> for GameSnapshot {
    fn from(engine: &GameEngine) -> Self {
        let size = engine.size();
        let rows = (0..size)
            .map(|y| {
                (0..size)
                    .map(|x| engine.mark_at(x, y).map(str::to_string))
                    .collect()
            })
            .collect();

        Self {
            size,
            rows,
            move_count: engine.move_count(),
            finished: engine.is_finished(),
            phase: engine.phase(),
            winner: engine.winner().map(str::to_string),
            winning_line: engine.winning_line(),
            next_mark: engine.next_mark().map(str::to_string),
        }
    }
}
