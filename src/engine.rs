//! The N×N tic-tac-toe rules engine.

use crate::action::{Move, MoveError};
use crate::config::GameConfig;
use crate::contracts::LegalMove;
#[cfg(debug_assertions)]
use crate::contracts::{Contract, MoveContract};
use crate::error::{GameError, SizeError};
use crate::marks::{MarkId, MarkSet};
use crate::phases::{Line, Outcome, Phase};
use crate::rules;
use crate::snapshot::GameSnapshot;
use crate::types::{Board, GameStatus, Square};
use tracing::{debug, info, instrument, warn};

/// Board, turn state, and move counter for one game.
///
/// The only mutation is [`make_move`](Self::make_move) (or its
/// [`apply`](Self::apply) form) and [`reset`](Self::reset). A move that
/// fails validation returns a [`MoveError`] and leaves the engine as it
/// was. A valid move after the game ended is not an error: it returns
/// [`GameStatus::AlreadyFinished`] and places nothing.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) marks: MarkSet,
    pub(crate) last_mark: Option<MarkId>,
    pub(crate) move_count: usize,
    pub(crate) finished: bool,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates a `size`×`size` game with marks "X" and "O".
    ///
    /// # Errors
    ///
    /// Returns [`SizeError`] when `size` is below 3 or when `size * size`
    /// squares cannot be addressed.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, SizeError> {
        Self::with_marks(size, MarkSet::default())
    }

    /// Creates a `size`×`size` game with the given marks in turn order.
    #[instrument(skip(marks), fields(marks = marks.len()))]
    pub fn with_marks(size: usize, marks: MarkSet) -> Result<Self, SizeError> {
        let size = SizeError::check(size)?;
        debug!("Creating engine");
        Ok(Self {
            board: Board::new(size),
            marks,
            last_mark: None,
            move_count: 0,
            finished: false,
            outcome: None,
            history: Vec::new(),
        })
    }

    /// Creates a game from a configuration.
    #[instrument(skip(config), fields(size = config.size()))]
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        let marks = config.mark_set()?;
        Ok(Self::with_marks(*config.size(), marks)?)
    }

    /// Starts over on an empty `size`×`size` board, keeping the marks.
    ///
    /// On error the engine is untouched.
    #[instrument(skip(self), fields(old_size = self.size()))]
    pub fn reset(&mut self, size: usize) -> Result<(), SizeError> {
        let size = SizeError::check(size)?;
        self.board = Board::new(size);
        self.last_mark = None;
        self.move_count = 0;
        self.finished = false;
        self.outcome = None;
        self.history.clear();
        debug!("Engine reset");
        Ok(())
    }

    /// Places `mark` at column `x`, row `y`.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// range, occupancy, supported mark, turn.
    pub fn make_move(&mut self, x: usize, y: usize, mark: &str) -> Result<GameStatus, MoveError> {
        self.apply(&Move::new(x, y, mark))
    }

    /// Applies a [`Move`]. See [`make_move`](Self::make_move).
    ///
    /// In debug builds every placement also clones the engine and checks
    /// the [`invariants`](crate::invariants), which replays the whole
    /// history. That makes a debug move O(size²); release builds skip it and
    /// stay O(size).
    #[instrument(skip(self), fields(move_count = self.move_count))]
    pub fn apply(&mut self, mov: &Move) -> Result<GameStatus, MoveError> {
        let mark = match LegalMove::check(mov, self) {
            Ok(mark) => mark,
            Err(e) => {
                warn!(error = %e, "Move rejected");
                return Err(e);
            }
        };

        if self.finished {
            debug!("Game already finished, nothing placed");
            return Ok(GameStatus::AlreadyFinished);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(mov.x, mov.y, Square::Occupied(mark));
        self.move_count += 1;
        self.last_mark = Some(mark);
        self.history.push(mov.clone());
        debug!(%mov, "Mark placed");

        let status = if let Some(line) = rules::completed_line(&self.board, mov.x, mov.y, mark) {
            self.finish(Outcome::Winner { mark, line });
            GameStatus::Winner
        } else if rules::is_draw(self.move_count, self.size()) {
            self.finish(Outcome::Draw);
            GameStatus::Draw
        } else {
            GameStatus::Continue
        };

        #[cfg(debug_assertions)]
        {
            let checked = MoveContract::post(&before, self);
            debug_assert!(checked.is_ok(), "Move postcondition failed: {:?}", checked);
        }

        Ok(status)
    }

    fn finish(&mut self, outcome: Outcome) {
        self.finished = true;
        self.outcome = Some(outcome);
        match outcome {
            Outcome::Winner { mark, line } => {
                info!(winner = self.marks.symbol(mark), %line, moves = self.move_count, "Game won");
            }
            Outcome::Draw => info!(moves = self.move_count, "Game drawn"),
        }
    }

    /// Builds a game from `config` and plays `moves` in order.
    ///
    /// Returns the engine and one status per move. Stops at the first
    /// rejected move.
    #[instrument(skip(config, moves), fields(moves = moves.len()))]
    pub fn replay(config: &GameConfig, moves: &[Move]) -> Result<(Self, Vec<GameStatus>), GameError> {
        let mut engine = Self::from_config(config)?;
        let mut statuses = Vec::with_capacity(moves.len());
        for mov in moves {
            statuses.push(engine.apply(mov)?);
        }
        Ok((engine, statuses))
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The marks in turn order.
    pub fn marks(&self) -> &MarkSet {
        &self.marks
    }

    /// Symbol at `(x, y)`; `None` for an empty or off-board square.
    pub fn mark_at(&self, x: usize, y: usize) -> Option<&str> {
        self.board
            .get(x, y)
            .and_then(Square::mark)
            .map(|id| self.marks.symbol(id))
    }

    /// Number of marks placed since construction or reset.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Whether the game has been won or drawn.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match self.outcome {
            Some(outcome) => outcome.phase(),
            None if self.move_count == 0 => Phase::Fresh,
            None => Phase::InProgress,
        }
    }

    /// Mark of the most recent move.
    pub fn last_mark(&self) -> Option<&str> {
        self.last_mark.map(|id| self.marks.symbol(id))
    }

    pub(crate) fn last_mark_id(&self) -> Option<MarkId> {
        self.last_mark
    }

    /// Mark expected next: the successor of the last mark.
    ///
    /// `None` before the first move, when any mark may open.
    pub fn next_mark(&self) -> Option<&str> {
        self.last_mark
            .map(|id| self.marks.symbol(self.marks.successor(id)))
    }

    /// Outcome once the game is finished.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Winning mark, if any.
    pub fn winner(&self) -> Option<&str> {
        self.outcome
            .and_then(|o| o.winner())
            .map(|id| self.marks.symbol(id))
    }

    /// The completed line, if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        match self.outcome {
            Some(Outcome::Winner { line, .. }) => Some(line),
            _ => None,
        }
    }

    /// Moves placed since construction or reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Owned, serializable view of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}

impl std::fmt::Display for GameEngine {
    /// Grid with `|` between squares and `-+-` between rows.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.marks.max_width();
        let rule = vec!["-".repeat(width); self.size()].join("+");

        for (y, row) in self.board.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
                writeln!(f, "{}", rule)?;
            }
            for (x, square) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, "|")?;
                }
                let symbol = square.mark().map(|id| self.marks.symbol(id)).unwrap_or("");
                write!(f, "{:<width$}", symbol, width = width)?;
            }
        }
        Ok(())
    }
}
