//! Win detection for the square just played.
//!
//! Only the lines through the placed square can have been completed by it,
//! so the check walks the row and column through `(x, y)` plus whichever
//! diagonals the square lies on. Each walk is a plain loop over `size`
//! squares.

use crate::marks::MarkId;
use crate::phases::Line;
use crate::types::{Board, Square};
use tracing::instrument;

/// Lines passing through `(x, y)` on a `size`×`size` board.
///
/// Always the row and column; the main diagonal when `x == y`; the
/// anti-diagonal when `x + y == size - 1`. The center of an odd board
/// lies on both diagonals.
pub fn lines_through(size: usize, x: usize, y: usize) -> Vec<Line> {
    let mut lines = vec![Line::Row(y), Line::Column(x)];
    if x == y {
        lines.push(Line::MainDiagonal);
    }
    if x + y + 1 == size {
        lines.push(Line::AntiDiagonal);
    }
    lines
}

/// Coordinates of the `i`-th square along `line`.
fn square_on(line: Line, size: usize, i: usize) -> (usize, usize) {
    match line {
        Line::Row(y) => (i, y),
        Line::Column(x) => (x, i),
        Line::MainDiagonal => (i, i),
        Line::AntiDiagonal => (size - 1 - i, i),
    }
}

/// Whether every square along `line` holds `mark`.
pub fn line_is(board: &Board, line: Line, mark: MarkId) -> bool {
    let size = board.size();
    for i in 0..size {
        let (x, y) = square_on(line, size, i);
        if board.get(x, y) != Some(Square::Occupied(mark)) {
            return false;
        }
    }
    true
}

/// First line through `(x, y)` that `mark` fills completely.
///
/// Rows are tried before columns, columns before diagonals.
#[instrument(skip(board), fields(size = board.size()))]
pub fn completed_line(board: &Board, x: usize, y: usize, mark: MarkId) -> Option<Line> {
    lines_through(board.size(), x, y)
        .into_iter()
        .find(|line| line_is(board, *line, mark))
}
