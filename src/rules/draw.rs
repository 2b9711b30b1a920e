//! Draw detection.

use tracing::instrument;

/// A game is drawn once every square holds a mark.
///
/// Only meaningful after the win check for the last move came back empty.
#[instrument]
pub fn is_draw(move_count: usize, size: usize) -> bool {
    size.checked_mul(size) == Some(move_count)
}
