//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over the board. Rules are separated from board storage
//! so the engine and the invariant checks can share them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{completed_line, lines_through};
