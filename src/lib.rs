//! Strictly NxN - rules engine for N×N tic-tac-toe
//!
//! A standalone library: the caller supplies moves and reads back the game
//! status. Board size is any N ≥ 3 and the marks are a configurable,
//! ordered set (default "X" then "O") whose order is the turn order.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the board, turn state, and move count
//! - **Rules**: win check over the lines through the placed square, draw check
//! - **Contracts**: ordered move preconditions and post-move invariants
//! - **Config**: [`GameConfig`], loadable from TOML
//!
//! # Example
//!
//! ```
//! use strictly_nxn::{GameEngine, GameStatus};
//!
//! # fn example() -> Result<(), strictly_nxn::GameError> {
//! let mut engine = GameEngine::new(3)?;
//! assert_eq!(engine.make_move(0, 0, "X")?, GameStatus::Continue);
//! assert!(engine.make_move(1, 1, "X").is_err()); // X just moved
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod config;
mod contracts;
mod engine;
mod error;
mod marks;
mod phases;
mod snapshot;
mod types;

// Public module declarations
pub mod invariants;
pub mod rules;

// Crate-level exports - Engine
pub use engine::GameEngine;

// Crate-level exports - Moves and errors
pub use action::{Move, MoveError};
pub use error::{GameError, SizeError};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};
pub use marks::{MarkId, MarkSet};

// Crate-level exports - Game types
pub use phases::{Line, Outcome, Phase};
pub use snapshot::GameSnapshot;
pub use types::{Board, GameStatus, MIN_SIZE, Square};

// Crate-level exports - Contracts
pub use contracts::{
    Contract, InRange, LegalMove, MarksAlternate, MoveContract, SquareIsEmpty, SupportedMark,
};
