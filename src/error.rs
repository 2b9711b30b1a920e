//! Construction errors and the crate-level error umbrella.

use crate::action::MoveError;
use crate::config::ConfigError;
use crate::types::{MIN_SIZE, Square};
use derive_more::{Display, Error, From};

/// Board size the engine cannot be built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SizeError {
    /// Below the minimum side length.
    #[display("Invalid board size {}, should be {} or above", size, MIN_SIZE)]
    TooSmall {
        /// The rejected size.
        size: usize,
    },
    /// `size * size` squares do not fit in memory.
    #[display("Invalid board size {}, too many squares", size)]
    TooLarge {
        /// The rejected size.
        size: usize,
    },
}

impl SizeError {
    /// The rejected size.
    pub fn size(&self) -> usize {
        match self {
            SizeError::TooSmall { size } | SizeError::TooLarge { size } => *size,
        }
    }

    /// Checks `size` against the minimum and against the largest board
    /// whose squares can be addressed.
    pub(crate) fn check(size: usize) -> Result<usize, Self> {
        if size < MIN_SIZE {
            return Err(SizeError::TooSmall { size });
        }

        let fits = size
            .checked_mul(size)
            .and_then(|squares| squares.checked_mul(std::mem::size_of::<Square>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize);

        if fits {
            Ok(size)
        } else {
            Err(SizeError::TooLarge { size })
        }
    }
}

/// Any error the crate can return.
#[derive(Debug, Clone, Display, Error, From)]
pub enum GameError {
    /// Invalid board size.
    #[display("{}", _0)]
    Size(SizeError),
    /// Rejected move.
    #[display("{}", _0)]
    Move(MoveError),
    /// Invalid configuration.
    #[display("{}", _0)]
    Config(ConfigError),
}
