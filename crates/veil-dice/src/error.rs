//! Error types for the dice engine.

use crate::config::MAX_POOL;

/// Errors raised when a roll configuration violates an invariant.
///
/// Every variant names the offending field and the rejected value.
/// Invalid configurations are rejected outright, never clamped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// The requested dice size is not a supported die.
    #[error("invalid dice size `{0}`: must be one of 4, 6, 8, 10, or 100")]
    InvalidDiceSize(u32),

    /// The difficulty exceeds the number of faces on the die.
    #[error("difficulty `{got}` cannot exceed the size of the dice (d{sides})")]
    DifficultyTooHigh {
        /// The rejected difficulty.
        got: u32,
        /// The face count of the configured die.
        sides: u32,
    },

    /// The pool exceeds the maximum allowed size.
    #[error("pool `{got}` cannot exceed {MAX_POOL}")]
    PoolTooLarge {
        /// The rejected pool size.
        got: u32,
    },
}

/// Convenience result type for dice engine operations.
pub type DiceResult<T> = Result<T, DiceError>;
