//! Roll configuration and validation.
//!
//! A [`DiceConfig`] can only be built through its validating
//! constructors, so every config the engine sees already satisfies the
//! pool/difficulty/die-size invariants. Configs are `Eq + Hash` and
//! serve as the cache key for probability reports.

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// The largest pool the engine accepts.
pub const MAX_POOL: u32 = 100;

/// A supported die size.
///
/// The game system rolls these five dice; anything else is rejected at
/// configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieSize {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die. The only size with cancellation and
    /// botch/critical classification.
    D10,
    /// Percentile die (1-100).
    D100,
}

impl DieSize {
    /// Returns the number of faces on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D100 => 100,
        }
    }

    /// Look up a die by face count.
    pub fn from_sides(sides: u32) -> DiceResult<Self> {
        match sides {
            4 => Ok(Self::D4),
            6 => Ok(Self::D6),
            8 => Ok(Self::D8),
            10 => Ok(Self::D10),
            100 => Ok(Self::D100),
            other => Err(DiceError::InvalidDiceSize(other)),
        }
    }
}

impl std::fmt::Display for DieSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// A validated roll configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceConfig {
    /// Number of dice rolled in one resolution.
    pub pool: u32,
    /// Minimum face value (below the max face) that counts as a
    /// plain success.
    pub difficulty: u32,
    /// The die to roll.
    pub die: DieSize,
}

impl DiceConfig {
    /// Build a configuration from a raw face count, validating all
    /// invariants before any dice are drawn.
    pub fn new(pool: u32, difficulty: u32, dice_size: u32) -> DiceResult<Self> {
        let die = DieSize::from_sides(dice_size)?;
        Self::with_die(pool, difficulty, die)
    }

    /// Build a configuration from an already-parsed [`DieSize`].
    pub fn with_die(pool: u32, difficulty: u32, die: DieSize) -> DiceResult<Self> {
        if difficulty > die.sides() {
            return Err(DiceError::DifficultyTooHigh {
                got: difficulty,
                sides: die.sides(),
            });
        }
        if pool > MAX_POOL {
            return Err(DiceError::PoolTooLarge { got: pool });
        }
        Ok(Self {
            pool,
            difficulty,
            die,
        })
    }
}

impl std::fmt::Display for DiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{} vs difficulty {}",
            self.pool, self.die, self.difficulty
        )
    }
}
