//! Dice validation for table submissions.
//!
//! A roll is two six-sided dice entered by hand. Both faces must be in 1..=6
//! before anything is sent to the server.

use monopoly_client::DiceRoll;
use rand::Rng;
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Faces of a standard six-sided die.
pub const DIE_FACES: RangeInclusive<i64> = 1..=6;

/// Warning shown when a submission is blocked.
pub const RANGE_WARNING: &str = "Dice must be between 1 and 6";

/// Which of the two dice a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DieSlot {
    First,
    Second,
}

impl fmt::Display for DieSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DieSlot::First => write!(f, "first die"),
            DieSlot::Second => write!(f, "second die"),
        }
    }
}

/// Error type for dice entry.
///
/// Every variant displays the same warning; the details are kept for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("Dice must be between 1 and 6")]
    OutOfRange { slot: DieSlot, value: i64 },
    #[error("Dice must be between 1 and 6")]
    NotANumber(String),
}

impl DiceError {
    /// Description for diagnostics, including the offending value.
    pub fn detail(&self) -> String {
        match self {
            DiceError::OutOfRange { slot, value } => format!("{slot} out of range: {value}"),
            DiceError::NotANumber(text) => format!("not a number: {text:?}"),
        }
    }
}

/// Check a single die value.
pub fn validate_die(slot: DieSlot, value: i64) -> Result<u8, DiceError> {
    if DIE_FACES.contains(&value) {
        // In 1..=6, so the narrowing cannot truncate.
        Ok(value as u8)
    } else {
        Err(DiceError::OutOfRange { slot, value })
    }
}

/// Validate both dice and build the submission payload.
pub fn validate_roll(dice1: i64, dice2: i64) -> Result<DiceRoll, DiceError> {
    let first = validate_die(DieSlot::First, dice1)?;
    let second = validate_die(DieSlot::Second, dice2)?;
    Ok(DiceRoll::new(first, second))
}

/// Parse the text of a dice field.
///
/// An empty field reads as 0 (which then fails validation). Surrounding
/// whitespace is ignored.
pub fn parse_die_input(text: &str) -> Result<i64, DiceError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0);
    }
    text.parse::<i64>()
        .map_err(|_| DiceError::NotANumber(text.to_string()))
}

/// Roll two dice.
pub fn roll_random<R: Rng + ?Sized>(rng: &mut R) -> DiceRoll {
    DiceRoll::new(rng.gen_range(1..=6), rng.gen_range(1..=6))
}
