//! Two-digit decimal values produced by the BCD converter.

use std::fmt;

use contracts::*;

use crate::LogicError;

/// Tens and ones digits of a two-digit decimal number, each in `0..=9`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DigitPair {
    /// Most significant digit (`bcd1`).
    tens: u8,
    /// Least significant digit (`bcd0`).
    ones: u8,
}

impl DigitPair {
    /// Creates a digit pair, rejecting anything that is not a decimal digit.
    ///
    /// # Errors
    ///
    /// Returns `LogicError::DigitOutOfRange` when either digit exceeds 9.
    #[ensures(ret.as_ref().map(|p| p.tens == tens && p.ones == ones).unwrap_or(true))]
    pub fn new(tens: u8, ones: u8) -> Result<Self, LogicError> {
        for digit in [tens, ones] {
            if digit > 9 {
                return Err(LogicError::DigitOutOfRange(digit));
            }
        }
        Ok(Self { tens, ones })
    }

    /// The tens digit.
    #[must_use]
    pub const fn tens(&self) -> u8 {
        self.tens
    }

    /// The ones digit.
    #[must_use]
    pub const fn ones(&self) -> u8 {
        self.ones
    }

    /// Recombines the digits into the value they encode.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.tens * 10 + self.ones
    }

    /// Packs both digits into one byte, tens in the high nibble.
    #[must_use]
    pub const fn packed(&self) -> u8 {
        (self.tens << 4) | self.ones
    }
}

impl fmt::Display for DigitPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tens, self.ones)
    }
}
