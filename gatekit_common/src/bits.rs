//! Fixed-width bit vectors.
//!
//! Every signal in the block library is a `Bits<W>`: an unsigned value that
//! occupies exactly `W` bits. The width is part of the type, so operands of a
//! single operation cannot disagree on it.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use contracts::*;

use crate::LogicError;

/// A single wire.
pub type Bit = bool;

/// The 16-bit data word used by the gates, muxes and the shifter.
pub type Word16 = Bits<16>;

/// An unsigned value of exactly `W` bits (`1 <= W <= 32`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bits<const W: u32> {
    /// Raw value; bits above `W` are always clear.
    inner: u32,
}

impl<const W: u32> Bits<W> {
    /// Width of the signal in bits.
    pub const WIDTH: u32 = W;

    /// Mask covering the low `W` bits.
    pub const MASK: u32 = if W >= 32 { u32::MAX } else { (1u32 << W) - 1 };

    /// Creates a word from a raw integer, rejecting values wider than `W` bits.
    ///
    /// # Errors
    ///
    /// Returns `LogicError::WidthOverflow` when `value` has bits set above `W`.
    pub fn new(value: u32) -> Result<Self, LogicError> {
        const { assert!(W >= 1 && W <= 32, "bit width must be in 1..=32") };
        if value & !Self::MASK != 0 {
            tracing::event!(
                tracing::Level::TRACE,
                "rejecting {:#x} for a {}-bit signal",
                value,
                W
            );
            return Err(LogicError::WidthOverflow { value, width: W });
        }
        Ok(Self { inner: value })
    }

    /// Creates a word from the low `W` bits of `value`, discarding the rest.
    #[must_use]
    pub const fn truncate(value: u32) -> Self {
        const { assert!(W >= 1 && W <= 32, "bit width must be in 1..=32") };
        Self {
            inner: value & Self::MASK,
        }
    }

    /// The all-zero word.
    #[must_use]
    pub const fn zero() -> Self {
        Self { inner: 0 }
    }

    /// The all-ones word.
    #[must_use]
    pub const fn ones() -> Self {
        Self::truncate(u32::MAX)
    }

    /// Builds a word from individual bits, least significant first.
    ///
    /// # Errors
    ///
    /// Returns `LogicError::WidthMismatch` when `bits` does not hold exactly `W` bits.
    pub fn from_bits(bits: &[Bit]) -> Result<Self, LogicError> {
        if bits.len() != W as usize {
            return Err(LogicError::WidthMismatch {
                expected: W,
                found: bits.len(),
            });
        }
        let inner = bits
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, &b)| acc | (u32::from(b) << i));
        Ok(Self { inner })
    }

    /// The raw unsigned value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.inner
    }

    /// Width of the signal in bits.
    #[must_use]
    pub const fn width(&self) -> u32 {
        W
    }

    /// Reads bit `index` (0 is the least significant bit).
    ///
    /// # Panics
    ///
    /// Panics if `index >= W`.
    #[must_use]
    #[requires(index < W)]
    pub fn bit(&self, index: u32) -> Bit {
        (self.inner >> index) & 1 == 1
    }

    /// True when no bit is set.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.inner == 0
    }

    /// OR-reduction over every bit.
    #[must_use]
    pub const fn any(&self) -> Bit {
        self.inner != 0
    }

    /// AND-reduction over every bit.
    #[must_use]
    pub const fn all(&self) -> Bit {
        self.inner == Self::MASK
    }

    /// Iterates the bits, least significant first.
    pub fn iter_bits(self) -> impl Iterator<Item = Bit> {
        (0..W).map(move |i| (self.inner >> i) & 1 == 1)
    }
}

impl<const W: u32> TryFrom<u32> for Bits<W> {
    type Error = LogicError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const W: u32> From<Bits<W>> for u32 {
    fn from(bits: Bits<W>) -> Self {
        bits.inner
    }
}

impl From<u16> for Word16 {
    fn from(value: u16) -> Self {
        Self {
            inner: u32::from(value),
        }
    }
}

impl From<Word16> for u16 {
    fn from(word: Word16) -> Self {
        // Upper bits are clear by construction.
        word.inner as Self
    }
}

impl From<Bit> for Bits<1> {
    fn from(value: Bit) -> Self {
        Self {
            inner: u32::from(value),
        }
    }
}

impl<const W: u32> BitAnd for Bits<W> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            inner: self.inner & rhs.inner,
        }
    }
}

impl<const W: u32> BitOr for Bits<W> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            inner: self.inner | rhs.inner,
        }
    }
}

impl<const W: u32> BitXor for Bits<W> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self {
            inner: self.inner ^ rhs.inner,
        }
    }
}

impl<const W: u32> Not for Bits<W> {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            inner: !self.inner & Self::MASK,
        }
    }
}

/// Prints the word MSB-first as a zero-padded binary string, HDL style.
impl<const W: u32> fmt::Display for Bits<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.inner, width = W as usize)
    }
}

impl<const W: u32> fmt::Binary for Bits<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.inner, f)
    }
}

impl<const W: u32> fmt::LowerHex for Bits<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.inner, f)
    }
}

impl<const W: u32> fmt::UpperHex for Bits<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.inner, f)
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use quickcheck::quickcheck;

    quickcheck! {
        fn prop_truncate_keeps_low_bits(raw: u32) -> bool {
            Bits::<5>::truncate(raw).value() == raw & 0x1F
        }

        fn prop_iter_bits_rebuilds_value(raw: u16) -> bool {
            let word = Word16::from(raw);
            let bits: Vec<Bit> = word.iter_bits().collect();
            Word16::from_bits(&bits) == Ok(word)
        }

        fn prop_not_stays_in_width(raw: u8) -> bool {
            let nibble = Bits::<4>::truncate(u32::from(raw));
            (!nibble).value() <= 0xF && (!!nibble) == nibble
        }
    }
}
