//! Selector buses for muxes and demuxes.
//!
//! A selector bus is often wider than the number of alternatives it picks
//! from (a 2-bit selector on a 2-way mux). `Selector::route` makes the unused
//! codes explicit instead of leaving them to whatever the block happened to
//! drive last.

use std::fmt;

use crate::{Bits, LogicError};

/// Outcome of decoding a selector against a block with a fixed number of ways.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// The selector addresses an existing alternative.
    Index(usize),
    /// The selector value has no alternative; carries the raw value.
    OutOfRange(u32),
}

impl Route {
    /// The selected index, if any.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Index(idx) => Some(*idx),
            Self::OutOfRange(_) => None,
        }
    }

    /// True when the selector addressed nothing.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange(_))
    }
}

/// A `W`-bit selector bus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector<const W: u32> {
    /// The raw selector lines.
    bits: Bits<W>,
}

impl<const W: u32> Selector<W> {
    /// Creates a selector, rejecting values that need more than `W` lines.
    ///
    /// # Errors
    ///
    /// Returns `LogicError::WidthOverflow` when `raw` does not fit in `W` bits.
    pub fn new(raw: u32) -> Result<Self, LogicError> {
        Bits::new(raw).map(|bits| Self { bits })
    }

    /// Creates a selector from the low `W` bits of `raw`.
    #[must_use]
    pub const fn truncate(raw: u32) -> Self {
        Self {
            bits: Bits::truncate(raw),
        }
    }

    /// The raw selector value.
    #[must_use]
    pub const fn raw(&self) -> u32 {
        self.bits.value()
    }

    /// Decodes the selector against a block with `ways` alternatives.
    #[must_use]
    pub const fn route(&self, ways: usize) -> Route {
        let raw = self.bits.value();
        if (raw as usize) < ways {
            Route::Index(raw as usize)
        } else {
            Route::OutOfRange(raw)
        }
    }
}

impl<const W: u32> From<Bits<W>> for Selector<W> {
    fn from(bits: Bits<W>) -> Self {
        Self { bits }
    }
}

impl<const W: u32> TryFrom<u32> for Selector<W> {
    type Error = LogicError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl<const W: u32> fmt::Display for Selector<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sel={}", self.bits)
    }
}
