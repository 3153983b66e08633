//! Error type for caller contract violations.

use thiserror::Error;

/// Caller contract violations detected at a block boundary.
///
/// None of the blocks have runtime failure modes of their own; every variant
/// here describes an input that lies outside the nominal domain of an
/// operation.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum LogicError {
    /// A raw integer has bits set above the declared width.
    #[error("value {value:#x} does not fit in {width} bits")]
    WidthOverflow {
        /// The rejected raw value.
        value: u32,
        /// The declared width of the target signal.
        width: u32,
    },
    /// A bit slice has a different length than the target signal.
    #[error("expected {expected} bits, got {found}")]
    WidthMismatch {
        /// The declared width of the target signal.
        expected: u32,
        /// The number of bits supplied.
        found: usize,
    },
    /// A selector addresses an alternative that does not exist.
    #[error("selector {sel} out of range for {ways}-way block")]
    SelectorOutOfRange {
        /// The raw selector value.
        sel: u32,
        /// Number of alternatives the block provides.
        ways: usize,
    },
    /// Bin2Bcd input above 99.
    #[error("{0} is outside the two-digit BCD range 0..=99")]
    BcdOutOfRange(u8),
    /// A decimal digit above 9.
    #[error("{0} is not a decimal digit")]
    DigitOutOfRange(u8),
    /// A seven-segment string that is not exactly seven `0`/`1` characters.
    #[error("invalid seven-segment pattern: {0:?}")]
    InvalidSegmentPattern(String),
    /// A module name that does not name any block.
    #[error("unknown block: {0}")]
    UnknownBlock(String),
}
