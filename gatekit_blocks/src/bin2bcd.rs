//! Binary to two-digit BCD conversion.

use gatekit_common::{DigitPair, LogicError, SegmentPattern};

use crate::bin2hex::bin2hex;

/// Splits `b` into its tens and ones digits.
///
/// # Errors
///
/// Returns `LogicError::BcdOutOfRange` when `b > 99`.
pub fn bin2bcd(b: u8) -> Result<DigitPair, LogicError> {
    if b > 99 {
        tracing::event!(tracing::Level::DEBUG, "bin2bcd: {} exceeds two digits", b);
        return Err(LogicError::BcdOutOfRange(b));
    }
    DigitPair::new(b / 10, b % 10)
}

/// Drives a two-digit display with `b`: `[tens, ones]` segment patterns.
///
/// # Errors
///
/// Returns `LogicError::BcdOutOfRange` when `b > 99`.
pub fn display_decimal(b: u8) -> Result<[SegmentPattern; 2], LogicError> {
    let digits = bin2bcd(b)?;
    Ok([
        bin2hex(u32::from(digits.tens())),
        bin2hex(u32::from(digits.ones())),
    ])
}
