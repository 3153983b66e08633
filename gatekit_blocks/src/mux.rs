//! Multiplexers.
//!
//! The fixed wrappers keep the selector widths of the HDL blocks they model:
//! `mux2way` has a 2-bit selector and `mux4way` a 4-bit one, so both can be
//! driven with codes that address no input. Those codes are resolved through
//! `EvalConfig::out_of_range` rather than holding a previous value.

use gatekit_common::{Bits, EvalConfig, LogicError, OutOfRangePolicy, Route, Selector, Word16};

/// Applies the out-of-range policy for a selector that addressed nothing.
///
/// Returns `Ok(())` when the caller should drive all-zero outputs.
pub(crate) fn resolve_out_of_range(
    sel: u32,
    ways: usize,
    config: &EvalConfig,
) -> Result<(), LogicError> {
    match config.out_of_range {
        OutOfRangePolicy::Zero => {
            tracing::event!(
                tracing::Level::TRACE,
                "selector {} out of range for {}-way block, driving zero",
                sel,
                ways
            );
            Ok(())
        },
        OutOfRangePolicy::Reject => {
            tracing::event!(
                tracing::Level::DEBUG,
                "rejecting selector {} for {}-way block",
                sel,
                ways
            );
            Err(LogicError::SelectorOutOfRange { sel, ways })
        },
    }
}

/// Selects `inputs[sel]`.
///
/// # Errors
///
/// Returns `LogicError::SelectorOutOfRange` when `sel >= N` under
/// `OutOfRangePolicy::Reject`.
pub fn mux<const W: u32, const S: u32, const N: usize>(
    inputs: [Bits<W>; N],
    sel: Selector<S>,
    config: &EvalConfig,
) -> Result<Bits<W>, LogicError> {
    match sel.route(N) {
        Route::Index(idx) => Ok(inputs[idx]),
        Route::OutOfRange(raw) => resolve_out_of_range(raw, N, config).map(|()| Bits::zero()),
    }
}

/// Two-way 16-bit mux; selector codes 2 and 3 drive zero.
#[must_use]
pub fn mux2(a: Word16, b: Word16, sel: Selector<2>) -> Word16 {
    mux([a, b], sel, &EvalConfig::default()).unwrap_or_default()
}

/// Four-way 16-bit mux; selector codes 4 to 15 drive zero.
#[must_use]
pub fn mux4(a: Word16, b: Word16, c: Word16, d: Word16, sel: Selector<4>) -> Word16 {
    mux([a, b, c, d], sel, &EvalConfig::default()).unwrap_or_default()
}

/// Eight-way 16-bit mux. Every selector code addresses an input.
#[must_use]
pub fn mux8(inputs: [Word16; 8], sel: Selector<3>) -> Word16 {
    mux(inputs, sel, &EvalConfig::default()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_zero_is_not_an_error() {
        assert_eq!(resolve_out_of_range(3, 2, &EvalConfig::default()), Ok(()));
    }

    #[test]
    fn out_of_range_reject_reports_selector() {
        assert_eq!(
            resolve_out_of_range(5, 4, &EvalConfig::strict()),
            Err(LogicError::SelectorOutOfRange { sel: 5, ways: 4 })
        );
    }
}
