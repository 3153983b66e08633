//! Demultiplexers.
//!
//! All outputs are recomputed on every evaluation: the selected output
//! carries the input word and every other output is driven to zero.

use gatekit_common::{Bits, EvalConfig, LogicError, Route, Selector, Word16};

use crate::mux::resolve_out_of_range;

/// Routes `a` to output `sel`, zeroing every other output.
///
/// # Errors
///
/// Returns `LogicError::SelectorOutOfRange` when `sel >= N` under
/// `OutOfRangePolicy::Reject`.
pub fn demux<const W: u32, const S: u32, const N: usize>(
    a: Bits<W>,
    sel: Selector<S>,
    config: &EvalConfig,
) -> Result<[Bits<W>; N], LogicError> {
    let mut outputs = [Bits::zero(); N];
    match sel.route(N) {
        Route::Index(idx) => outputs[idx] = a,
        Route::OutOfRange(raw) => resolve_out_of_range(raw, N, config)?,
    }
    Ok(outputs)
}

/// Two-way 16-bit demux; selector codes 2 and 3 zero both outputs.
#[must_use]
pub fn demux2(a: Word16, sel: Selector<2>) -> [Word16; 2] {
    demux(a, sel, &EvalConfig::default()).unwrap_or_default()
}

/// Four-way 16-bit demux; selector codes 4 to 15 zero every output.
#[must_use]
pub fn demux4(a: Word16, sel: Selector<4>) -> [Word16; 4] {
    demux(a, sel, &EvalConfig::default()).unwrap_or_default()
}

/// Eight-way 16-bit demux. Every selector code addresses an output.
#[must_use]
pub fn demux8(a: Word16, sel: Selector<3>) -> [Word16; 8] {
    demux(a, sel, &EvalConfig::default()).unwrap_or_default()
}
