//! Word-wide AND and OR reductions.

use gatekit_common::{AndMode, Bit, Bits, EvalConfig, Word16};

/// Bit-wise AND of two 16-bit words.
#[must_use]
pub fn and16(a: Word16, b: Word16) -> Word16 {
    a & b
}

/// Short-circuit AND over whole words: `a` when `a` is zero, otherwise `b`.
///
/// This is the `a and b` reading of the gate, where each word is treated as a
/// single truth value.
#[must_use]
pub const fn and16_short_circuit(a: Word16, b: Word16) -> Word16 {
    if a.is_zero() { a } else { b }
}

/// 16-bit AND with the semantics selected by `config.and_mode`.
#[must_use]
pub fn and16_with(a: Word16, b: Word16, config: &EvalConfig) -> Word16 {
    match config.and_mode {
        AndMode::Bitwise => and16(a, b),
        AndMode::ShortCircuit => and16_short_circuit(a, b),
    }
}

/// OR of eight independent wires.
#[must_use]
pub fn or8way(inputs: [Bit; 8]) -> Bit {
    inputs.into_iter().any(|bit| bit)
}

/// OR of every bit of `a` into a single wire.
#[must_use]
pub const fn or_n_way<const W: u32>(a: Bits<W>) -> Bit {
    a.any()
}
