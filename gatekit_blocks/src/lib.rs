//! Combinational logic blocks.
//!
//! Every block is a pure function of its current inputs: gates and
//! reductions, a barrel shifter, multiplexers and demultiplexers, a
//! seven-segment hex decoder and a binary-to-BCD converter. `BlockKind`
//! describes the port interface each block exposes in HDL form.

pub mod bin2bcd;
pub mod bin2hex;
pub mod catalog;
pub mod demux;
pub mod mux;
pub mod reduce;
pub mod shifter;

pub use crate::bin2bcd::*;
pub use crate::bin2hex::*;
pub use crate::catalog::*;
pub use crate::demux::*;
pub use crate::mux::*;
pub use crate::reduce::*;
pub use crate::shifter::*;

/// Commonly used blocks and value types.
pub mod prelude {
    pub use crate::{
        BlockKind, Port, PortDirection, ShiftDirection, and16, and16_short_circuit, and16_with,
        barrel_shift, bin2bcd, bin2hex, demux, demux2, demux4, demux8, display_decimal, mux,
        mux2, mux4, mux8, or_n_way, or8way,
    };
    pub use gatekit_common::{
        AndMode, Bit, Bits, DigitPair, EvalConfig, LogicError, OutOfRangePolicy, Route, Segment,
        SegmentPattern, Selector, Word16,
    };
}
