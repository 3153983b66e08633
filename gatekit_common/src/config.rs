//! Evaluation policy for the combinational blocks.
//!
//! The blocks are total functions, but two behaviours of the HDL they model
//! are open to interpretation:
//! - and_mode: whether the 16-bit AND is a true bit-wise AND or the
//!   short-circuit "truthiness" AND (`a and b`) of the HDL block.
//! - out_of_range: what a mux/demux does when its selector addresses an
//!   alternative that does not exist.
//!
//! ```ignore
//! use gatekit_common::{AndMode, EvalConfig, OutOfRangePolicy};
//! let cfg = EvalConfig::new()
//!     .with_and_mode(AndMode::ShortCircuit)
//!     .with_out_of_range(OutOfRangePolicy::Reject);
//! ```

use contracts::*;
use serde::{Deserialize, Serialize};

/// Semantics of the 16-bit AND gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AndMode {
    /// `q[i] = a[i] & b[i]` for every bit.
    #[default]
    Bitwise,
    /// `q = a` when `a` is zero, else `q = b`.
    ShortCircuit,
}

/// Behaviour of a mux or demux whose selector addresses no alternative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRangePolicy {
    /// Drive every output to the all-zero word.
    #[default]
    Zero,
    /// Fail with `LogicError::SelectorOutOfRange`.
    Reject,
}

/// Evaluation configuration shared by every block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Semantics of `and16`.
    pub and_mode: AndMode,
    /// Selector fallback for muxes and demuxes.
    pub out_of_range: OutOfRangePolicy,
}

impl EvalConfig {
    /// Creates the default configuration: bit-wise AND, zero on bad selectors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that rejects out-of-range selectors.
    #[must_use]
    pub fn strict() -> Self {
        Self::new().with_out_of_range(OutOfRangePolicy::Reject)
    }

    /// Sets the AND gate semantics.
    #[must_use]
    #[ensures(ret.and_mode == and_mode)]
    pub fn with_and_mode(mut self, and_mode: AndMode) -> Self {
        self.and_mode = and_mode;
        self
    }

    /// Sets the out-of-range selector policy.
    #[must_use]
    #[ensures(ret.out_of_range == out_of_range)]
    pub fn with_out_of_range(mut self, out_of_range: OutOfRangePolicy) -> Self {
        self.out_of_range = out_of_range;
        self
    }
}
