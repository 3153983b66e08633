//! Logical barrel shifter.

use contracts::*;
use gatekit_common::{Bit, Bits};

/// Direction of a barrel shift, as driven by the `dir` wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShiftDirection {
    /// `dir = 0`: towards the least significant bit.
    #[default]
    Right,
    /// `dir = 1`: towards the most significant bit.
    Left,
}

impl From<Bit> for ShiftDirection {
    fn from(dir: Bit) -> Self {
        if dir { Self::Left } else { Self::Right }
    }
}

/// Shifts `a` by `size` positions, filling vacated bits with zero.
///
/// Bits shifted past either end are discarded; shifting by the full width or
/// more yields zero.
#[must_use]
#[ensures(size < W || ret.is_zero())]
pub fn barrel_shift<const W: u32>(a: Bits<W>, dir: ShiftDirection, size: u32) -> Bits<W> {
    if size >= W {
        return Bits::zero();
    }
    match dir {
        ShiftDirection::Right => Bits::truncate(a.value() >> size),
        ShiftDirection::Left => Bits::truncate(a.value() << size),
    }
}
