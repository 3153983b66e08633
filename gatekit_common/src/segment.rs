//! Seven-segment display encoding.
//!
//! Patterns are active-low: a `0` bit lights its segment. Bit `i` drives
//! `Segment::ALL[i]`, so the MSB-first string form reads `g f e d c b a`.

use std::fmt;
use std::str::FromStr;

use crate::LogicError;

/// One physical segment of a seven-segment digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    /// Top.
    A,
    /// Upper right.
    B,
    /// Lower right.
    C,
    /// Bottom.
    D,
    /// Lower left.
    E,
    /// Upper left.
    F,
    /// Middle.
    G,
}

impl Segment {
    /// Every segment, ordered by the bit that drives it.
    pub const ALL: [Self; 7] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
    ];

    /// The pattern bit that drives this segment.
    #[must_use]
    pub const fn bit(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A 7-bit active-low segment drive pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SegmentPattern {
    /// Drive bits; bit 7 is always clear.
    raw: u8,
}

impl SegmentPattern {
    /// Pattern with every segment dark.
    pub const BLANK: Self = Self::from_raw(0x7F);

    /// Creates a pattern from the low seven bits of `raw`.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self { raw: raw & 0x7F }
    }

    /// The raw 7-bit drive value.
    #[must_use]
    pub const fn raw(&self) -> u8 {
        self.raw
    }

    /// True when `segment` is illuminated.
    #[must_use]
    pub const fn is_lit(&self, segment: Segment) -> bool {
        (self.raw >> segment.bit()) & 1 == 0
    }

    /// The illuminated segments, in bit order.
    pub fn lit_segments(self) -> impl Iterator<Item = Segment> {
        Segment::ALL
            .into_iter()
            .filter(move |segment| self.is_lit(*segment))
    }
}

impl fmt::Display for SegmentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:07b}", self.raw)
    }
}

impl FromStr for SegmentPattern {
    type Err = LogicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 7 || !s.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(LogicError::InvalidSegmentPattern(s.to_string()));
        }
        u8::from_str_radix(s, 2)
            .map(Self::from_raw)
            .map_err(|_| LogicError::InvalidSegmentPattern(s.to_string()))
    }
}
