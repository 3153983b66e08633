//! Binary to seven-segment hexadecimal decoder.

use gatekit_common::{Bits, SegmentPattern};

/// Drive patterns for inputs 0 to 14.
const HEX_PATTERNS: [SegmentPattern; 15] = [
    SegmentPattern::from_raw(0b100_0000),
    SegmentPattern::from_raw(0b111_1001),
    SegmentPattern::from_raw(0b010_0100),
    SegmentPattern::from_raw(0b011_0000),
    SegmentPattern::from_raw(0b001_1001),
    SegmentPattern::from_raw(0b001_0010),
    SegmentPattern::from_raw(0b000_0010),
    SegmentPattern::from_raw(0b111_1000),
    SegmentPattern::from_raw(0b000_0000),
    SegmentPattern::from_raw(0b001_0000),
    SegmentPattern::from_raw(0b000_1000),
    SegmentPattern::from_raw(0b000_0011),
    SegmentPattern::from_raw(0b100_0110),
    SegmentPattern::from_raw(0b010_0001),
    SegmentPattern::from_raw(0b000_0110),
];

/// Pattern driven for 15 and for every value with no table entry (16 to 31).
pub const DEFAULT_PATTERN: SegmentPattern = SegmentPattern::from_raw(0b000_1110);

/// Decodes the low five bits of `sw` into a seven-segment pattern.
#[must_use]
pub fn bin2hex(sw: u32) -> SegmentPattern {
    let key = Bits::<5>::truncate(sw).value();
    HEX_PATTERNS.get(key as usize).copied().unwrap_or_else(|| {
        tracing::event!(
            tracing::Level::TRACE,
            "bin2hex: {} has no table entry, using default",
            key
        );
        DEFAULT_PATTERN
    })
}
