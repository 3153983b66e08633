#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use gatekit_common::{Bits, LogicError, Word16};
use rstest::rstest;

mod common;

#[test]
fn test_bits_new_in_range() {
    common::init_test_logger();
    let word = Word16::new(0xFFAA).unwrap();

    assert_eq!(word.value(), 0xFFAA);
    assert_eq!(word.width(), 16);
    assert!(word.any());
    assert!(!word.all());
}

#[test]
fn test_bits_new_overflow() {
    common::init_test_logger();
    assert_eq!(
        Bits::<5>::new(32),
        Err(LogicError::WidthOverflow {
            value: 32,
            width: 5
        })
    );
}

#[test]
fn test_bits_truncate_keeps_low_bits() {
    assert_eq!(Bits::<5>::truncate(0b1110_1010).value(), 0b0_1010);
    assert_eq!(Bits::<32>::truncate(u32::MAX).value(), u32::MAX);
}

#[test]
fn test_bits_zero_and_ones() {
    assert!(Word16::zero().is_zero());
    assert_eq!(Word16::ones().value(), 0xFFFF);
    assert!(Word16::ones().all());
    assert_eq!(Bits::<3>::ones().value(), 0b111);
}

#[rstest]
#[case(0, true)]
#[case(1, false)]
#[case(2, true)]
#[case(15, false)]
fn test_bits_read_single_bit(#[case] index: u32, #[case] expected: bool) {
    let word = Word16::from(0b0101_u16);
    assert_eq!(word.bit(index), expected);
}

#[test]
fn test_bits_from_bits_lsb_first() {
    let nibble = Bits::<4>::from_bits(&[true, false, true, true]).unwrap();
    assert_eq!(nibble.value(), 0b1101);
}

#[test]
fn test_bits_from_bits_width_mismatch() {
    assert_eq!(
        Bits::<4>::from_bits(&[true, false]),
        Err(LogicError::WidthMismatch {
            expected: 4,
            found: 2
        })
    );
}

#[test]
fn test_bits_operators_stay_in_width() {
    let a = Word16::from(0xF0F0_u16);
    let b = Word16::from(0xFF00_u16);

    assert_eq!((a & b).value(), 0xF000);
    assert_eq!((a | b).value(), 0xFFF0);
    assert_eq!((a ^ b).value(), 0x0FF0);
    assert_eq!((!a).value(), 0x0F0F);
}

#[test]
fn test_bits_display_is_msb_first() {
    assert_eq!(format!("{}", Word16::from(0x0F5A_u16)), "0000111101011010");
    assert_eq!(format!("{}", Bits::<5>::truncate(3)), "00011");
    assert_eq!(format!("{:#06X}", Word16::from(0xFFAA_u16)), "0xFFAA");
}

#[test]
fn test_bits_conversions() {
    let word: Word16 = 0x1234_u16.into();
    let raw: u16 = word.into();
    assert_eq!(raw, 0x1234);

    let widened: u32 = word.into();
    assert_eq!(widened, 0x1234);

    let bit: Bits<1> = true.into();
    assert_eq!(bit.value(), 1);

    assert!(Bits::<8>::try_from(0x100_u32).is_err());
}
