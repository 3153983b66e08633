#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use gatekit_blocks::prelude::*;
use quickcheck::quickcheck;
use rstest::rstest;

mod common;

fn w(raw: u16) -> Word16 {
    Word16::from(raw)
}

#[rstest]
#[case(0, 0x1111)]
#[case(1, 0x2222)]
#[case(2, 0x3333)]
#[case(3, 0x4444)]
fn test_mux4_selects_input(#[case] sel: u32, #[case] expected: u16) {
    let sel = Selector::<4>::new(sel).unwrap();
    let q = mux4(w(0x1111), w(0x2222), w(0x3333), w(0x4444), sel);
    assert_eq!(u16::from(q), expected);
}

#[rstest]
#[case(0, 0xAAAA)]
#[case(1, 0x5555)]
#[case(2, 0x0000)]
#[case(3, 0x0000)]
fn test_mux2_unused_codes_drive_zero(#[case] sel: u32, #[case] expected: u16) {
    common::init_test_logger();
    let q = mux2(w(0xAAAA), w(0x5555), Selector::new(sel).unwrap());
    assert_eq!(u16::from(q), expected);
}

#[test]
fn test_mux4_unused_codes_drive_zero() {
    common::init_test_logger();
    for sel in 4..16 {
        let q = mux4(w(1), w(2), w(3), w(4), Selector::new(sel).unwrap());
        assert!(q.is_zero(), "sel={sel} should drive zero");
    }
}

#[test]
fn test_mux8_every_code_addresses_an_input() {
    let inputs: [Word16; 8] = std::array::from_fn(|i| w(0x1000 * (i as u16 + 1)));
    for sel in 0..8 {
        let q = mux8(inputs, Selector::new(sel).unwrap());
        assert_eq!(q, inputs[sel as usize]);
    }
}

#[test]
fn test_mux_strict_rejects_unused_codes() {
    common::init_test_logger();
    let result = mux([w(1), w(2)], Selector::<2>::new(3).unwrap(), &EvalConfig::strict());
    assert_eq!(result, Err(LogicError::SelectorOutOfRange { sel: 3, ways: 2 }));

    let ok = mux([w(1), w(2)], Selector::<2>::new(1).unwrap(), &EvalConfig::strict());
    assert_eq!(ok, Ok(w(2)));
}

#[test]
fn test_mux_generic_width() {
    let inputs = [Bits::<5>::truncate(3), Bits::<5>::truncate(17), Bits::<5>::truncate(31)];
    let q = mux(inputs, Selector::<2>::new(1).unwrap(), &EvalConfig::default()).unwrap();
    assert_eq!(q.value(), 17);
}

quickcheck! {
    fn prop_mux8_returns_selected(values: Vec<u16>, sel: u8) -> bool {
        let inputs: [Word16; 8] = std::array::from_fn(|i| w(values.get(i).copied().unwrap_or(0)));
        let sel = Selector::<3>::truncate(u32::from(sel));
        mux8(inputs, sel) == inputs[sel.raw() as usize]
    }

    fn prop_mux4_zero_or_selected(a: u16, b: u16, c: u16, d: u16, sel: u8) -> bool {
        let sel = Selector::<4>::truncate(u32::from(sel));
        let inputs = [a, b, c, d];
        let expected = inputs.get(sel.raw() as usize).copied().unwrap_or(0);
        u16::from(mux4(w(a), w(b), w(c), w(d), sel)) == expected
    }
}
