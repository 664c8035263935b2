#[path = "../common/mod.rs"]
mod common;

use numconv::encoding::twos_complement::{decode, encode, negate};
use numconv::test_support::native_pattern;
use numconv::types::BitWidth;
use numconv::Error;
use proptest::prelude::*;

#[test]
fn encoding_length_equals_width() {
    for bits in [1u32, 4, 8, 10, 40, 64] {
        let width = BitWidth::new(bits).unwrap();
        for v in [0i64, width.max_value(), width.min_value(), -1] {
            assert_eq!(encode(v, width).unwrap().len(), bits as usize);
        }
    }
}

#[test]
fn values_outside_width_are_not_truncated() {
    let width = BitWidth::new(10).unwrap();
    assert!(encode(511, width).is_ok());
    match encode(512, width) {
        Err(Error::WidthOverflow { value, width }) => {
            assert_eq!(value, 512);
            assert_eq!(width, 10);
        }
        other => panic!("expected width overflow, got: {:?}", other),
    }
}

#[test]
fn negate_twice_is_identity() {
    let width = BitWidth::BYTE;
    let five = encode(5, width).unwrap();
    assert_eq!(negate(&five), encode(-5, width).unwrap());
    assert_eq!(negate(&negate(&five)), five);
}

proptest! {
    #[test]
    fn matches_native_pattern(raw in any::<i64>(), bits in 1u32..=64) {
        let width = BitWidth::new(bits).unwrap();
        // arithmetic shift keeps the value inside the signed range of `bits`
        let v = raw >> (64 - bits);
        prop_assert_eq!(encode(v, width).unwrap(), native_pattern(v, bits));
    }

    #[test]
    fn decode_inverts_encode(v in -(1i64 << 39)..(1i64 << 39)) {
        let encoded = encode(v, BitWidth::DEFAULT_HEX).unwrap();
        prop_assert_eq!(decode(&encoded).unwrap(), v);
    }
}
