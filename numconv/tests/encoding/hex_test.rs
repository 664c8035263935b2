#[path = "../common/mod.rs"]
mod common;

use common::fixtures::hex;
use numconv::encoding::{twos_complement, HexEncoder};
use numconv::types::BitWidth;
use proptest::prelude::*;

#[test]
fn documented_examples() {
    assert_eq!(HexEncoder::default().encode(0).unwrap(), hex("0"));
    assert_eq!(HexEncoder::default().encode(255).unwrap(), hex("FF"));
    assert_eq!(HexEncoder::new(BitWidth::BYTE).encode(-1).unwrap(), hex("FF"));
}

#[test]
fn negative_default_width_has_ten_digits() {
    let out = HexEncoder::default().encode(-255).unwrap();
    assert_eq!(out, hex("FFFFFFFF01"));
}

#[test]
fn negative_at_64_bits_matches_hex_crate() {
    let enc = HexEncoder::new(BitWidth::MAX);
    for v in [-1i64, -5, -4096, i64::MIN] {
        let expected = ::hex::encode_upper(v.to_be_bytes());
        assert_eq!(enc.encode(v).unwrap().as_str(), expected);
    }
}

proptest! {
    #[test]
    fn positive_matches_hex_crate_without_leading_zeros(v in 1i64..=i64::MAX) {
        let full = ::hex::encode_upper(v.to_be_bytes());
        let expected = full.trim_start_matches('0');
        let out = HexEncoder::default().encode(v).unwrap();
        prop_assert_eq!(out.as_str(), expected);
    }

    #[test]
    fn nibbles_expand_to_twos_complement(raw in any::<i64>(), bits in 1u32..=40) {
        let width = BitWidth::new(bits).unwrap();
        let v = raw >> (64 - bits);
        let v = if v >= 0 { -v - 1 } else { v };
        let out = HexEncoder::new(width).encode(v).unwrap();
        let pattern = twos_complement::encode(v, width).unwrap().padded_to_multiple(4);
        prop_assert_eq!(out.to_bit_string(), pattern);
    }
}
