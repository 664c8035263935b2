#[path = "../common/mod.rs"]
mod common;

use common::fixtures::bits;
use numconv::encoding::adder::{add, add_with_carry};
use numconv::types::Bit;

#[test]
fn ripple_carry_through_every_digit() {
    assert_eq!(add(&bits("0111"), &bits("0001")), bits("1000"));
    assert_eq!(add(&bits("11111111"), &bits("1")), bits("100000000"));
}

#[test]
fn carry_out_is_inspectable() {
    let (sum, carry) = add_with_carry(&bits("1000"), &bits("1000"));
    assert_eq!(sum, bits("0000"));
    assert_eq!(carry, Bit::One);

    let (sum, carry) = add_with_carry(&bits("0100"), &bits("0011"));
    assert_eq!(sum, bits("0111"));
    assert_eq!(carry, Bit::Zero);
}

#[test]
fn commutative_on_examples() {
    let pairs = [("1011", "0110"), ("1", "1111"), ("0000", "0000")];
    for (a, b) in pairs {
        assert_eq!(add(&bits(a), &bits(b)), add(&bits(b), &bits(a)));
    }
}
