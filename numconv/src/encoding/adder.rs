// numconv/src/encoding/adder.rs

use crate::types::{Bit, BitString};

/// One full-adder step: returns `(sum, carry_out)`.
///
/// sum = b1 ^ b2 ^ carry
/// carry_out = (b1 & b2) | ((b1 ^ b2) & carry)
pub fn full_add(bit1: Bit, bit2: Bit, carry: Bit) -> (Bit, Bit) {
    let half = bit1 ^ bit2;
    (half ^ carry, (bit1 & bit2) | (half & carry))
}

/// Ripple-carry addition that keeps the carry-out separate.
///
/// Both inputs are left-padded with zeros to the longer length. The returned
/// digits always have exactly that length.
pub fn add_with_carry(a: &BitString, b: &BitString) -> (BitString, Bit) {
    let len = a.len().max(b.len());
    let a = a.padded_to(len);
    let b = b.padded_to(len);

    let mut digits = Vec::with_capacity(len + 1);
    let mut carry = Bit::Zero;
    // Least-significant digit first; reversed once at the end
    for (&bit1, &bit2) in a.bits().iter().rev().zip(b.bits().iter().rev()) {
        let (sum, carry_out) = full_add(bit1, bit2, carry);
        digits.push(sum);
        carry = carry_out;
    }
    digits.reverse();

    (BitString::from_bits(digits), carry)
}

/// Add two binary digit strings. A final carry becomes an extra leading `1`,
/// so the result may be one digit longer than the padded inputs.
pub fn add(a: &BitString, b: &BitString) -> BitString {
    let (sum, carry) = add_with_carry(a, b);
    match carry {
        Bit::Zero => sum,
        Bit::One => {
            let mut digits = Vec::with_capacity(sum.len() + 1);
            digits.push(Bit::One);
            digits.extend(sum.into_bits());
            BitString::from_bits(digits)
        }
    }
}
